//! Catalog dump example - run with: cargo run --example catalog [key...]

use std::env;

use insight_theory::i18n::{self, Locale};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let keys: Vec<&str> = if args.is_empty() {
        vec![
            "title",
            "subtitle",
            "randomFactButton",
            "searchPlaceholder",
            "noResults",
        ]
    } else {
        args.iter().map(String::as_str).collect()
    };

    for locale in Locale::ALL {
        println!("[{}] {:?}", locale.code(), locale.direction());
        for key in &keys {
            println!("  {:18} {}", key, i18n::translate(locale, key));
        }
        println!();
    }
}
