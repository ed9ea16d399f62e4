//! Search the builtin collection from the command line (no TUI).
//!
//! Run with: cargo run --example search <term>

use std::env;
use std::process;

use insight_theory::facts::FactSet;
use insight_theory::search;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example search <term>");
        process::exit(1);
    }
    let term = args[1..].join(" ");

    let facts = match FactSet::builtin() {
        Ok(facts) => facts,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Searching {} facts for: {:?}\n", facts.len(), term);

    let hits = search::filter_facts(facts.all(), &term);
    if hits.is_empty() {
        println!("No facts found.");
        return;
    }

    for fact in &hits {
        println!("  {}", fact);
    }

    println!();
    println!("---");
    println!("Found {} of {}", hits.len(), facts.len());
}
