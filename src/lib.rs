//! insight-theory: a localized science-fact explorer for the terminal.
//!
//! One page: a language selector, a random-fact generator, substring
//! search over the collection — all over an ambient animated starfield.

pub mod facts;
pub mod i18n;
pub mod search;
pub mod sky;
pub mod tui;
