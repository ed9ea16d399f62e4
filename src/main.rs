//! insight-theory CLI
//!
//! Browse localized science facts in the terminal, under an animated sky.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::Rng;

use insight_theory::facts::FactSet;
use insight_theory::i18n::Locale;
use insight_theory::tui;

#[derive(Parser)]
#[command(name = "insight-theory")]
#[command(about = "Browse localized science facts under an animated terminal sky")]
#[command(version)]
struct Cli {
    /// Interface language at startup
    #[arg(long, value_enum, default_value = "en")]
    locale: LocaleArg,

    /// JSON file with a custom fact collection ({ "facts": [...] })
    #[arg(long)]
    facts: Option<PathBuf>,

    /// Seed for the backdrop animation (default: random each run)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    En,
    Ar,
    Fr,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Ar => Locale::Ar,
            LocaleArg::Fr => Locale::Fr,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve the fact collection, then hand off to the TUI.
///
/// An empty or unreadable collection fails here, before the terminal
/// is put into raw mode.
fn run(cli: Cli) -> Result<(), String> {
    let facts = match &cli.facts {
        Some(path) => FactSet::from_path(path),
        None => FactSet::builtin(),
    }
    .map_err(|e| e.to_string())?;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    tui::run::run(facts, cli.locale.into(), seed).map_err(|e| e.to_string())
}
