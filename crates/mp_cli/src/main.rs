//! MatchPulse CLI
//!
//! Batch analysis of a single match JSON document: turning points,
//! key players, and the raw momentum series.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mp_cli")]
#[command(about = "Analyze football match event logs for momentum turning points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Detect turning points and print the full analysis as JSON
    Analyze {
        /// Input match JSON file path
        #[arg(long)]
        match_file: PathBuf,

        /// Seed for explanation paraphrase selection
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Rank the players behind the turning point nearest to a minute
    Players {
        /// Input match JSON file path
        #[arg(long)]
        match_file: PathBuf,

        /// Minute to look up (5-minute tolerance)
        #[arg(long)]
        minute: u8,

        /// Number of top players to report
        #[arg(long, default_value = "5")]
        top_n: usize,
    },

    /// Print the per-bucket momentum series as JSON
    Momentum {
        /// Input match JSON file path
        #[arg(long)]
        match_file: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { match_file, seed } => {
            let match_data = load_match(&match_file)?;
            let analysis = mp_core::analyze_match(&match_data, seed);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }

        Commands::Players { match_file, minute, top_n } => {
            let match_data = load_match(&match_file)?;
            let response = mp_core::analyze_players(&match_data, minute, top_n)
                .with_context(|| format!("no turning point near minute {minute}"))?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Momentum { match_file } => {
            let match_data = load_match(&match_file)?;
            let series = mp_core::build_momentum_series(&match_data);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_match(path: &PathBuf) -> Result<mp_core::MatchData> {
    mp_core::data::load_match_json(path)
        .with_context(|| format!("failed to load match file: {}", path.display()))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("mp_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
