//! Command-line interface for strictly_rps.

use clap::{Parser, Subcommand};

/// Strictly RPS - beat the challenge, or lose to it
#[derive(Parser, Debug)]
#[command(name = "strictly_rps")]
#[command(about = "Rock-paper-scissors drill for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "strictly_rps.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the interactive terminal game
    Play {
        /// RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Toss a coin for the required outcome instead of alternating
        #[arg(long)]
        random_outcomes: bool,

        /// Show plain words instead of emoji
        #[arg(long)]
        ascii: bool,
    },

    /// Let a bot play whole games and report the scores
    Autoplay {
        /// Number of games to play
        #[arg(short, long, default_value = "5")]
        games: u32,

        /// Probability the bot answers correctly (0.0-1.0)
        #[arg(short, long, default_value = "0.75", value_parser = parse_accuracy)]
        accuracy: f64,

        /// RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the answer table
    Rules,
}

fn parse_accuracy(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("accuracy must be between 0 and 1, got {}", value))
    }
}
