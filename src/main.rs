//! Strictly RPS - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_roshambo::{GameState, Move, Outcome, OutcomePolicy, correct_move};
use strictly_rps::{Bot, GameConfig, SymbolStyle, autoplay, init_stderr, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        seed: None,
        random_outcomes: false,
        ascii: false,
    }) {
        Command::Play {
            seed,
            random_outcomes,
            ascii,
        } => {
            let mut config = config.with_seed(seed);
            if random_outcomes {
                config = config.with_outcome_policy(OutcomePolicy::Random);
            }
            if ascii {
                config = config.with_symbols(SymbolStyle::Ascii);
            }
            run_tui(&config)
        }
        Command::Autoplay {
            games,
            accuracy,
            seed,
        } => run_autoplay(config.with_seed(seed), games, accuracy),
        Command::Rules => {
            print_rules();
            Ok(())
        }
    }
}

/// Plays `games` bot games and prints each final score.
#[instrument(skip(config))]
fn run_autoplay(config: GameConfig, games: u32, accuracy: f64) -> Result<()> {
    init_stderr();
    info!(games, accuracy, "Starting autoplay");

    let mut rng = config.rng();
    let mut game = GameState::with_policy(*config.outcome_policy(), &mut rng);
    let summaries = autoplay(&Bot::new(accuracy), &mut game, games, &mut rng);

    for (i, summary) in summaries.iter().enumerate() {
        println!(
            "Game {}: final score {} ({} correct, {} wrong)",
            i + 1,
            summary.final_score(),
            summary.correct(),
            summary.wrong()
        );
    }
    if !summaries.is_empty() {
        let total: i32 = summaries.iter().map(|s| *s.final_score()).sum();
        println!(
            "Average score: {:.2}",
            f64::from(total) / summaries.len() as f64
        );
    }
    Ok(())
}

/// Prints the correct answer for every challenge and outcome.
fn print_rules() {
    println!("{:<10} {:<10} {:<10}", "Challenge", "Win", "Lose");
    for challenge in Move::ALL {
        println!(
            "{:<10} {:<10} {:<10}",
            challenge.label(),
            correct_move(challenge, Outcome::MustWin).label(),
            correct_move(challenge, Outcome::MustLose).label()
        );
    }
}
