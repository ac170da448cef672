//! Strictly RPS - terminal rock-paper-scissors drill
//!
//! Each turn shows a challenge and asks the player to either beat it or
//! lose to it. The rules live in [`strictly_roshambo`]; this crate adds
//! configuration, logging, the terminal front end and a headless bot.
//!
//! # Architecture
//!
//! - **Config**: TOML settings (seed, outcome policy, symbols, log file)
//! - **TUI**: ratatui view over a single owned [`GameState`]
//! - **Autoplay**: a bot that plays whole games without a terminal
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_rps::{Bot, GameState, autoplay};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = GameState::new(&mut rng);
//! let summaries = autoplay(&Bot::new(1.0), &mut game, 1, &mut rng);
//! assert_eq!(*summaries[0].final_score(), 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod config;
mod logging;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, SymbolStyle};

// Crate-level exports - Logging
pub use logging::{init_file, init_stderr};

// Crate-level exports - Terminal UI
pub use tui::{App, Control, Dialog, key_to_move, move_cursor, run_tui};

// Crate-level exports - Autoplay
pub use autoplay::{Bot, GameSummary, autoplay};

// Crate-level exports - Game types
pub use strictly_roshambo::{
    GameState, GameStatus, MAX_TURNS, Move, Outcome, OutcomePolicy, Progress, Submission,
    correct_move,
};
