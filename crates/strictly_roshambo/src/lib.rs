//! Pure game logic for the rock-paper-scissors drill.
//!
//! Each turn shows a challenge move and a required outcome. The player must
//! answer with the move that beats the challenge (`MustWin`) or loses to it
//! (`MustLose`). Correct answers score +1, wrong ones -2, and a game lasts
//! [`MAX_TURNS`] turns.
//!
//! # Example
//!
//! ```
//! use strictly_roshambo::{GameState, Move, Outcome};
//!
//! let mut game = GameState::with_challenge(Move::Rock, Outcome::MustWin);
//! let submission = game.submit_move(Move::Paper);
//! assert!(submission.is_correct);
//! assert_eq!(submission.new_score, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod draw;
mod game;
mod invariants;
mod rules;
mod types;

/// Turns in one game.
pub const MAX_TURNS: u32 = 10;

/// Points added for a correct answer.
pub const CORRECT_REWARD: i32 = 1;

/// Points taken away for a wrong answer.
pub const WRONG_PENALTY: i32 = 2;

pub use action::RoundError;
pub use contracts::{AdvanceContract, Contract, SubmitContract};
pub use draw::{OutcomePolicy, draw_move, draw_outcome};
pub use game::{GameState, Progress};
pub use invariants::{
    DrillInvariants, HistoryMatchesTurn, Invariant, InvariantSet, InvariantViolation,
    ScoreMatchesHistory, TurnInBounds,
};
pub use rules::{correct_move, is_correct};
pub use types::{GameStatus, Move, Outcome, Round, Submission};
