//! The answer table.
//!
//! Pure functions only: nothing here touches game state, so the table
//! can be checked exhaustively.

use super::types::{Move, Outcome};
use tracing::instrument;

/// Returns the unique move that satisfies `required` against `challenge`.
///
/// | challenge | MustWin  | MustLose |
/// |-----------|----------|----------|
/// | Rock      | Paper    | Scissors |
/// | Paper     | Scissors | Rock     |
/// | Scissors  | Rock     | Paper    |
#[instrument]
pub fn correct_move(challenge: Move, required: Outcome) -> Move {
    match required {
        Outcome::MustWin => challenge.beaten_by(),
        Outcome::MustLose => challenge.beats(),
    }
}

/// Whether `chosen` satisfies `required` against `challenge`.
#[instrument]
pub fn is_correct(challenge: Move, required: Outcome, chosen: Move) -> bool {
    chosen == correct_move(challenge, required)
}
