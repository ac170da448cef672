//! Contract-based validation for turn transitions.
//!
//! Contracts formalize the Hoare-style reasoning: {P} action {Q}

use super::action::RoundError;
use super::game::GameState;
use super::invariants::{DrillInvariants, InvariantSet};
use super::types::Move;
use super::{CORRECT_REWARD, MAX_TURNS, WRONG_PENALTY};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RoundError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RoundError>;
}

/// Folds invariant violations into a single error.
fn invariants_hold(game: &GameState) -> Result<(), RoundError> {
    DrillInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        RoundError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for answering a turn.
///
/// No preconditions: every move is a legal answer.
///
/// Postconditions:
/// - score moved by exactly +1 or -2
/// - one round was appended
/// - the turn did not change
pub struct SubmitContract;

impl Contract<GameState, Move> for SubmitContract {
    fn pre(_game: &GameState, _action: &Move) -> Result<(), RoundError> {
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), RoundError> {
        let delta = after.score() - before.score();
        if delta != CORRECT_REWARD && delta != -WRONG_PENALTY {
            warn!(delta, "Score delta out of law");
            return Err(RoundError::InvariantViolation(format!(
                "Score changed by {}",
                delta
            )));
        }
        if after.history().len() != before.history().len() + 1 {
            return Err(RoundError::InvariantViolation(
                "Submission did not record a round".to_string(),
            ));
        }
        if after.turn() != before.turn() {
            return Err(RoundError::InvariantViolation(
                "Submission changed the turn".to_string(),
            ));
        }
        invariants_hold(after)
    }
}

/// Contract for moving to the next turn.
///
/// Precondition: the current turn is not the last.
///
/// Postconditions:
/// - turn went up by one
/// - score is unchanged
pub struct AdvanceContract;

impl Contract<GameState, ()> for AdvanceContract {
    #[instrument(skip_all)]
    fn pre(game: &GameState, _action: &()) -> Result<(), RoundError> {
        if game.turn() >= MAX_TURNS {
            Err(RoundError::GameFinished(game.turn()))
        } else {
            Ok(())
        }
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), RoundError> {
        if after.turn() != before.turn() + 1 {
            return Err(RoundError::InvariantViolation(format!(
                "Turn went from {} to {}",
                before.turn(),
                after.turn()
            )));
        }
        if after.score() != before.score() {
            return Err(RoundError::InvariantViolation(
                "Advancing changed the score".to_string(),
            ));
        }
        invariants_hold(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_advance_precondition_on_last_turn() {
        let mut game = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        assert!(AdvanceContract::pre(&game, &()).is_ok());

        game.turn = MAX_TURNS;
        assert_eq!(
            AdvanceContract::pre(&game, &()),
            Err(RoundError::GameFinished(MAX_TURNS))
        );
    }

    #[test]
    fn test_submit_postcondition_holds() {
        let before = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        let mut after = before.clone();
        after.submit_move(Move::Rock);
        assert!(SubmitContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_submit_postcondition_detects_bad_delta() {
        let before = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        let mut after = before.clone();
        after.submit_move(Move::Paper);
        after.score += 1;
        assert!(matches!(
            SubmitContract::post(&before, &after),
            Err(RoundError::InvariantViolation(_))
        ));
    }
}
