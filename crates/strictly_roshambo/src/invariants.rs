//! First-class invariants for a drill game.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

use super::game::GameState;
use super::MAX_TURNS;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the turn counter stays in `1..=MAX_TURNS`.
pub struct TurnInBounds;

impl Invariant<GameState> for TurnInBounds {
    fn holds(game: &GameState) -> bool {
        (1..=MAX_TURNS).contains(&game.turn())
    }

    fn description() -> &'static str {
        "Turn stays between 1 and the turn limit"
    }
}

/// Invariant: the score is exactly what the answered rounds add up to.
pub struct ScoreMatchesHistory;

impl Invariant<GameState> for ScoreMatchesHistory {
    fn holds(game: &GameState) -> bool {
        let expected: i32 = game.history().iter().map(|round| round.delta()).sum();
        game.score() == expected
    }

    fn description() -> &'static str {
        "Score equals the sum of round rewards and penalties"
    }
}

/// Invariant: no round is recorded for a turn that has not started.
pub struct HistoryMatchesTurn;

impl Invariant<GameState> for HistoryMatchesTurn {
    fn holds(game: &GameState) -> bool {
        let in_order = game
            .history()
            .windows(2)
            .all(|pair| pair[0].turn <= pair[1].turn);
        let not_ahead = game
            .history()
            .last()
            .is_none_or(|round| round.turn <= game.turn());
        in_order && not_ahead
    }

    fn description() -> &'static str {
        "History is ordered by turn and never ahead of the current turn"
    }
}

/// All drill invariants composed.
pub type DrillInvariants = (TurnInBounds, ScoreMatchesHistory, HistoryMatchesTurn);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Outcome};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        assert!(DrillInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_holds_through_a_full_game() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = GameState::new(&mut rng);
        for _ in 0..MAX_TURNS {
            game.submit_move(Move::Paper);
            assert!(DrillInvariants::check_all(&game).is_ok());
            game.proceed(&mut rng);
            assert!(DrillInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn test_score_mismatch_detected() {
        let mut game = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        game.submit_move(Move::Paper);
        game.score += 5;

        let violations = DrillInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, ScoreMatchesHistory::description());
    }

    #[test]
    fn test_turn_out_of_bounds_detected() {
        let mut game = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        game.turn = MAX_TURNS + 1;
        assert!(!TurnInBounds::holds(&game));
    }
}
