//! Core domain types for the rock-paper-scissors drill.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A hand the player (or the challenge) can show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Move {
    /// Rock (blunts scissors).
    Rock,
    /// Paper (covers rock).
    Paper,
    /// Scissors (cut paper).
    Scissors,
}

impl Move {
    /// All three moves, in button order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    #[instrument]
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    #[instrument]
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Pictographic symbol shown on the move buttons.
    pub fn symbol(self) -> &'static str {
        match self {
            Move::Rock => "🪨",
            Move::Paper => "📜",
            Move::Scissors => "✂️",
        }
    }

    /// Plain-text label.
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Position of this move in [`Move::ALL`].
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Looks a move up by its button index (0-2).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a label or its initial letter, case-insensitively.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        <Move as strum::IntoEnumIterator>::iter().find(|mv| {
            let label = mv.label().to_lowercase();
            label == s || label.get(..1) == Some(s.as_str())
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What the player's answer has to achieve against the challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Pick the move that beats the challenge.
    MustWin,
    /// Pick the move that loses to the challenge.
    MustLose,
}

impl Outcome {
    /// Returns the other outcome.
    pub fn toggle(self) -> Self {
        match self {
            Outcome::MustWin => Outcome::MustLose,
            Outcome::MustLose => Outcome::MustWin,
        }
    }

    /// Verb used in the instruction line.
    pub fn verb(self) -> &'static str {
        match self {
            Outcome::MustWin => "Win",
            Outcome::MustLose => "Lose",
        }
    }
}

impl From<bool> for Outcome {
    fn from(should_win: bool) -> Self {
        if should_win {
            Outcome::MustWin
        } else {
            Outcome::MustLose
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verb())
    }
}

/// Whether the current game still has turns left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// More turns follow the current one.
    InProgress,
    /// The current turn is the last; the next step is a restart.
    Finished,
}

/// One answered turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Turn number the answer was given on.
    pub turn: u32,
    /// Challenge shown on that turn.
    pub challenge: Move,
    /// Outcome required on that turn.
    pub required: Outcome,
    /// Move the player picked.
    pub chosen: Move,
    /// Whether the pick satisfied the required outcome.
    pub correct: bool,
}

impl Round {
    /// Score change this round contributed.
    pub fn delta(&self) -> i32 {
        if self.correct {
            crate::CORRECT_REWARD
        } else {
            -crate::WRONG_PENALTY
        }
    }
}

/// Result of submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Whether the move satisfied the required outcome.
    pub is_correct: bool,
    /// Score after applying the move.
    pub new_score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_and_beaten_by_are_inverse() {
        for mv in Move::ALL {
            assert_eq!(mv.beats().beaten_by(), mv);
            assert_eq!(mv.beaten_by().beats(), mv);
            assert_ne!(mv.beats(), mv.beaten_by());
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Move::from_label("rock"), Some(Move::Rock));
        assert_eq!(Move::from_label(" Paper "), Some(Move::Paper));
        assert_eq!(Move::from_label("s"), Some(Move::Scissors));
        assert_eq!(Move::from_label("lizard"), None);
    }

    #[test]
    fn test_index_roundtrip() {
        for mv in Move::ALL {
            assert_eq!(Move::from_index(mv.index()), Some(mv));
        }
        assert_eq!(Move::from_index(3), None);
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Outcome::MustWin.toggle(), Outcome::MustLose);
        assert_eq!(Outcome::MustLose.toggle(), Outcome::MustWin);
    }
}
