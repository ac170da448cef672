//! Errors raised by state transitions.

/// Error that can occur when moving a game between turns.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// The last turn has been reached; the game must be restarted.
    #[display("Turn {} is the last turn; restart the game", _0)]
    GameFinished(u32),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RoundError {}
