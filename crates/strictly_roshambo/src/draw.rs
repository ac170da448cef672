//! Random draws for challenges and required outcomes.
//!
//! Generic over [`rand::Rng`] so callers pick the source: OS entropy in
//! the app, a seeded [`rand::rngs::StdRng`] in tests.

use super::types::{Move, Outcome};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Draws a challenge uniformly from the three moves.
#[instrument(skip(rng))]
pub fn draw_move<R: Rng>(rng: &mut R) -> Move {
    let index = rng.random_range(0..Move::ALL.len());
    let mv = Move::ALL[index];
    trace!(challenge = %mv, "Drew challenge");
    mv
}

/// Draws a required outcome with a fair coin.
#[instrument(skip(rng))]
pub fn draw_outcome<R: Rng>(rng: &mut R) -> Outcome {
    Outcome::from(rng.random_bool(0.5))
}

/// How the required outcome changes between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomePolicy {
    /// Flip the previous outcome: Win, Lose, Win, ...
    #[default]
    Alternate,
    /// Toss a fresh coin every turn.
    Random,
}

impl OutcomePolicy {
    /// Returns the outcome for the next turn.
    #[instrument(skip(rng))]
    pub fn next<R: Rng>(self, previous: Outcome, rng: &mut R) -> Outcome {
        match self {
            OutcomePolicy::Alternate => previous.toggle(),
            OutcomePolicy::Random => draw_outcome(rng),
        }
    }
}
