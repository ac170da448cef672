//! Headless bot that plays whole games.

use derive_getters::Getters;
use rand::Rng;
use strictly_roshambo::{GameState, Move, Progress};
use tracing::{debug, info, instrument};

/// Bot that answers correctly with a fixed probability.
#[derive(Debug, Clone, Copy)]
pub struct Bot {
    accuracy: f64,
}

impl Bot {
    /// Creates a bot; `accuracy` is clamped to `0.0..=1.0`.
    #[instrument]
    pub fn new(accuracy: f64) -> Self {
        let accuracy = if accuracy.is_nan() {
            0.0
        } else {
            accuracy.clamp(0.0, 1.0)
        };
        Self { accuracy }
    }

    /// Probability of a correct answer.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Picks an answer for the current turn.
    #[instrument(skip(self, game, rng), fields(turn = game.turn()))]
    pub fn pick<R: Rng>(&self, game: &GameState, rng: &mut R) -> Move {
        let right = game.correct_move();
        if rng.random_bool(self.accuracy) {
            return right;
        }
        let wrong: Vec<Move> = Move::ALL.into_iter().filter(|&mv| mv != right).collect();
        wrong[rng.random_range(0..wrong.len())]
    }
}

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameSummary {
    /// Score after the last turn.
    final_score: i32,
    /// Turns answered correctly.
    correct: usize,
    /// Turns answered wrongly.
    wrong: usize,
}

/// Plays `games` full games with `bot`, reusing one state the way the
/// terminal UI does.
#[instrument(skip(bot, game, rng), fields(accuracy = bot.accuracy()))]
pub fn autoplay<R: Rng>(
    bot: &Bot,
    game: &mut GameState,
    games: u32,
    rng: &mut R,
) -> Vec<GameSummary> {
    let mut summaries = Vec::with_capacity(games as usize);

    while summaries.len() < games as usize {
        let chosen = bot.pick(game, rng);
        let submission = game.submit_move(chosen);
        debug!(turn = game.turn(), %chosen, ?submission, "Bot answered");

        let correct = game.history().iter().filter(|round| round.correct).count();
        let answered = game.history().len();

        if let Progress::Restarted { final_score } = game.proceed(rng) {
            let summary = GameSummary {
                final_score,
                correct,
                wrong: answered - correct,
            };
            info!(game = summaries.len() + 1, ?summary, "Game finished");
            summaries.push(summary);
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strictly_roshambo::MAX_TURNS;

    #[test]
    fn test_perfect_bot_scores_every_turn() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = GameState::new(&mut rng);
        let summaries = autoplay(&Bot::new(1.0), &mut game, 3, &mut rng);

        assert_eq!(summaries.len(), 3);
        for summary in summaries {
            assert_eq!(*summary.final_score(), MAX_TURNS as i32);
            assert_eq!(*summary.wrong(), 0);
        }
    }

    #[test]
    fn test_hopeless_bot_loses_two_per_turn() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = GameState::new(&mut rng);
        let summaries = autoplay(&Bot::new(0.0), &mut game, 2, &mut rng);

        for summary in summaries {
            assert_eq!(*summary.final_score(), -2 * MAX_TURNS as i32);
            assert_eq!(*summary.correct(), 0);
        }
    }

    #[test]
    fn test_accuracy_clamped() {
        assert_eq!(Bot::new(3.0).accuracy(), 1.0);
        assert_eq!(Bot::new(-1.0).accuracy(), 0.0);
        assert_eq!(Bot::new(f64::NAN).accuracy(), 0.0);
    }
}
