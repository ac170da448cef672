//! The drill state machine.
//!
//! A game is a single exclusively owned [`GameState`]. Answering a turn and
//! moving to the next one are separate steps so a front end can show the
//! verdict in between.

use super::action::RoundError;
use super::contracts::{AdvanceContract, Contract};
use super::draw::{OutcomePolicy, draw_move, draw_outcome};
use super::rules::correct_move;
use super::types::{GameStatus, Move, Outcome, Round, Submission};
use super::{CORRECT_REWARD, MAX_TURNS, WRONG_PENALTY};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What [`GameState::proceed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// Moved on to the given turn.
    Advanced {
        /// The new turn number.
        turn: u32,
    },
    /// The last turn was done; a fresh game started.
    Restarted {
        /// Score the finished game ended on.
        final_score: i32,
    },
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) challenge: Move,
    pub(crate) required: Outcome,
    pub(crate) turn: u32,
    pub(crate) score: i32,
    pub(crate) last_move: Option<Move>,
    pub(crate) history: Vec<Round>,
    policy: OutcomePolicy,
}

impl GameState {
    /// Starts a game with a random challenge and required outcome.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_policy(OutcomePolicy::default(), rng)
    }

    /// Starts a game whose outcomes follow `policy` after the first turn.
    #[instrument(skip(rng))]
    pub fn with_policy<R: Rng>(policy: OutcomePolicy, rng: &mut R) -> Self {
        let challenge = draw_move(rng);
        let required = draw_outcome(rng);
        info!(%challenge, %required, ?policy, "New game");
        Self {
            policy,
            ..Self::with_challenge(challenge, required)
        }
    }

    /// Starts a game on a fixed first turn.
    pub fn with_challenge(challenge: Move, required: Outcome) -> Self {
        Self {
            challenge,
            required,
            turn: 1,
            score: 0,
            last_move: None,
            history: Vec::new(),
            policy: OutcomePolicy::default(),
        }
    }

    /// Replaces the outcome policy for subsequent turns.
    pub fn set_policy(&mut self, policy: OutcomePolicy) {
        self.policy = policy;
    }

    /// Challenge shown this turn.
    pub fn challenge(&self) -> Move {
        self.challenge
    }

    /// Outcome the answer must achieve this turn.
    pub fn required(&self) -> Outcome {
        self.required
    }

    /// Current turn, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of turns in a game.
    pub fn max_turns(&self) -> u32 {
        MAX_TURNS
    }

    /// Running score.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The move most recently submitted, if any this game.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Answered rounds of this game, oldest first.
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// How outcomes change between turns.
    pub fn policy(&self) -> OutcomePolicy {
        self.policy
    }

    /// Whether another turn follows this one.
    pub fn can_keep_playing(&self) -> bool {
        self.turn < MAX_TURNS
    }

    /// Phase of the game.
    pub fn status(&self) -> GameStatus {
        if self.can_keep_playing() {
            GameStatus::InProgress
        } else {
            GameStatus::Finished
        }
    }

    /// The answer that scores this turn.
    pub fn correct_move(&self) -> Move {
        correct_move(self.challenge, self.required)
    }

    /// Verdict for `chosen` without touching the state.
    pub fn is_correct(&self, chosen: Move) -> bool {
        chosen == self.correct_move()
    }

    /// Instruction line for this turn, e.g. "You need to Win against 🪨".
    pub fn prompt(&self) -> String {
        format!(
            "You need to {} against {}",
            self.required.verb(),
            self.challenge.symbol()
        )
    }

    /// Answers the current turn.
    ///
    /// Scores +1 for the correct move and -2 otherwise. The turn does not
    /// advance.
    #[instrument(skip(self), fields(turn = self.turn, challenge = %self.challenge, required = %self.required))]
    pub fn submit_move(&mut self, chosen: Move) -> Submission {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let is_correct = self.is_correct(chosen);
        self.score += if is_correct {
            CORRECT_REWARD
        } else {
            -WRONG_PENALTY
        };
        self.last_move = Some(chosen);
        self.history.push(Round {
            turn: self.turn,
            challenge: self.challenge,
            required: self.required,
            chosen,
            correct: is_correct,
        });
        debug!(is_correct, score = self.score, "Move submitted");

        #[cfg(debug_assertions)]
        {
            let check = super::contracts::SubmitContract::post(&before, self);
            debug_assert!(check.is_ok(), "{:?}", check);
        }

        Submission {
            is_correct,
            new_score: self.score,
        }
    }

    /// Moves on to the next turn with a fresh challenge.
    ///
    /// Refused on the last turn; call [`GameState::restart`] instead.
    #[instrument(skip(self, rng), fields(turn = self.turn))]
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Result<(), RoundError> {
        AdvanceContract::pre(self, &())?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.turn += 1;
        self.challenge = draw_move(rng);
        self.required = self.policy.next(self.required, rng);
        debug!(turn = self.turn, challenge = %self.challenge, required = %self.required, "Advanced");

        #[cfg(debug_assertions)]
        AdvanceContract::post(&before, self)?;

        Ok(())
    }

    /// Throws the current game away and starts again at turn 1.
    #[instrument(skip(self, rng), fields(turn = self.turn, score = self.score))]
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.score = 0;
        self.turn = 1;
        self.last_move = None;
        self.history.clear();
        self.challenge = draw_move(rng);
        self.required = self.policy.next(self.required, rng);
        info!(challenge = %self.challenge, required = %self.required, "Game restarted");
    }

    /// Advances if a turn remains, otherwise restarts.
    #[instrument(skip(self, rng), fields(turn = self.turn))]
    pub fn proceed<R: Rng>(&mut self, rng: &mut R) -> Progress {
        if self.can_keep_playing() {
            match self.advance(rng) {
                Ok(()) => Progress::Advanced { turn: self.turn },
                Err(e) => {
                    tracing::error!(error = %e, "Advance refused; restarting");
                    let final_score = self.score;
                    self.restart(rng);
                    Progress::Restarted { final_score }
                }
            }
        } else {
            let final_score = self.score;
            info!(final_score, "Game over");
            self.restart(rng);
            Progress::Restarted { final_score }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_game_starts_clean() {
        let mut rng = StdRng::seed_from_u64(11);
        let game = GameState::new(&mut rng);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.last_move(), None);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_submit_does_not_advance() {
        let mut game = GameState::with_challenge(Move::Paper, Outcome::MustLose);
        let submission = game.submit_move(Move::Rock);
        assert!(submission.is_correct);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.last_move(), Some(Move::Rock));
    }

    #[test]
    fn test_prompt_text() {
        let game = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        assert_eq!(game.prompt(), "You need to Win against 🪨");
    }

    #[test]
    fn test_advance_keeps_score() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = GameState::with_challenge(Move::Rock, Outcome::MustWin);
        game.submit_move(Move::Paper);
        game.advance(&mut rng).unwrap();
        assert_eq!(game.score(), 1);
        assert_eq!(game.turn(), 2);
        assert_eq!(game.required(), Outcome::MustLose);
    }

    #[test]
    fn test_random_policy_stays_valid() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = GameState::with_policy(OutcomePolicy::Random, &mut rng);
        for _ in 1..MAX_TURNS {
            game.advance(&mut rng).unwrap();
        }
        assert_eq!(game.turn(), MAX_TURNS);
        assert_eq!(game.policy(), OutcomePolicy::Random);
    }
}
