//! Application state and logic.

use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use strictly_roshambo::{GameState, Move, Progress, Submission};
use tracing::{debug, info, instrument};

use super::input::{key_to_move, move_cursor};
use crate::config::SymbolStyle;

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Verdict dialog shown after each answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialog {
    correct: bool,
    score: i32,
    can_continue: bool,
}

impl Dialog {
    /// Builds the dialog for a submission on a turn that can (or cannot) continue.
    pub fn new(submission: Submission, can_continue: bool) -> Self {
        Self {
            correct: submission.is_correct,
            score: submission.new_score,
            can_continue,
        }
    }

    /// Whether the answer was right.
    pub fn correct(&self) -> bool {
        self.correct
    }

    /// "Correct" or "Wrong".
    pub fn title(&self) -> &'static str {
        if self.correct { "Correct" } else { "Wrong" }
    }

    /// Label of the dialog's only button.
    pub fn button(&self) -> &'static str {
        if self.can_continue {
            "Continue"
        } else {
            "Play again"
        }
    }

    /// Score line.
    pub fn message(&self) -> String {
        if self.can_continue {
            format!("Your score is {}", self.score)
        } else {
            format!("Your final score is {}", self.score)
        }
    }
}

/// Main application state.
pub struct App {
    game: GameState,
    rng: StdRng,
    cursor: Move,
    dialog: Option<Dialog>,
    symbols: SymbolStyle,
}

impl App {
    /// Creates a new application around a started game.
    pub fn new(game: GameState, rng: StdRng, symbols: SymbolStyle) -> Self {
        Self {
            game,
            rng,
            cursor: Move::Rock,
            dialog: None,
            symbols,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Button under the cursor.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Open verdict dialog, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Symbol style for rendering.
    pub fn symbols(&self) -> SymbolStyle {
        self.symbols
    }

    /// Instruction line, e.g. "You need to Win against Rock".
    pub fn instruction(&self) -> String {
        match self.symbols {
            SymbolStyle::Emoji => self.game.prompt(),
            SymbolStyle::Ascii => format!(
                "You need to {} against {}",
                self.game.required().verb(),
                self.game.challenge().label()
            ),
        }
    }

    /// Score line.
    pub fn score_line(&self) -> String {
        format!("Score: {}", self.game.score())
    }

    /// Turn line.
    pub fn turn_line(&self) -> String {
        format!("Turn {} of {}", self.game.turn(), self.game.max_turns())
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(turn = self.game.turn(), dialog = self.dialog.is_some()))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            info!("User quit");
            return Control::Quit;
        }

        if self.dialog.is_some() {
            // Only the dialog button responds while the verdict is up.
            if matches!(key, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c')) {
                self.dismiss();
            }
            return Control::Continue;
        }

        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.cursor),
            KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(mv) = key_to_move(other) {
                    self.cursor = mv;
                    self.choose(mv);
                }
            }
        }
        Control::Continue
    }

    /// Submits `mv` and opens the verdict dialog.
    #[instrument(skip(self))]
    pub fn choose(&mut self, mv: Move) {
        let submission = self.game.submit_move(mv);
        debug!(?submission, "Answer submitted");
        self.dialog = Some(Dialog::new(submission, self.game.can_keep_playing()));
    }

    /// Closes the dialog and moves the game on.
    #[instrument(skip(self))]
    pub fn dismiss(&mut self) {
        if self.dialog.take().is_none() {
            return;
        }
        match self.game.proceed(&mut self.rng) {
            Progress::Advanced { turn } => debug!(turn, "Next turn"),
            Progress::Restarted { final_score } => info!(final_score, "Starting a new game"),
        }
    }
}
