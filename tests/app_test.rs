//! Tests for the terminal app's key handling.

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_rps::{App, Control, GameState, MAX_TURNS, Move, Outcome, SymbolStyle};

fn app_with(challenge: Move, required: Outcome) -> App {
    App::new(
        GameState::with_challenge(challenge, required),
        StdRng::seed_from_u64(17),
        SymbolStyle::Ascii,
    )
}

#[test]
fn test_status_lines() {
    let app = app_with(Move::Rock, Outcome::MustWin);
    assert_eq!(app.instruction(), "You need to Win against Rock");
    assert_eq!(app.score_line(), "Score: 0");
    assert_eq!(app.turn_line(), "Turn 1 of 10");
}

#[test]
fn test_correct_answer_opens_dialog() {
    let mut app = app_with(Move::Rock, Outcome::MustWin);
    assert_eq!(app.handle_key(KeyCode::Char('p')), Control::Continue);

    let dialog = app.dialog().expect("dialog open");
    assert_eq!(dialog.title(), "Correct");
    assert_eq!(dialog.button(), "Continue");
    assert_eq!(dialog.message(), "Your score is 1");
    assert_eq!(app.game().turn(), 1);
}

#[test]
fn test_wrong_answer_via_cursor() {
    let mut app = app_with(Move::Scissors, Outcome::MustLose);
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.cursor(), Move::Scissors);

    app.handle_key(KeyCode::Enter);
    let dialog = app.dialog().expect("dialog open");
    assert_eq!(dialog.title(), "Wrong");
    assert_eq!(dialog.message(), "Your score is -2");
}

#[test]
fn test_moves_ignored_while_dialog_open() {
    let mut app = app_with(Move::Paper, Outcome::MustWin);
    app.handle_key(KeyCode::Char('3'));
    let score = app.game().score();

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Left);
    assert_eq!(app.game().score(), score);
    assert_eq!(app.game().history().len(), 1);

    app.handle_key(KeyCode::Enter);
    assert!(app.dialog().is_none());
    assert_eq!(app.game().turn(), 2);
    assert_eq!(app.game().score(), score);
}

#[test]
fn test_last_turn_offers_play_again() {
    let mut app = app_with(Move::Rock, Outcome::MustWin);
    for _ in 1..MAX_TURNS {
        app.handle_key(KeyCode::Char('r'));
        app.handle_key(KeyCode::Char('c'));
    }
    assert_eq!(app.game().turn(), MAX_TURNS);

    app.handle_key(KeyCode::Char('r'));
    let dialog = *app.dialog().expect("dialog open");
    assert_eq!(dialog.button(), "Play again");
    assert!(dialog.message().starts_with("Your final score is "));

    app.handle_key(KeyCode::Char(' '));
    assert_eq!(app.game().turn(), 1);
    assert_eq!(app.game().score(), 0);
}

#[test]
fn test_quit_keys() {
    let mut app = app_with(Move::Rock, Outcome::MustWin);
    assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);

    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
}
