//! Key mapping for the move buttons.

use crossterm::event::KeyCode;
use strictly_roshambo::Move;

/// Moves the button cursor with the arrow keys.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    use Move::*;

    match (cursor, key) {
        (Rock, KeyCode::Right) => Paper,
        (Paper, KeyCode::Right) => Scissors,
        (Paper, KeyCode::Left) => Rock,
        (Scissors, KeyCode::Left) => Paper,

        // No change for other keys or edge cases
        _ => cursor,
    }
}

/// Direct-pick keys: `1`-`3` by button position, `r`/`p`/`s` by name.
pub fn key_to_move(key: KeyCode) -> Option<Move> {
    match key {
        KeyCode::Char(c @ '1'..='3') => c
            .to_digit(10)
            .and_then(|digit| Move::from_index(digit as usize - 1)),
        KeyCode::Char(c @ ('r' | 'p' | 's' | 'R' | 'P' | 'S')) => {
            Move::from_label(&c.to_string())
        }
        _ => None,
    }
}
