//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use mini_xo::Coord;

/// Moves the board cursor based on arrow keys and vi-style `hjkl`.
///
/// Returns `None` for keys that are not movement keys. Movement stops at the
/// board edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Option<Coord> {
    let (d_row, d_col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (-1, 0),
        KeyCode::Down | KeyCode::Char('j') => (1, 0),
        KeyCode::Left | KeyCode::Char('h') => (0, -1),
        KeyCode::Right | KeyCode::Char('l') => (0, 1),
        _ => return None,
    };
    Some(cursor.step(d_row, d_col))
}

/// Maps keypad digits `1`-`9` to cells, row-major from the top left.
pub fn keypad_cell(key: KeyCode) -> Option<Coord> {
    match key {
        KeyCode::Char(c @ '1'..='9') => Coord::from_index(c as usize - '1' as usize),
        _ => None,
    }
}
