//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tutorial_tictactoe::Position;

/// Moves the board cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to board positions (row-major).
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            Position::from_index(digit.checked_sub(1)?)
        }
        _ => None,
    }
}
