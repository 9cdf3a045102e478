//! Keyboard mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent};

use crate::games::tictactoe::Position;

/// What a key press means on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor to another cell.
    MoveCursor(Position),
    /// Tap whatever is under the cursor.
    Activate,
    /// Tap a cell directly.
    TapCell(Position),
    /// Back action.
    Back,
    /// Recreate the view.
    Recreate,
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action, `None` for unbound keys.
pub fn map_key(key: KeyEvent, cursor: Position) -> Option<KeyAction> {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(KeyAction::MoveCursor(move_cursor(cursor, key.code)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Activate),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(KeyAction::TapCell),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(KeyAction::Back),
        KeyCode::F(5) => Some(KeyAction::Recreate),
        _ => None,
    }
}
