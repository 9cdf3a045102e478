//! User intents sent from the screen to the view-model.

use serde::{Deserialize, Serialize};

use crate::games::tictactoe::Position;

/// A user-initiated request. The view-model may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameIntent {
    /// Place the current player's mark at (row, col).
    MakeMove {
        /// Row of the tapped cell (0-2).
        row: u8,
        /// Column of the tapped cell (0-2).
        col: u8,
        /// Cell element to animate when the move is accepted.
        position: Position,
    },
    /// Start a new round.
    PlayAgain,
    /// Ask for a full-board resync.
    Restore,
}

impl GameIntent {
    /// Builds a move intent for the given cell.
    pub fn make_move(position: Position) -> Self {
        GameIntent::MakeMove {
            row: position.row(),
            col: position.col(),
            position,
        }
    }
}
