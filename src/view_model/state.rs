//! Game states emitted by the view-model for the screen to render.

use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{Board, Player, Position, Winner};

/// What the screen should display next.
///
/// States describe one-shot visual events, not persisted snapshots: the
/// same `UpdateMove` delivered twice animates twice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Nothing to show yet.
    #[default]
    Inactive,
    /// Reset all cells and hide the result.
    ClearField,
    /// A single cell changed.
    UpdateMove {
        /// Cell element affected by the move.
        position: Position,
        /// Symbol that was just placed, `None` when no icon should animate.
        placed: Option<Player>,
        /// Outcome after the move.
        winner: Winner,
    },
    /// Full-board resync after the screen was recreated.
    Restore {
        /// Current board contents.
        board: Board,
        /// Current outcome.
        winner: Winner,
    },
}
