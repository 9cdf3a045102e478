//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are separated from board
//! storage so the view-model can classify any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::{Board, Winner};
use tracing::instrument;

/// Classifies a board into its [`Winner`].
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Winner {
    match check_winner(board) {
        Some(player) => player.into(),
        None if is_full(board) => Winner::Draw,
        None => Winner::None,
    }
}
