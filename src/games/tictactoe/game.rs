//! Game engine for tic-tac-toe.
//!
//! Owns the board, whose turn it is and the outcome. Only the view-model
//! holds a `Game`; the screen sees nothing but the states derived from it.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square, Winner};

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Square is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// A running or finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Game {
    /// Current board.
    board: Board,
    /// Player whose mark goes down next.
    to_move: Player,
    /// Outcome so far.
    winner: Winner,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            winner: Winner::None,
        }
    }

    /// Rebuilds a game from a stored board and the player to move.
    ///
    /// The outcome is recomputed from the board rather than trusted.
    #[instrument(skip(board))]
    pub fn from_parts(board: Board, to_move: Player) -> Self {
        let winner = rules::evaluate(&board);
        Self {
            board,
            to_move,
            winner,
        }
    }

    /// Places the current player's mark and returns the player who moved.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::GameOver`] once a winner or draw is decided and
    /// [`PlaceError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Player, PlaceError> {
        if self.winner.is_decided() {
            return Err(PlaceError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        let mover = self.to_move;
        self.board.set(pos, Square::Occupied(mover));
        self.winner = rules::evaluate(&self.board);
        self.to_move = mover.opponent();

        debug!(winner = ?self.winner, "Move applied");
        Ok(mover)
    }

    /// Clears the board for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
