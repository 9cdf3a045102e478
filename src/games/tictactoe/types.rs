//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::position::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Integer code of the square: 0 empty, 1 X, 2 O.
    pub fn code(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(Player::X) => 1,
            Square::Occupied(Player::O) => 2,
        }
    }

    /// Parses an integer code. Unknown codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Square::Empty),
            1 => Some(Square::Occupied(Player::X)),
            2 => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from a flattened row-major array of square codes.
    ///
    /// Codes other than 1 and 2 are treated as empty.
    #[instrument]
    pub fn from_codes(codes: [u8; 9]) -> Self {
        let mut board = Self::new();
        for (square, code) in board.squares.iter_mut().zip(codes) {
            *square = Square::from_code(code).unwrap_or_default();
        }
        board
    }

    /// Returns the flattened row-major array of square codes.
    pub fn codes(&self) -> [u8; 9] {
        self.squares.map(Square::code)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

/// Outcome classification of the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Winner {
    /// Game still open.
    #[default]
    None,
    /// Player X has three in a row.
    X,
    /// Player O has three in a row.
    O,
    /// Board full without a line.
    Draw,
}

impl Winner {
    /// Result text shown on the screen, `None` while the game is open.
    pub fn result_text(self) -> Option<&'static str> {
        match self {
            Winner::None => None,
            Winner::X => Some("Player X won"),
            Winner::O => Some("Player O won"),
            Winner::Draw => Some("Draw"),
        }
    }

    /// Whether the game has ended.
    pub fn is_decided(self) -> bool {
        self != Winner::None
    }
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Winner::X,
            Player::O => Winner::O,
        }
    }
}
