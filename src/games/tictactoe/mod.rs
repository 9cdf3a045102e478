//! Tic-tac-toe domain: board types, positions, rules and the game engine.

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, PlaceError};
pub use position::Position;
pub use types::{Board, Player, Square, Winner};
