//! Game snapshots persisted between process runs.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::{Board, Game, Player, Square, Winner};

/// Serializable picture of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameSnapshot {
    /// Flattened row-major square codes (0 empty, 1 X, 2 O).
    board: [u8; 9],
    /// Player to move next.
    to_move: Player,
    /// Outcome at the time of the snapshot.
    winner: Winner,
}

impl GameSnapshot {
    /// Reads a snapshot from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        debug!("Loading snapshot");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SnapshotError::new(format!("Failed to read snapshot: {}", e)))?;
        let snapshot: Self = serde_json::from_str(&content)
            .map_err(|e| SnapshotError::new(format!("Failed to parse snapshot: {}", e)))?;
        info!(winner = ?snapshot.winner, "Snapshot loaded");
        Ok(snapshot)
    }

    /// Writes the snapshot as pretty JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::new(format!("Failed to encode snapshot: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| SnapshotError::new(format!("Failed to write snapshot: {}", e)))?;
        debug!("Snapshot saved");
        Ok(())
    }

    /// Rebuilds the game after checking the snapshot is consistent.
    ///
    /// X always opens, so the board must hold as many X marks as O marks
    /// (X to move) or one more (O to move), and the stored winner must match
    /// the board.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] for unknown square codes, impossible mark
    /// counts, a wrong player to move or a stale winner.
    #[instrument(skip(self))]
    pub fn into_game(self) -> Result<Game, SnapshotError> {
        if let Some(code) = self.board.iter().find(|c| Square::from_code(**c).is_none()) {
            return Err(SnapshotError::new(format!("Unknown square code {}", code)));
        }

        let count = |player: Player| {
            self.board
                .iter()
                .filter(|c| **c == Square::Occupied(player).code())
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));
        let expected = match x.checked_sub(o) {
            Some(0) => Player::X,
            Some(1) => Player::O,
            _ => {
                return Err(SnapshotError::new(format!("Impossible mark counts: {} X, {} O", x, o)));
            }
        };
        if self.to_move != expected {
            return Err(SnapshotError::new(format!(
                "Player {:?} to move, board says {:?}",
                self.to_move, expected
            )));
        }

        let game = Game::from_parts(Board::from_codes(self.board), self.to_move);
        if *game.winner() != self.winner {
            return Err(SnapshotError::new(format!(
                "Stored winner {:?}, board says {:?}",
                self.winner,
                game.winner()
            )));
        }
        Ok(game)
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self::new(game.board().codes(), *game.to_move(), *game.winner())
    }
}

/// Snapshot persistence error.
#[derive(Debug, Clone, Display, Error)]
#[display("Snapshot error: {} at {}:{}", message, file, line)]
pub struct SnapshotError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SnapshotError {
    /// Creates a new snapshot error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_snapshot_survives_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");

        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        game.place(Position::TopLeft).unwrap();

        GameSnapshot::from(&game).save(&path).unwrap();
        let restored = GameSnapshot::load(&path).unwrap().into_game().unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameSnapshot::load(dir.path().join("absent.json")).unwrap_err();
        assert!(err.message.contains("Failed to read snapshot"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = GameSnapshot::load(&path).unwrap_err();
        assert!(err.message.contains("Failed to parse snapshot"));
    }

    #[test]
    fn test_finished_game_accepted() {
        let snapshot = GameSnapshot::new([1, 1, 1, 2, 2, 0, 0, 0, 0], Player::O, Winner::X);
        let game = snapshot.into_game().unwrap();
        assert_eq!(*game.winner(), Winner::X);
    }

    #[test]
    fn test_wrong_player_to_move_rejected() {
        let snapshot = GameSnapshot::new([0, 0, 0, 0, 1, 0, 0, 0, 0], Player::X, Winner::None);
        let err = snapshot.into_game().unwrap_err();
        assert!(err.message.contains("to move"));
    }

    #[test]
    fn test_impossible_counts_rejected() {
        let snapshot = GameSnapshot::new([1, 1, 0, 0, 0, 0, 0, 0, 0], Player::O, Winner::None);
        let err = snapshot.into_game().unwrap_err();
        assert!(err.message.contains("Impossible mark counts"));
    }

    #[test]
    fn test_stale_winner_rejected() {
        let snapshot = GameSnapshot::new([1, 1, 1, 2, 2, 0, 0, 0, 0], Player::O, Winner::None);
        let err = snapshot.into_game().unwrap_err();
        assert!(err.message.contains("Stored winner"));
    }

    #[test]
    fn test_unknown_code_rejected() {
        let snapshot = GameSnapshot::new([3, 0, 0, 0, 0, 0, 0, 0, 0], Player::X, Winner::None);
        assert!(snapshot.into_game().is_err());
    }
}
