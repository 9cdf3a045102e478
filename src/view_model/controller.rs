//! View-model task owning the game and turning intents into states.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::intent::GameIntent;
use super::state::GameState;
use crate::games::tictactoe::{Game, Position};

/// States buffered per subscriber before it lags.
pub const STATE_CAPACITY: usize = 64;

/// Owns the authoritative [`Game`] and publishes [`GameState`]s.
///
/// The screen never touches the game: it sends [`GameIntent`]s and renders
/// whatever arrives on the state channel. Every state reaches every
/// subscriber in order; a subscriber that falls more than
/// [`STATE_CAPACITY`] states behind must resync with [`GameIntent::Restore`].
#[derive(Debug)]
pub struct GameViewModel {
    game: Game,
    state_tx: broadcast::Sender<GameState>,
}

impl GameViewModel {
    /// Creates a view-model around an existing game.
    #[instrument(skip(game))]
    pub fn new(game: Game) -> Self {
        let (state_tx, _) = broadcast::channel(STATE_CAPACITY);
        Self { game, state_tx }
    }

    /// Returns a new subscription to the state stream.
    ///
    /// The subscriber receives every state published from now on. Earlier
    /// states are not replayed; send [`GameIntent::Restore`] for the current
    /// board.
    pub fn subscribe(&self) -> broadcast::Receiver<GameState> {
        self.state_tx.subscribe()
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handles one intent, publishing at most one state.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: GameIntent) {
        match intent {
            GameIntent::MakeMove { row, col, position } => self.make_move(row, col, position),
            GameIntent::PlayAgain => {
                info!("Starting a new round");
                self.game.reset();
                self.publish(GameState::ClearField);
            }
            GameIntent::Restore => {
                debug!(winner = ?self.game.winner(), "Publishing restore snapshot");
                self.publish(GameState::Restore {
                    board: self.game.board().clone(),
                    winner: *self.game.winner(),
                });
            }
        }
    }

    fn make_move(&mut self, row: u8, col: u8, position: Position) {
        let Some(target) = Position::from_row_col(row, col) else {
            warn!(row, col, "Move outside the grid ignored");
            return;
        };

        match self.game.place(target) {
            Ok(placed) => {
                self.publish(GameState::UpdateMove {
                    position,
                    placed: Some(placed),
                    winner: *self.game.winner(),
                });
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
            }
        }
    }

    fn publish(&self, state: GameState) {
        if self.state_tx.send(state).is_err() {
            debug!("No subscribers, state dropped");
        }
    }

    /// Processes intents until every sender is dropped, then returns the game.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut intent_rx: mpsc::UnboundedReceiver<GameIntent>) -> Game {
        info!("View-model started");
        while let Some(intent) = intent_rx.recv().await {
            self.handle(intent);
        }
        info!("Intent channel closed, view-model stopping");
        self.game
    }

    /// Spawns [`GameViewModel::run`] on the runtime.
    pub fn spawn(self, intent_rx: mpsc::UnboundedReceiver<GameIntent>) -> JoinHandle<Game> {
        tokio::spawn(self.run(intent_rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Winner};

    #[test]
    fn test_accepted_move_publishes_update() {
        let mut vm = GameViewModel::new(Game::new());
        let mut rx = vm.subscribe();
        vm.handle(GameIntent::make_move(Position::Center));
        assert_eq!(
            rx.try_recv().unwrap(),
            GameState::UpdateMove {
                position: Position::Center,
                placed: Some(Player::X),
                winner: Winner::None,
            }
        );
    }

    #[test]
    fn test_back_to_back_moves_are_both_delivered() {
        let mut vm = GameViewModel::new(Game::new());
        let mut rx = vm.subscribe();
        vm.handle(GameIntent::make_move(Position::Center));
        vm.handle(GameIntent::make_move(Position::TopLeft));

        let placed: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|state| match state {
                GameState::UpdateMove { position, placed, .. } => (position, placed),
                other => panic!("unexpected state {other:?}"),
            })
            .collect();
        assert_eq!(
            placed,
            vec![
                (Position::Center, Some(Player::X)),
                (Position::TopLeft, Some(Player::O)),
            ]
        );
    }

    #[test]
    fn test_occupied_cell_publishes_nothing() {
        let mut vm = GameViewModel::new(Game::new());
        let mut rx = vm.subscribe();
        vm.handle(GameIntent::make_move(Position::Center));
        rx.try_recv().unwrap();
        vm.handle(GameIntent::make_move(Position::Center));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_out_of_grid_move_ignored() {
        let mut vm = GameViewModel::new(Game::new());
        let mut rx = vm.subscribe();
        vm.handle(GameIntent::MakeMove {
            row: 5,
            col: 0,
            position: Position::TopLeft,
        });
        assert!(rx.try_recv().is_err());
        assert_eq!(vm.game().board().occupied(), 0);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let mut vm = GameViewModel::new(Game::new());
        vm.handle(GameIntent::make_move(Position::Center));
        assert_eq!(vm.game().board().occupied(), 1);
    }
}
