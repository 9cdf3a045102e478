//! Tests for the view-model task and snapshot persistence.

use tictactoe_screen::{
    Board, Game, GameIntent, GameSnapshot, GameState, GameViewModel, Player, Position, Winner,
};
use tokio::sync::{broadcast, mpsc};

/// Sends one intent and waits for the state it produces.
async fn send(
    intents: &mpsc::UnboundedSender<GameIntent>,
    states: &mut broadcast::Receiver<GameState>,
    intent: GameIntent,
) -> GameState {
    intents.send(intent).unwrap();
    states.recv().await.unwrap()
}

#[tokio::test]
async fn test_x_wins_top_row() {
    let vm = GameViewModel::new(Game::new());
    let mut states = vm.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();
    let task = vm.spawn(rx);

    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomRight,
    ] {
        let state = send(&tx, &mut states, GameIntent::make_move(pos)).await;
        assert!(matches!(state, GameState::UpdateMove { winner: Winner::None, .. }));
    }

    let last = send(&tx, &mut states, GameIntent::make_move(Position::TopRight)).await;
    assert_eq!(
        last,
        GameState::UpdateMove {
            position: Position::TopRight,
            placed: Some(Player::X),
            winner: Winner::X,
        }
    );

    drop(tx);
    let game = task.await.unwrap();
    assert_eq!(*game.winner(), Winner::X);
}

#[tokio::test]
async fn test_full_board_is_draw() {
    let vm = GameViewModel::new(Game::new());
    let mut states = vm.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();
    let _task = vm.spawn(rx);

    // X O X / X O O / O X X
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    let mut last = GameState::Inactive;
    for pos in moves {
        last = send(&tx, &mut states, GameIntent::make_move(pos)).await;
    }
    assert!(matches!(last, GameState::UpdateMove { winner: Winner::Draw, .. }));
}

#[tokio::test]
async fn test_play_again_clears_field() {
    let vm = GameViewModel::new(Game::new());
    let mut states = vm.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();
    let task = vm.spawn(rx);

    send(&tx, &mut states, GameIntent::make_move(Position::Center)).await;
    let state = send(&tx, &mut states, GameIntent::PlayAgain).await;
    assert_eq!(state, GameState::ClearField);

    drop(tx);
    let game = task.await.unwrap();
    assert_eq!(game.board().occupied(), 0);
    assert_eq!(*game.to_move(), Player::X);
}

#[tokio::test]
async fn test_restore_reports_board_and_winner() {
    let board = Board::from_codes([1, 0, 0, 0, 1, 0, 0, 0, 1]);
    let vm = GameViewModel::new(Game::from_parts(board.clone(), Player::O));
    let mut states = vm.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();
    let _task = vm.spawn(rx);

    let state = send(&tx, &mut states, GameIntent::Restore).await;
    assert_eq!(
        state,
        GameState::Restore {
            board,
            winner: Winner::X,
        }
    );
}

#[tokio::test]
async fn test_restore_twice_publishes_twice() {
    let vm = GameViewModel::new(Game::new());
    let mut states = vm.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();
    let _task = vm.spawn(rx);

    let first = send(&tx, &mut states, GameIntent::Restore).await;
    let second = send(&tx, &mut states, GameIntent::Restore).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let vm = GameViewModel::new(Game::new());
    let (tx, rx) = mpsc::unbounded_channel();
    let task = vm.spawn(rx);
    tx.send(GameIntent::make_move(Position::Center)).unwrap();
    tx.send(GameIntent::make_move(Position::TopLeft)).unwrap();
    drop(tx);
    let game = task.await.unwrap();

    GameSnapshot::from(&game).save(&path).unwrap();
    let restored = GameSnapshot::load(&path).unwrap().into_game().unwrap();
    assert_eq!(restored, game);
    assert_eq!(*restored.to_move(), Player::X);
}

#[test]
fn test_missing_snapshot_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameSnapshot::load(dir.path().join("absent.json")).unwrap_err();
    assert!(err.message.contains("Failed to read snapshot"));
}
