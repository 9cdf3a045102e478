//! Terminal host for the game screen.
//!
//! Wires the view-model task, the input reader and one attached
//! [`GameScreen`] together and runs the single UI event loop.

mod input;
mod terminal;

use std::path::Path;

use anyhow::{Context, Result};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::{info, instrument, warn};

use crate::config::ScreenConfig;
use crate::games::tictactoe::Game;
use crate::screen::{GameScreen, ScreenTransition};
use crate::view_model::{GameIntent, GameSnapshot, GameState, GameViewModel};

use terminal::GameTerminal;

/// Runs the game until the user navigates back.
///
/// The game is resumed from `snapshot_path` unless `fresh` is set, and saved
/// there again on exit.
#[instrument(skip(config, snapshot_path), fields(snapshot = %snapshot_path.as_ref().display()))]
pub async fn run_tui(
    config: ScreenConfig,
    snapshot_path: impl AsRef<Path>,
    fresh: bool,
) -> Result<()> {
    info!("Starting tic-tac-toe screen");

    let game = load_game(snapshot_path.as_ref(), fresh);
    let view_model = GameViewModel::new(game);
    let states = view_model.subscribe();
    let (intent_tx, intent_rx) = mpsc::unbounded_channel();
    let view_model_task = view_model.spawn(intent_rx);

    let mut terminal = terminal::setup().context("Failed to set up terminal")?;
    let outcome = event_loop(&mut terminal, config, intent_tx, states).await;
    let restored = terminal::restore(&mut terminal).context("Failed to restore terminal");

    shut_down(view_model_task, snapshot_path.as_ref(), outcome, restored).await
}

/// Waits for the view-model to stop and saves its game.
///
/// The save runs whatever happened to the event loop or the terminal; the
/// first of their errors is returned afterwards.
async fn shut_down(
    view_model_task: JoinHandle<Game>,
    snapshot_path: &Path,
    outcome: Result<()>,
    restored: Result<()>,
) -> Result<()> {
    if let Err(e) = &outcome {
        warn!(error = ?e, "Event loop ended with error");
    }
    if let Err(e) = &restored {
        warn!(error = ?e, "Terminal not restored");
    }

    let game = view_model_task.await.context("View-model task failed")?;
    if let Err(e) = GameSnapshot::from(&game).save(snapshot_path) {
        warn!(error = %e, "Game not saved");
    }

    outcome.and(restored)
}

/// Loads the saved game, or a new one when there is none or it is unusable.
#[instrument]
fn load_game(snapshot_path: &Path, fresh: bool) -> Game {
    if fresh || !snapshot_path.exists() {
        return Game::new();
    }
    match GameSnapshot::load(snapshot_path).and_then(GameSnapshot::into_game) {
        Ok(game) => game,
        Err(e) => {
            warn!(error = %e, "Ignoring unusable snapshot");
            Game::new()
        }
    }
}

/// Drives one attached screen until the user leaves.
///
/// `states` itself is never read: every attachment resubscribes from its
/// current tail and catches up through the restore it requests.
async fn event_loop(
    terminal: &mut GameTerminal,
    config: ScreenConfig,
    intent_tx: mpsc::UnboundedSender<GameIntent>,
    states: broadcast::Receiver<GameState>,
) -> Result<()> {
    let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();
    let _reader = input::spawn_reader(ui_tx.clone());

    let mut frames = interval(config.tick_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut screen = GameScreen::attach(
        config.clone(),
        intent_tx.clone(),
        states.resubscribe(),
        ui_tx.clone(),
    )?;

    loop {
        tokio::select! {
            state = screen.next_state() => {
                let Some(state) = state else {
                    warn!("State stream closed");
                    break;
                };
                screen.apply(&state, Instant::now());
            }
            Some(event) = ui_rx.recv() => match screen.handle_event(event) {
                ScreenTransition::Stay => {}
                ScreenTransition::NavigateUp => {
                    info!("Navigating up, leaving the game");
                    break;
                }
                ScreenTransition::Recreate => {
                    screen.detach();
                    screen = GameScreen::attach(
                        config.clone(),
                        intent_tx.clone(),
                        states.resubscribe(),
                        ui_tx.clone(),
                    )?;
                }
            },
            _ = frames.tick() => {
                screen.tick(Instant::now());
                terminal.draw(|frame| screen.render(frame))?;
            }
        }
    }

    screen.detach();
    Ok(())
}
