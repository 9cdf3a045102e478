//! Shared helpers for screen tests.

#![allow(dead_code)]

use tictactoe_screen::{GameIntent, GameScreen, GameState, ScreenConfig, UiEvent};
use tokio::sync::{broadcast, mpsc};

/// An attached screen with the test holding the other channel ends.
pub struct Harness {
    pub screen: GameScreen,
    pub intents: mpsc::UnboundedReceiver<GameIntent>,
    pub states: broadcast::Sender<GameState>,
    pub ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    pub ui_tx: mpsc::UnboundedSender<UiEvent>,
}

impl Harness {
    /// Attaches a screen and consumes the restore intent sent on attach.
    pub fn attach() -> Self {
        Self::attach_with(ScreenConfig::default(), 16)
    }

    /// Like [`Harness::attach`] with a given config and state buffer size.
    pub fn attach_with(config: ScreenConfig, capacity: usize) -> Self {
        let (intent_tx, mut intents) = mpsc::unbounded_channel();
        let (states, state_rx) = broadcast::channel(capacity);
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let screen = GameScreen::attach(config, intent_tx, state_rx, ui_tx.clone())
            .expect("view-model channel open");
        assert_eq!(intents.try_recv().ok(), Some(GameIntent::Restore));
        Self {
            screen,
            intents,
            states,
            ui_rx,
            ui_tx,
        }
    }

    /// Publishes a state as the view-model would.
    pub fn publish(&self, state: GameState) {
        self.states.send(state).expect("screen subscribed");
    }

    /// All intents sent since the last call.
    pub fn drain_intents(&mut self) -> Vec<GameIntent> {
        let mut out = Vec::new();
        while let Ok(intent) = self.intents.try_recv() {
            out.push(intent);
        }
        out
    }
}

/// Terminal text, one string per row.
pub fn buffer_rows(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
