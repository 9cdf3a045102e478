//! Maps taps to intents and forwards them to the view-model.

use derive_more::{Display, Error};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use super::hit_area::TapTarget;
use crate::view_model::GameIntent;

/// What the screen does after a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the screen.
    Stay,
    /// Leave the screen.
    NavigateUp,
    /// Tear the view down and attach a fresh one.
    Recreate,
}

/// Sends intents without waiting for an answer.
#[derive(Debug, Clone)]
pub struct IntentDispatcher {
    intent_tx: mpsc::UnboundedSender<GameIntent>,
}

impl IntentDispatcher {
    /// Creates a dispatcher writing to the view-model's intent channel.
    pub fn new(intent_tx: mpsc::UnboundedSender<GameIntent>) -> Self {
        Self { intent_tx }
    }

    /// Resolves a tap into an intent (if any) and the follow-up transition.
    #[instrument(skip(self))]
    pub fn tap(&self, target: TapTarget) -> Result<ScreenTransition, DispatchError> {
        match target {
            TapTarget::Cell(cell) => self.send(GameIntent::make_move(cell))?,
            TapTarget::ResultLabel | TapTarget::Dimmer => self.send(GameIntent::PlayAgain)?,
            TapTarget::Back => return Ok(ScreenTransition::NavigateUp),
        }
        Ok(ScreenTransition::Stay)
    }

    /// Asks the view-model for a full-board resync.
    pub fn restore(&self) -> Result<(), DispatchError> {
        self.send(GameIntent::Restore)
    }

    fn send(&self, intent: GameIntent) -> Result<(), DispatchError> {
        debug!(?intent, "Dispatching intent");
        self.intent_tx
            .send(intent)
            .map_err(|e| DispatchError::new(format!("View-model gone, dropped {:?}", e.0)))
    }
}

/// The intent channel is closed.
#[derive(Debug, Clone, Display, Error)]
#[display("Dispatch error: {} at {}:{}", message, file, line)]
pub struct DispatchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DispatchError {
    /// Creates a new dispatch error with caller location tracking.
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
    fn test_back_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = IntentDispatcher::new(tx);
        assert_eq!(
            dispatcher.tap(TapTarget::Back).unwrap(),
            ScreenTransition::NavigateUp
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_result_and_dimmer_play_again() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = IntentDispatcher::new(tx);
        dispatcher.tap(TapTarget::ResultLabel).unwrap();
        dispatcher.tap(TapTarget::Dimmer).unwrap();
        assert_eq!(rx.try_recv().unwrap(), GameIntent::PlayAgain);
        assert_eq!(rx.try_recv().unwrap(), GameIntent::PlayAgain);
    }

    #[test]
    fn test_closed_channel_is_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let dispatcher = IntentDispatcher::new(tx);
        assert!(dispatcher.tap(TapTarget::Cell(Position::Center)).is_err());
    }
}
