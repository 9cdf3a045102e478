//! Events consumed by the screen on the UI task.

/// Input to the single UI consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// The delayed square-field correction is due.
    AdjustField,
}
