//! Square-field correction.
//!
//! Rows split the field evenly until the first adjustment. After a short
//! delay the width of the reference cell (row 0, col 0) is measured and every
//! row is forced to the height that makes cells look square.

use derive_getters::Getters;
use ratatui::layout::Constraint;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, instrument};

use super::event::UiEvent;

/// Row sizing of the playing field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct FieldLayout {
    /// Width of the reference cell in the last drawn frame.
    reference_width: Option<u16>,
    /// Forced row height once adjusted.
    row_height: Option<u16>,
}

impl FieldLayout {
    /// Records the width the reference cell was drawn with.
    pub fn record_reference(&mut self, width: u16) {
        self.reference_width = Some(width);
    }

    /// Forces rows to a square height. `None` if nothing was drawn yet.
    #[instrument(skip(self))]
    pub fn adjust(&mut self, cell_aspect: f32) -> Option<u16> {
        let width = self.reference_width?;
        let height = ((width as f32 / cell_aspect).round() as u16).max(1);
        debug!(width, height, "Adjusting field rows");
        self.row_height = Some(height);
        Some(height)
    }

    /// Constraints for the three grid rows.
    pub fn row_constraints(&self) -> [Constraint; 3] {
        match self.row_height {
            Some(h) => [Constraint::Length(h); 3],
            None => [Constraint::Ratio(1, 3); 3],
        }
    }
}

/// Sends [`UiEvent::AdjustField`] once `delay` has passed.
pub fn schedule_adjustment(
    delay: Duration,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(delay).await;
        // The UI may already be gone.
        let _ = ui_tx.send(UiEvent::AdjustField);
    })
}
