//! Blocking terminal reader feeding the UI task.

use crossterm::event;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, error};

use crate::screen::UiEvent;

/// How long one poll waits before checking whether the UI is still there.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads crossterm events on a blocking thread and forwards them.
///
/// The reader stops once the receiving side is dropped or the terminal
/// reports an error.
pub fn spawn_reader(ui_tx: mpsc::UnboundedSender<UiEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !ui_tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    error!(error = %e, "Polling terminal failed");
                    break;
                }
            }
            match event::read() {
                Ok(ev) => {
                    if ui_tx.send(UiEvent::Terminal(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!(error = %e, "Reading terminal failed");
                    break;
                }
            }
        }
        debug!("Terminal reader stopped");
    })
}
