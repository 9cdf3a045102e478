//! Lifetime scope of one attached view.

use tokio::task::JoinHandle;
use tracing::debug;

/// Tasks owned by an attached view. Dropping the scope aborts them.
#[derive(Debug, Default)]
pub struct ViewScope {
    tasks: Vec<JoinHandle<()>>,
}

impl ViewScope {
    /// Ties a task to the view's lifetime.
    pub fn adopt(&mut self, task: JoinHandle<()>) {
        self.tasks.retain(|t| !t.is_finished());
        self.tasks.push(task);
    }

    /// Number of tasks still running.
    pub fn active(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_finished()).count()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        for task in self.tasks.drain(..) {
            if !task.is_finished() {
                debug!("Cancelling view task");
                task.abort();
            }
        }
    }
}
