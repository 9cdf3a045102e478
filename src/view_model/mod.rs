//! View-model side of the screen: intents in, states out.

mod controller;
mod intent;
mod snapshot;
mod state;

pub use controller::{GameViewModel, STATE_CAPACITY};
pub use intent::GameIntent;
pub use snapshot::{GameSnapshot, SnapshotError};
pub use state::GameState;
