//! Animated terminal tic-tac-toe driven by a state/intent view-model.
//!
//! # Architecture
//!
//! - **Screen**: renders nine animated cells, a dimmer and a result label;
//!   turns taps into intents and states into animations
//! - **View-model**: owns the game, consumes intents, publishes states
//! - **Animation**: fade and scale primitives with completion effects
//! - **Games**: tic-tac-toe board, rules and engine
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_screen::{Game, GameIntent, GameViewModel, Position};
//!
//! # async fn example() {
//! let view_model = GameViewModel::new(Game::new());
//! let states = view_model.subscribe();
//! let (intent_tx, intent_rx) = tokio::sync::mpsc::unbounded_channel();
//! let task = view_model.spawn(intent_rx);
//!
//! intent_tx.send(GameIntent::make_move(Position::Center)).unwrap();
//! drop(intent_tx);
//! let game = task.await.unwrap();
//! assert_eq!(game.board().occupied(), 1);
//! # let _ = states;
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod animation;
mod config;
mod games;
mod screen;
mod tui;
mod view_model;

// Crate-level exports - Animation
pub use animation::{Animation, DEFAULT_DURATION, Icon, TransitionKind, VisualElement, ease_in_out};

// Crate-level exports - Configuration
pub use config::{ConfigError, ScreenConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{Board, Game, PlaceError, Player, Position, Square, Winner, rules};

// Crate-level exports - Screen
pub use screen::{
    DispatchError, ElementId, FieldLayout, GameScreen, HitArea, HitAreaRegistry, IntentDispatcher,
    KeyAction, ScreenTransition, TapTarget, Transition, UiEvent, ViewScope, icon_art, map_key,
    move_cursor, theme,
};

// Crate-level exports - Terminal host
pub use tui::run_tui;

// Crate-level exports - View-model
pub use view_model::{
    GameIntent, GameSnapshot, GameState, GameViewModel, STATE_CAPACITY, SnapshotError,
};
