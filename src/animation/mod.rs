//! Property animations for screen elements.
//!
//! Every element carries its own alpha, scale, visibility and icon. A
//! transition animates those properties over a fixed duration and applies a
//! completion effect (hide, clear icon) when it ends. Time is passed in
//! explicitly so the event loop, not a timer thread, drives progress.

mod element;
mod transition;

pub use element::VisualElement;
pub use transition::{Animation, DEFAULT_DURATION, Icon, TransitionKind, ease_in_out};
