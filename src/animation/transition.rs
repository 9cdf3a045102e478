//! Transition kinds and timing.

use derive_getters::Getters;
use derive_new::new;
use tokio::time::{Duration, Instant};

use crate::games::tictactoe::Player;

/// Duration of every screen transition unless configured otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Glyph shown inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// The X glyph.
    Cross,
    /// The O glyph.
    Circle,
}

impl From<Player> for Icon {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Icon::Cross,
            Player::O => Icon::Circle,
        }
    }
}

/// The four animation primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Becomes visible, alpha 0 to 1.
    FadeIn,
    /// Alpha to 0, hidden on completion.
    FadeOut,
    /// Icon set up front, alpha and scale 0 to 1.
    ScaleFadeIn(Icon),
    /// Alpha and scale to 0, icon cleared on completion.
    ScaleFadeOut,
}

/// A running animation on one element.
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
pub struct Animation {
    /// Primitive being run.
    kind: TransitionKind,
    /// When the animation started.
    started: Instant,
    /// Total run time.
    duration: Duration,
    /// Alpha when the animation started.
    from_alpha: f32,
    /// Scale when the animation started.
    from_scale: f32,
}

impl Animation {
    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the animation has run its full duration.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Target alpha and scale at the end of the animation.
    pub fn target(&self) -> (f32, f32) {
        match self.kind {
            TransitionKind::FadeIn => (1.0, self.from_scale),
            TransitionKind::FadeOut => (0.0, self.from_scale),
            TransitionKind::ScaleFadeIn(_) => (1.0, 1.0),
            TransitionKind::ScaleFadeOut => (0.0, 0.0),
        }
    }

    /// Alpha and scale at `now`, eased.
    pub fn sample(&self, now: Instant) -> (f32, f32) {
        let t = ease_in_out(self.progress(now));
        let (to_alpha, to_scale) = self.target();
        (
            lerp(self.from_alpha, to_alpha, t),
            lerp(self.from_scale, to_scale, t),
        )
    }
}

/// Accelerate-decelerate curve: slow start, slow end.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
