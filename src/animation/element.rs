//! Animated visual element.

use derive_getters::Getters;
use tokio::time::{Duration, Instant};
use tracing::trace;

use super::transition::{Animation, Icon, TransitionKind};

/// One visual element of the screen: a cell image, the result label or the
/// dimmer.
///
/// Starting a transition replaces any running one; the replaced animation's
/// completion effect is dropped with it.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct VisualElement {
    /// Opacity, 0 transparent to 1 opaque.
    alpha: f32,
    /// Size factor applied to the icon, 0 to 1.
    scale: f32,
    /// Hidden elements neither paint nor receive taps.
    visible: bool,
    /// Glyph shown in the element, if any.
    icon: Option<Icon>,
    /// Running animation, if any.
    animation: Option<Animation>,
}

impl VisualElement {
    /// A visible, fully opaque element without an icon (an empty cell).
    pub fn blank() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            visible: true,
            icon: None,
            animation: None,
        }
    }

    /// A hidden element (dimmer and result label before any result).
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::blank()
        }
    }

    /// Whether the element paints anything: visible and not fully transparent.
    pub fn is_shown(&self) -> bool {
        self.visible && self.alpha > 0.0
    }

    /// Whether an animation is still running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Makes the element visible and fades alpha 0 to 1.
    pub fn fade_in(&mut self, now: Instant, duration: Duration) {
        self.alpha = 0.0;
        self.visible = true;
        self.start(TransitionKind::FadeIn, now, duration);
    }

    /// Fades alpha 1 to 0 and hides the element on completion.
    pub fn fade_out(&mut self, now: Instant, duration: Duration) {
        self.alpha = 1.0;
        self.start(TransitionKind::FadeOut, now, duration);
    }

    /// Sets the icon, then grows and fades it in from nothing.
    pub fn scale_fade_in(&mut self, icon: Icon, now: Instant, duration: Duration) {
        self.alpha = 0.0;
        self.scale = 0.0;
        self.icon = Some(icon);
        self.start(TransitionKind::ScaleFadeIn(icon), now, duration);
    }

    /// Shrinks and fades the element out and clears its icon on completion.
    pub fn scale_fade_out(&mut self, now: Instant, duration: Duration) {
        self.alpha = 1.0;
        self.scale = 1.0;
        self.start(TransitionKind::ScaleFadeOut, now, duration);
    }

    fn start(&mut self, kind: TransitionKind, now: Instant, duration: Duration) {
        if let Some(previous) = self.animation.take() {
            trace!(previous = ?previous.kind(), next = ?kind, "Replacing running animation");
        }
        self.animation = Some(Animation::new(kind, now, duration, self.alpha, self.scale));
    }

    /// Advances the running animation to `now`.
    ///
    /// Returns the kind of animation that completed during this tick, after
    /// its completion effect has been applied.
    pub fn tick(&mut self, now: Instant) -> Option<TransitionKind> {
        let animation = self.animation?;

        if !animation.is_finished(now) {
            let (alpha, scale) = animation.sample(now);
            self.alpha = alpha;
            self.scale = scale;
            return None;
        }

        let (alpha, scale) = animation.target();
        self.alpha = alpha;
        self.scale = scale;
        self.animation = None;

        match animation.kind() {
            TransitionKind::FadeOut => self.visible = false,
            TransitionKind::ScaleFadeOut => self.icon = None,
            TransitionKind::FadeIn | TransitionKind::ScaleFadeIn(_) => {}
        }
        Some(*animation.kind())
    }
}

impl Default for VisualElement {
    fn default() -> Self {
        Self::blank()
    }
}
