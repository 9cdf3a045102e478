//! Clickable regions registered while drawing.
//!
//! Areas are cleared at the start of each draw and registered back to
//! front; hit testing returns the topmost area under the pointer.

use ratatui::layout::Rect;

use crate::games::tictactoe::Position;

/// Something the user can tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapTarget {
    /// One of the nine cell images.
    Cell(Position),
    /// The result text.
    ResultLabel,
    /// The overlay dimming the field after a result.
    Dimmer,
    /// The back control.
    Back,
}

/// A clickable region with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks.
    pub rect: Rect,
    /// The target tapped by a click inside `rect`.
    pub target: TapTarget,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(ratatui::layout::Position { x, y })
    }
}

/// Registry of the hit areas of the last drawn frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    /// Drops all areas before a new frame is drawn.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Registers an area above everything registered so far.
    pub fn register(&mut self, rect: Rect, target: TapTarget) {
        self.areas.push(HitArea { rect, target });
    }

    /// Topmost target at the given terminal coordinates.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<TapTarget> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.target)
    }

    /// Rect registered for a target, if it was drawn.
    pub fn rect_of(&self, target: TapTarget) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.target == target)
            .map(|area| area.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_area_wins() {
        let mut registry = HitAreaRegistry::default();
        registry.register(Rect::new(0, 0, 10, 10), TapTarget::Cell(Position::TopLeft));
        registry.register(Rect::new(0, 0, 20, 20), TapTarget::Dimmer);
        assert_eq!(registry.hit_test(5, 5), Some(TapTarget::Dimmer));
    }

    #[test]
    fn test_miss_outside_areas() {
        let mut registry = HitAreaRegistry::default();
        registry.register(Rect::new(2, 2, 3, 3), TapTarget::Back);
        assert_eq!(registry.hit_test(5, 5), None);
        assert_eq!(registry.hit_test(4, 4), Some(TapTarget::Back));
    }
}
