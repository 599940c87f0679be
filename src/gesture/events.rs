//! Per-Frame Gesture Events
//!
//! The recognizer's output for one frame: a read-only snapshot consumed by
//! the dispatch layer and discarded. Nothing here is retained across
//! frames.

/// Discrete events recognized in a single frame.
///
/// `drag_start`/`drag_end` and `left_click` are mutually exclusive within
/// a frame; `right_click` is independent and may accompany a left-path
/// event. `scroll` is a signed wheel-step count (positive scrolls up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureEvents {
    /// Left mouse click (fired on pinch release).
    pub left_click: bool,
    /// Right mouse click (fired on pinch release).
    pub right_click: bool,
    /// Press-and-hold began; the button stays down until `drag_end`.
    pub drag_start: bool,
    /// Press-and-hold ended.
    pub drag_end: bool,
    /// Wheel steps for this frame, clamped by the recognizer.
    pub scroll: i32,
}

impl GestureEvents {
    /// True when the frame produced no event at all.
    pub fn is_empty(&self) -> bool {
        !self.left_click
            && !self.right_click
            && !self.drag_start
            && !self.drag_end
            && self.scroll == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(GestureEvents::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_it_non_empty() {
        assert!(!GestureEvents { left_click: true, ..Default::default() }.is_empty());
        assert!(!GestureEvents { scroll: -2, ..Default::default() }.is_empty());
        assert!(!GestureEvents { drag_end: true, ..Default::default() }.is_empty());
    }
}
