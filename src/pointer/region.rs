//! Active Region
//!
//! The sub-rectangle of the camera frame that maps onto the full display.
//! A margin fraction shrinks the rectangle symmetrically on both axes so
//! the operator can reach screen edges without leaving the camera's view.

/// Axis-aligned rectangle in camera pixel space, half-open by convention
/// but used inclusively by the mapper's clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRegion {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge.
    pub x1: i32,
    /// Bottom edge.
    pub y1: i32,
}

impl ActiveRegion {
    /// Compute the region for a camera frame, shrinking it by `margin`
    /// (a fraction of each dimension, truncated to whole pixels) on every
    /// side. Margins below 0.5 keep the region non-degenerate.
    pub fn from_frame(frame_w: u32, frame_h: u32, margin: f64) -> Self {
        let mx = (frame_w as f64 * margin) as i32;
        let my = (frame_h as f64 * margin) as i32;
        Self {
            x0: mx,
            y0: my,
            x1: frame_w as i32 - mx,
            y1: frame_h as i32 - my,
        }
    }

    /// Region width in pixels.
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    /// Region height in pixels.
    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}
