//! Pointer Speed Scaling
//!
//! Rescales a cursor position around the screen center by a speed factor,
//! so a small active region of hand motion can still sweep the full
//! display. Independent of the mapper and applied after smoothing.

use crate::pointer::ScreenSize;

/// Scale a position around the screen center.
///
/// `speed` 1.0 leaves the position unchanged, above 1.0 amplifies hand
/// motion, below 1.0 dampens it. Output is truncated to integers and
/// clamped to the display bounds.
pub fn apply_pointer_speed(x: i32, y: i32, screen: ScreenSize, speed: f64) -> (i32, i32) {
    let (cx, cy) = screen.center();

    let sx = (cx as f64 + (x - cx) as f64 * speed) as i32;
    let sy = (cy as f64 + (y - cy) as f64 * speed) as i32;

    let sx = sx.min(screen.width as i32 - 1).max(0);
    let sy = sy.min(screen.height as i32 - 1).max(0);
    (sx, sy)
}
