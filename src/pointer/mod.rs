//! Pointer Motion Path
//!
//! Everything between a raw index-fingertip position and a stable on-screen
//! cursor position, in the order the pipeline applies it:
//!
//! ```text
//! camera point --[ScreenMapper]--> display pixels
//!              --[CursorSmoother]--> stabilized pixels
//!              --[apply_pointer_speed]--> final cursor position
//! ```
//!
//! Mapping runs before smoothing so the filter operates on screen-space
//! pixels, and the speed rescale is applied last to the already-smoothed
//! position. Reordering these stages changes the feel and is not allowed.

pub mod mapper;
pub mod region;
pub mod smoother;
pub mod speed;

pub use mapper::ScreenMapper;
pub use region::ActiveRegion;
pub use smoother::{CursorSmoother, SmootherConfig};
pub use speed::apply_pointer_speed;

/// Display dimensions in pixels, queried once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Horizontal resolution.
    pub width: u32,
    /// Vertical resolution.
    pub height: u32,
}

impl ScreenSize {
    /// Create a screen size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Center pixel, rounded down on odd dimensions.
    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}
