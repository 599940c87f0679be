//! Camera-to-Screen Mapper
//!
//! Maps a point inside the active region of the camera frame onto display
//! pixels. The point is clamped into the region first, so a hand that
//! drifts outside the tracked zone pins the cursor to the corresponding
//! screen edge instead of producing out-of-range output.
//!
//! An optional power-law curve (`value^gamma`) reshapes the normalized
//! response per axis: gamma > 1 slows the cursor near the region origin
//! and speeds it up toward the far edge, a precision aid for small hand
//! movements. gamma = 1 is exactly linear.

use crate::hand::Point;
use crate::pointer::region::ActiveRegion;
use crate::pointer::ScreenSize;

/// Stateless mapping from camera pixels to display pixels.
///
/// Holds only immutable parameters; `map` is a pure function of its input.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMapper {
    region: ActiveRegion,
    screen: ScreenSize,
    gamma: f64,
}

impl ScreenMapper {
    /// Create a mapper for one region/screen/gamma combination.
    pub fn new(region: ActiveRegion, screen: ScreenSize, gamma: f64) -> Self {
        Self { region, screen, gamma }
    }

    /// Map a camera-space point to integer display coordinates.
    pub fn map(&self, point: Point) -> (i32, i32) {
        // Clamp into the active region
        let x = point.x.min(self.region.x1 as f64).max(self.region.x0 as f64);
        let y = point.y.min(self.region.y1 as f64).max(self.region.y0 as f64);

        // Normalize within the region; denominator floored at one pixel so
        // a degenerate region cannot divide by zero
        let mut nx = (x - self.region.x0 as f64) / self.region.width().max(1) as f64;
        let mut ny = (y - self.region.y0 as f64) / self.region.height().max(1) as f64;

        if self.gamma != 1.0 {
            nx = curve01(nx, self.gamma);
            ny = curve01(ny, self.gamma);
        }

        let sx = (nx * (self.screen.width - 1) as f64) as i32;
        let sy = (ny * (self.screen.height - 1) as f64) as i32;
        (sx, sy)
    }
}

/// Power-law response on a normalized value, clamped into [0,1] first.
fn curve01(v: f64, gamma: f64) -> f64 {
    v.min(1.0).max(0.0).powf(gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_mapper(gamma: f64) -> ScreenMapper {
        ScreenMapper::new(
            ActiveRegion::from_frame(1920, 1080, 0.0),
            ScreenSize::new(1920, 1080),
            gamma,
        )
    }

    #[test]
    fn test_linear_map_corners_and_center() {
        let mapper = test_mapper(1.0);

        assert_eq!(mapper.map(Point::new(0.0, 0.0)), (0, 0));
        assert_eq!(mapper.map(Point::new(1920.0, 1080.0)), (1919, 1079));
        // 0.5 * 1919 = 959.5, truncated
        assert_eq!(mapper.map(Point::new(960.0, 540.0)), (959, 539));
    }

    #[test]
    fn test_out_of_region_clamps_to_border() {
        let mapper = test_mapper(1.0);

        let outside = mapper.map(Point::new(-250.0, 5000.0));
        let border = mapper.map(Point::new(0.0, 1080.0));
        assert_eq!(outside, border);
        assert_eq!(outside, (0, 1079));
    }

    #[test]
    fn test_clamp_respects_margin_region() {
        let region = ActiveRegion::from_frame(1920, 1080, 0.1);
        let mapper = ScreenMapper::new(region, ScreenSize::new(1920, 1080), 1.0);

        // Left of the region maps like its left edge, which is screen x=0
        assert_eq!(mapper.map(Point::new(0.0, 540.0)).0, 0);
        assert_eq!(mapper.map(Point::new(192.0, 540.0)).0, 0);
        // Right of the region pins to the last screen column
        assert_eq!(mapper.map(Point::new(1919.0, 540.0)).0, 1919);
    }

    #[test]
    fn test_gamma_compresses_near_origin() {
        let mapper = test_mapper(2.0);

        // 0.5^2 = 0.25 -> 0.25 * 1919 = 479.75
        assert_eq!(mapper.map(Point::new(960.0, 540.0)).0, 479);
        // Endpoints are fixed points for any gamma
        assert_eq!(mapper.map(Point::new(0.0, 0.0)), (0, 0));
        assert_eq!(mapper.map(Point::new(1920.0, 1080.0)), (1919, 1079));
    }

    #[test]
    fn test_degenerate_region_does_not_panic() {
        let region = ActiveRegion { x0: 500, y0: 400, x1: 500, y1: 400 };
        let mapper = ScreenMapper::new(region, ScreenSize::new(1920, 1080), 1.1);

        assert_eq!(mapper.map(Point::new(123.0, 456.0)), (0, 0));
    }

    proptest! {
        #[test]
        fn prop_output_always_on_screen(x in -5000.0..5000.0f64, y in -5000.0..5000.0f64,
                                        gamma in 0.2..4.0f64) {
            let mapper = test_mapper(gamma);
            let (sx, sy) = mapper.map(Point::new(x, y));
            prop_assert!((0..1920).contains(&sx));
            prop_assert!((0..1080).contains(&sy));
        }

        #[test]
        fn prop_monotonic_along_x(a in 0.0..1920.0f64, b in 0.0..1920.0f64,
                                  gamma in 0.2..4.0f64) {
            let mapper = test_mapper(gamma);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let first = mapper.map(Point::new(lo, 500.0)).0;
            let second = mapper.map(Point::new(hi, 500.0)).0;
            prop_assert!(first <= second);
        }
    }
}
