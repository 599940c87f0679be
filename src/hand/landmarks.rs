//! Hand Landmark Model
//!
//! Fixed 21-point hand skeleton as produced by MediaPipe-style detectors,
//! in pixel coordinates of the camera frame. Index meaning is part of the
//! detector contract and never changes, so every consumer addresses points
//! through the named constants or the accessors on [`HandObservation`]
//! rather than raw indices.

use serde::{Deserialize, Serialize};

/// Number of landmarks per tracked hand.
pub const LANDMARK_COUNT: usize = 21;

// ---------------------------------------------------------------------------
// Landmark indices (MediaPipe hand model)
// ---------------------------------------------------------------------------

/// Wrist joint.
pub const WRIST: usize = 0;
/// Thumb carpometacarpal joint.
pub const THUMB_CMC: usize = 1;
/// Thumb metacarpophalangeal joint.
pub const THUMB_MCP: usize = 2;
/// Thumb interphalangeal joint.
pub const THUMB_IP: usize = 3;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index finger base knuckle.
pub const INDEX_MCP: usize = 5;
/// Index finger middle joint.
pub const INDEX_PIP: usize = 6;
/// Index finger distal joint.
pub const INDEX_DIP: usize = 7;
/// Index finger tip.
pub const INDEX_TIP: usize = 8;
/// Middle finger base knuckle.
pub const MIDDLE_MCP: usize = 9;
/// Middle finger middle joint.
pub const MIDDLE_PIP: usize = 10;
/// Middle finger distal joint.
pub const MIDDLE_DIP: usize = 11;
/// Middle finger tip.
pub const MIDDLE_TIP: usize = 12;
/// Ring finger base knuckle.
pub const RING_MCP: usize = 13;
/// Ring finger middle joint.
pub const RING_PIP: usize = 14;
/// Ring finger distal joint.
pub const RING_DIP: usize = 15;
/// Ring finger tip.
pub const RING_TIP: usize = 16;
/// Pinky base knuckle.
pub const PINKY_MCP: usize = 17;
/// Pinky middle joint.
pub const PINKY_PIP: usize = 18;
/// Pinky distal joint.
pub const PINKY_DIP: usize = 19;
/// Pinky tip.
pub const PINKY_TIP: usize = 20;

/// A 2-D point in camera pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate (image space: smaller y is higher).
    pub y: f64,
}

impl Point {
    /// Create a point from pixel coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One detected hand for one frame: the full 21-point landmark set.
///
/// Immutable once built. The detector boundary constructs these; a frame
/// without a hand is represented by the absence of an observation, never by
/// a partial one.
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    landmarks: [Point; LANDMARK_COUNT],
}

impl HandObservation {
    /// Build an observation from exactly [`LANDMARK_COUNT`] points.
    ///
    /// Returns `None` for any other count, which callers at the detector
    /// boundary treat as "no usable hand this frame".
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let landmarks: [Point; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { landmarks })
    }

    /// Landmark at a raw model index. Panics on indices >= 21, so call
    /// sites should go through the named accessors below.
    pub fn point(&self, index: usize) -> Point {
        self.landmarks[index]
    }

    /// All landmarks in model order.
    pub fn points(&self) -> &[Point; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Thumb tip.
    pub fn thumb_tip(&self) -> Point {
        self.landmarks[THUMB_TIP]
    }

    /// Index finger tip, the cursor-steering point.
    pub fn index_tip(&self) -> Point {
        self.landmarks[INDEX_TIP]
    }

    /// Middle finger tip.
    pub fn middle_tip(&self) -> Point {
        self.landmarks[MIDDLE_TIP]
    }

    /// Ring finger tip.
    pub fn ring_tip(&self) -> Point {
        self.landmarks[RING_TIP]
    }

    /// Pinky tip.
    pub fn pinky_tip(&self) -> Point {
        self.landmarks[PINKY_TIP]
    }

    /// Palm width proxy: knuckle-to-knuckle distance between the index and
    /// pinky base joints, floored at 1.0. Used as the scale reference that
    /// makes pinch ratios invariant to hand distance from the camera.
    pub fn palm_width(&self) -> f64 {
        self.landmarks[INDEX_MCP]
            .distance_to(self.landmarks[PINKY_MCP])
            .max(1.0)
    }
}
