//! Gesture Recognition
//!
//! Turns per-frame hand observations into discrete pointer actions. The
//! recognizer tracks three thumb-to-fingertip pinches (middle, ring,
//! pinky) as independent state machines with shared cross-cutting state:
//! one debounce clock for both click kinds, and scroll mode suppressing
//! the click machines while engaged.
//!
//! Timing is driven entirely by caller-supplied monotonic timestamps, so
//! the recognizer behaves identically under frame skipping or stale-frame
//! reuse.

pub mod events;
pub mod recognizer;

pub use events::GestureEvents;
pub use recognizer::{ClickTuning, GestureRecognizer, ScrollTuning};
