//! Hand Model
//!
//! Landmark-level view of one tracked hand: the fixed 21-point skeleton
//! with named indices, the per-frame observation carrier, and the pointing
//! pose gate that decides cursor-move eligibility.

pub mod landmarks;
pub mod pose;

pub use landmarks::{HandObservation, Point, LANDMARK_COUNT};
pub use pose::is_index_pointing;
