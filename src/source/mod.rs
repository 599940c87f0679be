//! Landmark sources
//!
//! A landmark source yields one timestamped hand observation per frame
//! until it is exhausted. The shipped implementation replays recorded
//! sessions from JSON Lines files; a live capture front end would attach
//! at the same trait.

mod replay;

pub use replay::ReplaySource;

use crate::hand::HandObservation;
use thiserror::Error;

/// Result type for source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Landmark source error types
#[derive(Error, Debug)]
pub enum SourceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed frame record
    #[error("Malformed frame record at line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number in the session file
        line: usize,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Wrong landmark count in a frame record
    #[error("Frame at line {line} has {count} landmarks, expected {expected}")]
    LandmarkCount {
        /// 1-based line number in the session file
        line: usize,
        /// Landmarks found
        count: usize,
        /// Landmarks required
        expected: usize,
    },
}

/// One timestamped frame from a source.
#[derive(Debug, Clone)]
pub struct SourceFrame {
    /// Milliseconds since session start
    pub t_ms: u64,
    /// Hand observation, absent when no hand was visible
    pub hand: Option<HandObservation>,
}

/// A stream of per-frame hand observations.
pub trait HandSource {
    /// Next frame, or `None` when the stream ends.
    fn next_frame(&mut self) -> Result<Option<SourceFrame>>;
}
