//! # handmouse
//!
//! Hand-gesture mouse control: turns per-frame 2-D hand landmarks into
//! stabilized cursor movement and discrete mouse events.
//!
//! # Architecture
//!
//! ```text
//! handmouse
//!   ├─> Landmark Source (JSONL session replay; live capture seam)
//!   ├─> Frame Pipeline
//!   │     ├─> Pointing Gate (index-finger pose check)
//!   │     ├─> Cursor Path (active-region map → EMA smooth → speed scale)
//!   │     └─> Gesture Recognizer (pinch state machines)
//!   └─> Pointer Sink (trace logging, enigo injection)
//! ```
//!
//! # Data Flow
//!
//! **Cursor path:** index tip → active-region map → smoothing → speed
//! scaling → sink move
//!
//! **Gesture path:** pinch ratios → click/drag/scroll state machines →
//! sink verbs
//!
//! The gesture path runs on every frame with a hand, whether or not the
//! pointing gate allows cursor movement that frame; gestures fired while
//! the cursor is parked land at its last position.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Runtime configuration
pub mod config;

/// Gesture events and pinch state machines
pub mod gesture;

/// Hand landmarks and pose checks
pub mod hand;

/// Pointer injection sinks
pub mod inject;

/// Per-frame decision pipeline
pub mod pipeline;

/// Cursor mapping, smoothing, and speed scaling
pub mod pointer;

/// Landmark sources
pub mod source;

// =============================================================================
// Convenience re-exports
// =============================================================================

pub use config::Config;
pub use gesture::GestureEvents;
pub use hand::HandObservation;
pub use pipeline::{FrameOutput, FramePipeline};
pub use pointer::ScreenSize;
