//! Frame pipeline
//!
//! Top-level coordinator turning one hand observation per frame into cursor
//! movement and gesture events.
//!
//! Cursor movement only happens on frames where the pointing pose gate
//! passes; the gesture recognizer runs on every frame with a hand, using
//! the last known cursor position on gated-off frames.

use crate::config::Config;
use crate::gesture::{GestureEvents, GestureRecognizer};
use crate::hand::{is_index_pointing, HandObservation};
use crate::pointer::{
    apply_pointer_speed, ActiveRegion, CursorSmoother, ScreenMapper, ScreenSize,
};
use tracing::debug;

/// Result of processing one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutput {
    /// Stabilized cursor position, present only when the pointing pose
    /// gate passed this frame.
    pub cursor: Option<(i32, i32)>,
    /// Gesture events fired this frame.
    pub events: GestureEvents,
}

/// Running totals for the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineStats {
    /// Frames processed, with or without a hand
    pub frames: u64,
    /// Frames where no hand was visible
    pub frames_without_hand: u64,
    /// Frames where the pointing gate passed and a cursor was produced
    pub cursor_moves: u64,
    /// Left clicks fired
    pub left_clicks: u64,
    /// Right clicks fired
    pub right_clicks: u64,
    /// Drags started
    pub drags: u64,
    /// Scroll steps fired, counted by magnitude
    pub scroll_steps: u64,
}

/// Per-frame decision pipeline
pub struct FramePipeline {
    /// Frame-to-screen position mapper
    mapper: ScreenMapper,

    /// Cursor stabilizer
    smoother: CursorSmoother,

    /// Pinch gesture state machines
    recognizer: GestureRecognizer,

    /// Target display size
    screen: ScreenSize,

    /// Speed factor applied after smoothing
    mouse_speed: f64,

    /// Last cursor position produced, fed to the recognizer on frames
    /// where the gate blocks movement
    last_cursor: (i32, i32),

    /// Session counters
    stats: PipelineStats,
}

impl FramePipeline {
    /// Create a pipeline for the given configuration and display size.
    pub fn new(config: &Config, screen: ScreenSize) -> Self {
        let region = ActiveRegion::from_frame(
            config.camera.width,
            config.camera.height,
            config.mapping.active_region_margin,
        );

        Self {
            mapper: ScreenMapper::new(region, screen, config.mapping.map_gamma),
            smoother: CursorSmoother::new(config.smoothing),
            recognizer: GestureRecognizer::new(config.gestures, config.scroll),
            screen,
            mouse_speed: config.mapping.mouse_speed,
            last_cursor: screen.center(),
            stats: PipelineStats::default(),
        }
    }

    /// Process one frame.
    ///
    /// `hand` is `None` when no hand was visible; such frames change no
    /// state and produce no output.
    pub fn process(&mut self, hand: Option<&HandObservation>, now_ms: u64) -> FrameOutput {
        self.stats.frames += 1;

        let Some(hand) = hand else {
            self.stats.frames_without_hand += 1;
            return FrameOutput {
                cursor: None,
                events: GestureEvents::default(),
            };
        };

        let cursor = if is_index_pointing(hand) {
            let (map_x, map_y) = self.mapper.map(hand.index_tip());
            let (smooth_x, smooth_y) = self.smoother.update(map_x, map_y);
            let position =
                apply_pointer_speed(smooth_x, smooth_y, self.screen, self.mouse_speed);
            self.last_cursor = position;
            self.stats.cursor_moves += 1;
            Some(position)
        } else {
            None
        };

        let events = self.recognizer.update(hand, now_ms, self.last_cursor);

        if events.left_click {
            self.stats.left_clicks += 1;
        }
        if events.right_click {
            self.stats.right_clicks += 1;
        }
        if events.drag_start {
            self.stats.drags += 1;
        }
        self.stats.scroll_steps += u64::from(events.scroll.unsigned_abs());

        if !events.is_empty() {
            debug!(
                "Frame {}: cursor {:?}, events {:?}",
                self.stats.frames, self.last_cursor, events
            );
        }

        FrameOutput { cursor, events }
    }

    /// Last cursor position produced by the pipeline.
    pub fn last_cursor(&self) -> (i32, i32) {
        self.last_cursor
    }

    /// Session counters so far.
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }
}
