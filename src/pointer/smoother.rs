//! Cursor Smoother
//!
//! Exponential-moving-average filter that turns jittery mapped positions
//! into stable cursor motion. Three stages per update:
//!
//! ```text
//! delta = target - state
//! deadzone:  |delta| < deadzone_px  =>  delta = 0   (per axis)
//! step cap:  delta clamped to +-max_step_px         (per axis)
//! EMA:       state = (1 - alpha) * state + alpha * (state + delta)
//! ```
//!
//! The deadzone suppresses micro-jitter at rest, the step cap stops a
//! detector glitch from teleporting the cursor, and the EMA spreads the
//! remaining motion over several frames. One frame therefore moves the
//! state at most `max_step_px * alpha` toward the target.
//!
//! The first update snaps the state straight to the target so a fresh
//! session starts on the hand, not at a stale origin.

use serde::{Deserialize, Serialize};

/// Tuning for the cursor smoother.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmootherConfig {
    /// EMA blend fraction (0 < alpha <= 1, higher = more responsive).
    #[serde(default = "default_ema_alpha")]
    pub ema_alpha: f64,

    /// Per-axis deltas smaller than this many pixels are ignored.
    #[serde(default = "default_deadzone_px")]
    pub deadzone_px: i32,

    /// Per-axis delta cap in pixels per update.
    #[serde(default = "default_max_step_px")]
    pub max_step_px: i32,
}

fn default_ema_alpha() -> f64 {
    0.14
}
fn default_deadzone_px() -> i32 {
    3
}
fn default_max_step_px() -> i32 {
    70
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            ema_alpha: default_ema_alpha(),
            deadzone_px: default_deadzone_px(),
            max_step_px: default_max_step_px(),
        }
    }
}

/// Stateful EMA filter over cursor positions.
///
/// Owns one persistent float-pair state for the process lifetime; the
/// state is set on the first update and never reset afterwards.
#[derive(Debug)]
pub struct CursorSmoother {
    config: SmootherConfig,
    state: Option<(f64, f64)>,
}

impl CursorSmoother {
    /// Create a smoother with unset state.
    pub fn new(config: SmootherConfig) -> Self {
        Self { config, state: None }
    }

    /// Feed the next target position, returning the smoothed cursor
    /// position as truncated integers.
    pub fn update(&mut self, target_x: i32, target_y: i32) -> (i32, i32) {
        let (sx, sy) = match self.state {
            Some(state) => state,
            None => {
                self.state = Some((target_x as f64, target_y as f64));
                return (target_x, target_y);
            }
        };

        let mut dx = target_x as f64 - sx;
        let mut dy = target_y as f64 - sy;

        // Deadzone
        if dx.abs() < self.config.deadzone_px as f64 {
            dx = 0.0;
        }
        if dy.abs() < self.config.deadzone_px as f64 {
            dy = 0.0;
        }

        // Step cap
        let cap = self.config.max_step_px as f64;
        dx = dx.min(cap).max(-cap);
        dy = dy.min(cap).max(-cap);

        // EMA
        let alpha = self.config.ema_alpha;
        let nx = (1.0 - alpha) * sx + alpha * (sx + dx);
        let ny = (1.0 - alpha) * sy + alpha * (sy + dy);
        self.state = Some((nx, ny));

        (nx as i32, ny as i32)
    }
}
