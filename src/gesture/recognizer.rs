//! Gesture Recognizer
//!
//! The central state machine of the pipeline. Each frame it measures how
//! closed three thumb-to-fingertip pinches are and runs one independent
//! state machine per pinch:
//!
//! | Pinch          | Action                          |
//! |----------------|---------------------------------|
//! | thumb + middle | left click, press-and-hold drag |
//! | thumb + ring   | right click                     |
//! | thumb + pinky  | scroll mode                     |
//!
//! Pinch "closedness" is the thumb-to-fingertip distance divided by the
//! palm width, so the same hand pose reads the same at any distance from
//! the camera. Each machine applies one-sided hysteresis: the pinch
//! engages when its ratio drops below the start threshold and releases
//! only once the ratio rises above the higher end threshold, so noise near
//! a single cutoff cannot chatter the state.
//!
//! Clicks fire on release, after a minimum hold and only if the cursor
//! stayed near where the pinch began; left and right clicks share one
//! debounce clock. Holding the middle pinch past the drag threshold turns
//! it into a press-and-hold instead. Scroll mode takes priority over both
//! click machines and suppresses them entirely while the pinky pinch is
//! held.
//!
//! All held-duration logic runs on the caller's monotonic millisecond
//! timestamps, never on frame counts, so skipped or re-fed frames cannot
//! distort timing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gesture::events::GestureEvents;
use crate::hand::HandObservation;

/// Smallest accepted scroll conversion denominator, in camera pixels.
const MIN_SCROLL_PX_PER_STEP: i32 = 6;

/// Tuning for the click and drag pinches (middle and ring fingers).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClickTuning {
    /// Ratio below which a pinch engages.
    #[serde(default = "default_pinch_start_ratio")]
    pub pinch_start_ratio: f64,

    /// Ratio above which an engaged pinch releases (must exceed start).
    #[serde(default = "default_pinch_end_ratio")]
    pub pinch_end_ratio: f64,

    /// Minimum hold for a release to count as a click (ms).
    #[serde(default = "default_pinch_click_ms")]
    pub pinch_click_ms: u64,

    /// Hold duration that turns the middle pinch into a drag (ms).
    #[serde(default = "default_pinch_drag_ms")]
    pub pinch_drag_ms: u64,

    /// Minimum spacing between successful clicks of either kind (ms).
    #[serde(default = "default_click_debounce_ms")]
    pub click_debounce_ms: u64,

    /// Cursor travel from the pinch-start position that cancels a click
    /// (px on the display).
    #[serde(default = "default_click_max_move_px")]
    pub click_max_move_px: i32,
}

fn default_pinch_start_ratio() -> f64 {
    0.30
}
fn default_pinch_end_ratio() -> f64 {
    0.40
}
fn default_pinch_click_ms() -> u64 {
    120
}
fn default_pinch_drag_ms() -> u64 {
    480
}
fn default_click_debounce_ms() -> u64 {
    250
}
fn default_click_max_move_px() -> i32 {
    35
}

impl Default for ClickTuning {
    fn default() -> Self {
        Self {
            pinch_start_ratio: default_pinch_start_ratio(),
            pinch_end_ratio: default_pinch_end_ratio(),
            pinch_click_ms: default_pinch_click_ms(),
            pinch_drag_ms: default_pinch_drag_ms(),
            click_debounce_ms: default_click_debounce_ms(),
            click_max_move_px: default_click_max_move_px(),
        }
    }
}

/// Tuning for scroll mode (pinky pinch).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrollTuning {
    /// Ratio below which scroll mode engages.
    #[serde(default = "default_scroll_start_ratio")]
    pub pinch_start_ratio: f64,

    /// Ratio above which scroll mode releases.
    #[serde(default = "default_scroll_end_ratio")]
    pub pinch_end_ratio: f64,

    /// Camera pixels of finger travel per wheel step; floored at 6.
    #[serde(default = "default_scroll_px_per_step")]
    pub px_per_step: i32,

    /// Largest wheel magnitude emitted in one frame; excess is dropped.
    #[serde(default = "default_scroll_max_step")]
    pub max_step: i32,
}

fn default_scroll_start_ratio() -> f64 {
    0.32
}
fn default_scroll_end_ratio() -> f64 {
    0.42
}
fn default_scroll_px_per_step() -> i32 {
    22
}
fn default_scroll_max_step() -> i32 {
    6
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            pinch_start_ratio: default_scroll_start_ratio(),
            pinch_end_ratio: default_scroll_end_ratio(),
            px_per_step: default_scroll_px_per_step(),
            max_step: default_scroll_max_step(),
        }
    }
}

/// State of the middle pinch (left click + drag).
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPinch {
    Idle,
    Pinching {
        start_ms: u64,
        start_cursor: (i32, i32),
        moved: bool,
        dragging: bool,
    },
}

/// State of the ring pinch (right click); same shape minus the drag phase.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ClickPinch {
    Idle,
    Pinching {
        start_ms: u64,
        start_cursor: (i32, i32),
        moved: bool,
    },
}

/// State of the pinky pinch (scroll mode).
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScrollMode {
    Idle,
    Tracking { last_y: f64, accum: f64 },
}

/// Per-hand gesture state machine.
///
/// One instance per tracked hand, constructed once and never reset. All
/// cross-gesture state (the shared debounce clock, scroll suppressing the
/// click machines) lives inside this struct; nothing is ambient.
#[derive(Debug)]
pub struct GestureRecognizer {
    click: ClickTuning,
    scroll: ScrollTuning,
    scroll_px_per_step: f64,

    /// Timestamp of the last successful click of either kind.
    last_click_ms: u64,

    middle: DragPinch,
    ring: ClickPinch,
    wheel: ScrollMode,
}

impl GestureRecognizer {
    /// Create a recognizer with all pinches idle.
    pub fn new(click: ClickTuning, scroll: ScrollTuning) -> Self {
        Self {
            click,
            scroll_px_per_step: scroll.px_per_step.max(MIN_SCROLL_PX_PER_STEP) as f64,
            scroll,
            last_click_ms: 0,
            middle: DragPinch::Idle,
            ring: ClickPinch::Idle,
            wheel: ScrollMode::Idle,
        }
    }

    /// Advance all pinch machines by one frame.
    ///
    /// `cursor` is the current stabilized cursor position, used for the
    /// movement-tolerance checks; callers pass the last known position on
    /// frames where the cursor did not move.
    pub fn update(
        &mut self,
        hand: &HandObservation,
        now_ms: u64,
        cursor: (i32, i32),
    ) -> GestureEvents {
        let palm_w = hand.palm_width();
        let thumb = hand.thumb_tip();

        let mid_ratio = thumb.distance_to(hand.middle_tip()) / palm_w;
        let ring_ratio = thumb.distance_to(hand.ring_tip()) / palm_w;
        let pinky_ratio = thumb.distance_to(hand.pinky_tip()) / palm_w;

        let mid_pinch = pinched(
            mid_ratio,
            matches!(self.middle, DragPinch::Pinching { .. }),
            self.click.pinch_start_ratio,
            self.click.pinch_end_ratio,
        );
        let ring_pinch = pinched(
            ring_ratio,
            matches!(self.ring, ClickPinch::Pinching { .. }),
            self.click.pinch_start_ratio,
            self.click.pinch_end_ratio,
        );
        let scroll_pinch = pinched(
            pinky_ratio,
            matches!(self.wheel, ScrollMode::Tracking { .. }),
            self.scroll.pinch_start_ratio,
            self.scroll.pinch_end_ratio,
        );

        let mut events = GestureEvents::default();

        // Scroll mode runs first and owns the frame while engaged; the
        // click machines below never see a scrolling frame.
        if scroll_pinch {
            let (last_y, accum) = match self.wheel {
                ScrollMode::Tracking { last_y, accum } => (last_y, accum),
                ScrollMode::Idle => {
                    debug!(ratio = pinky_ratio, "scroll mode engaged");
                    // Middle-tip y is the steadiest tracking reference
                    (hand.middle_tip().y, 0.0)
                }
            };

            let y = hand.middle_tip().y;
            let mut accum = accum + (y - last_y);

            // Whole steps are consumed out of the accumulator; the
            // remainder carries to the next frame
            let steps = (accum / self.scroll_px_per_step).trunc() as i32;
            if steps != 0 {
                // Finger moving down (y growing) scrolls down, wheel < 0.
                // The cap bounds one frame's burst; accum is still debited
                // the full consumed distance, so capped excess is dropped
                // rather than queued
                let wheel = (-steps).min(self.scroll.max_step).max(-self.scroll.max_step);
                events.scroll = wheel;
                accum -= steps as f64 * self.scroll_px_per_step;
                debug!(steps, wheel, "scroll steps emitted");
            }

            self.wheel = ScrollMode::Tracking { last_y: y, accum };
            return events;
        }

        if matches!(self.wheel, ScrollMode::Tracking { .. }) {
            debug!("scroll mode released");
            self.wheel = ScrollMode::Idle;
        }

        // Middle pinch: left click on a quick release, drag on a long hold
        if mid_pinch {
            if self.middle == DragPinch::Idle {
                debug!(ratio = mid_ratio, "middle pinch engaged");
                self.middle = DragPinch::Pinching {
                    start_ms: now_ms,
                    start_cursor: cursor,
                    moved: false,
                    dragging: false,
                };
            }
            if let DragPinch::Pinching { start_ms, start_cursor, moved, dragging } =
                &mut self.middle
            {
                let held = now_ms.saturating_sub(*start_ms);

                if cursor_travel(cursor, *start_cursor) > self.click.click_max_move_px as f64 {
                    *moved = true;
                }

                if !*dragging && held >= self.click.pinch_drag_ms {
                    *dragging = true;
                    events.drag_start = true;
                    debug!(held_ms = held, "drag started");
                }
            }
        } else if let DragPinch::Pinching { start_ms, moved, dragging, .. } = self.middle {
            let held = now_ms.saturating_sub(start_ms);

            if dragging {
                events.drag_end = true;
                debug!(held_ms = held, "drag ended");
            } else if held >= self.click.pinch_click_ms
                && !moved
                && now_ms.saturating_sub(self.last_click_ms) >= self.click.click_debounce_ms
            {
                events.left_click = true;
                self.last_click_ms = now_ms;
                debug!(held_ms = held, "left click");
            }

            self.middle = DragPinch::Idle;
        }

        // Ring pinch: right click on release
        if ring_pinch {
            if self.ring == ClickPinch::Idle {
                debug!(ratio = ring_ratio, "ring pinch engaged");
                self.ring = ClickPinch::Pinching {
                    start_ms: now_ms,
                    start_cursor: cursor,
                    moved: false,
                };
            }
            if let ClickPinch::Pinching { start_cursor, moved, .. } = &mut self.ring {
                if cursor_travel(cursor, *start_cursor) > self.click.click_max_move_px as f64 {
                    *moved = true;
                }
            }
        } else if let ClickPinch::Pinching { start_ms, moved, .. } = self.ring {
            let held = now_ms.saturating_sub(start_ms);

            if held >= self.click.pinch_click_ms
                && !moved
                && now_ms.saturating_sub(self.last_click_ms) >= self.click.click_debounce_ms
            {
                events.right_click = true;
                self.last_click_ms = now_ms;
                debug!(held_ms = held, "right click");
            }

            self.ring = ClickPinch::Idle;
        }

        events
    }
}

/// One-sided pinch hysteresis: engage below `start`, release above `end`.
fn pinched(ratio: f64, currently_pinched: bool, start: f64, end: f64) -> bool {
    if currently_pinched {
        ratio < end
    } else {
        ratio < start
    }
}

/// Euclidean cursor travel between two display positions.
fn cursor_travel(a: (i32, i32), b: (i32, i32)) -> f64 {
    ((a.0 - b.0) as f64).hypot((a.1 - b.1) as f64)
}
