//! Configuration type definitions
//!
//! Section structs for the TOML configuration file. Tuning structs for the
//! cursor smoother and the gesture recognizer live next to their components
//! and are composed into [`super::Config`] alongside these.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Camera capture configuration
///
/// Capture itself happens upstream of this process; these values describe
/// the frame geometry the landmark stream was produced from and the pacing
/// policy of the run loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Capture device index
    #[serde(default)]
    pub index: u32,

    /// Frame width in pixels
    #[serde(default = "default_camera_width")]
    pub width: u32,

    /// Frame height in pixels
    #[serde(default = "default_camera_height")]
    pub height: u32,

    /// Mirror frames for selfie view before detection. Landmarks arriving
    /// here are already in mirrored space; this flag is informational for
    /// the capture side.
    #[serde(default = "default_mirror")]
    pub mirror: bool,

    /// Run detection on every Nth frame; the previous observation is
    /// re-fed on the frames in between
    #[serde(default = "default_process_every_n_frames")]
    pub process_every_n_frames: u32,
}

fn default_camera_width() -> u32 {
    1920
}

fn default_camera_height() -> u32 {
    1080
}

fn default_mirror() -> bool {
    true
}

fn default_process_every_n_frames() -> u32 {
    3
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: 0,
            width: default_camera_width(),
            height: default_camera_height(),
            mirror: default_mirror(),
            process_every_n_frames: default_process_every_n_frames(),
        }
    }
}

/// Cursor mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Fraction of each frame dimension excluded as a border margin
    /// (0.0 to just under 0.5)
    #[serde(default)]
    pub active_region_margin: f64,

    /// Power-curve exponent applied to the normalized position;
    /// 1.0 is linear, above 1.0 slows the center and speeds the edges
    #[serde(default = "default_map_gamma")]
    pub map_gamma: f64,

    /// Speed factor applied around the screen center after smoothing
    #[serde(default = "default_mouse_speed")]
    pub mouse_speed: f64,
}

fn default_map_gamma() -> f64 {
    1.10
}

fn default_mouse_speed() -> f64 {
    3.0
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            active_region_margin: 0.0,
            map_gamma: default_map_gamma(),
            mouse_speed: default_mouse_speed(),
        }
    }
}

/// Display resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Query the display size from the injection backend at startup
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,

    /// Fallback width when detection is unavailable
    #[serde(default = "default_display_width")]
    pub width: u32,

    /// Fallback height when detection is unavailable
    #[serde(default = "default_display_height")]
    pub height: u32,
}

fn default_auto_detect() -> bool {
    true
}

fn default_display_width() -> u32 {
    1920
}

fn default_display_height() -> u32 {
    1080
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            auto_detect: default_auto_detect(),
            width: default_display_width(),
            height: default_display_height(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format ("pretty", "compact", "json")
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Log file path (None = console only)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}
