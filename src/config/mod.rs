//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod types;

pub use types::{CameraConfig, DisplayConfig, LoggingConfig, MappingConfig};

use crate::gesture::{ClickTuning, ScrollTuning};
use crate::pointer::SmootherConfig;

/// Main configuration structure
///
/// Every section is optional in the file; missing sections and missing
/// keys fall back to the built-in defaults, so a partial file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Camera capture configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Cursor mapping configuration
    #[serde(default)]
    pub mapping: MappingConfig,
    /// Cursor smoothing configuration
    #[serde(default)]
    pub smoothing: SmootherConfig,
    /// Click and drag gesture tuning
    #[serde(default)]
    pub gestures: ClickTuning,
    /// Scroll gesture tuning
    #[serde(default)]
    pub scroll: ScrollTuning,
    /// Display resolution configuration
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, writing a default file first if none exists
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        let config = Config::default();
        config.save(path)?;
        info!("Wrote default configuration to {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .context(format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Default configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("handmouse").join("config.toml"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Camera geometry
        if self.camera.width == 0 || self.camera.height == 0 {
            anyhow::bail!(
                "Camera dimensions must be positive: {}x{}",
                self.camera.width,
                self.camera.height
            );
        }
        if self.camera.process_every_n_frames == 0 {
            anyhow::bail!("process_every_n_frames must be at least 1");
        }

        // Mapping
        if !(0.0..0.5).contains(&self.mapping.active_region_margin) {
            anyhow::bail!(
                "active_region_margin must be in [0.0, 0.5): {}",
                self.mapping.active_region_margin
            );
        }
        if self.mapping.map_gamma <= 0.0 {
            anyhow::bail!("map_gamma must be positive: {}", self.mapping.map_gamma);
        }
        if self.mapping.mouse_speed <= 0.0 {
            anyhow::bail!("mouse_speed must be positive: {}", self.mapping.mouse_speed);
        }

        // Smoothing
        if self.smoothing.ema_alpha <= 0.0 || self.smoothing.ema_alpha > 1.0 {
            anyhow::bail!(
                "ema_alpha must be in (0.0, 1.0]: {}",
                self.smoothing.ema_alpha
            );
        }
        if self.smoothing.deadzone_px < 0 {
            anyhow::bail!("deadzone_px cannot be negative: {}", self.smoothing.deadzone_px);
        }
        if self.smoothing.max_step_px < 1 {
            anyhow::bail!("max_step_px must be at least 1: {}", self.smoothing.max_step_px);
        }

        // Click and drag gestures
        if self.gestures.pinch_start_ratio <= 0.0 {
            anyhow::bail!(
                "gestures.pinch_start_ratio must be positive: {}",
                self.gestures.pinch_start_ratio
            );
        }
        if self.gestures.pinch_end_ratio <= self.gestures.pinch_start_ratio {
            anyhow::bail!(
                "gestures.pinch_end_ratio ({}) must exceed pinch_start_ratio ({})",
                self.gestures.pinch_end_ratio,
                self.gestures.pinch_start_ratio
            );
        }
        if self.gestures.pinch_drag_ms <= self.gestures.pinch_click_ms {
            anyhow::bail!(
                "pinch_drag_ms ({}) must exceed pinch_click_ms ({})",
                self.gestures.pinch_drag_ms,
                self.gestures.pinch_click_ms
            );
        }
        if self.gestures.click_max_move_px < 0 {
            anyhow::bail!(
                "click_max_move_px cannot be negative: {}",
                self.gestures.click_max_move_px
            );
        }

        // Scroll
        if self.scroll.pinch_start_ratio <= 0.0 {
            anyhow::bail!(
                "scroll.pinch_start_ratio must be positive: {}",
                self.scroll.pinch_start_ratio
            );
        }
        if self.scroll.pinch_end_ratio <= self.scroll.pinch_start_ratio {
            anyhow::bail!(
                "scroll.pinch_end_ratio ({}) must exceed pinch_start_ratio ({})",
                self.scroll.pinch_end_ratio,
                self.scroll.pinch_start_ratio
            );
        }
        if self.scroll.px_per_step < 1 {
            anyhow::bail!("px_per_step must be at least 1: {}", self.scroll.px_per_step);
        }
        if self.scroll.max_step < 1 {
            anyhow::bail!("scroll.max_step must be at least 1: {}", self.scroll.max_step);
        }

        // Display fallback geometry
        if self.display.width == 0 || self.display.height == 0 {
            anyhow::bail!(
                "Display dimensions must be positive: {}x{}",
                self.display.width,
                self.display.height
            );
        }

        // Logging
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => anyhow::bail!("Invalid log level: {}", other),
        }
        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            other => anyhow::bail!("Invalid log format: {}", other),
        }

        Ok(())
    }

    /// Override config with CLI arguments
    pub fn with_overrides(mut self, speed: Option<f64>, margin: Option<f64>) -> Self {
        if let Some(speed) = speed {
            self.mapping.mouse_speed = speed;
        }
        if let Some(margin) = margin {
            self.mapping.active_region_margin = margin;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.camera.width, 1920);
        assert_eq!(config.camera.height, 1080);
        assert_eq!(config.camera.process_every_n_frames, 3);
        assert!((config.mapping.map_gamma - 1.10).abs() < 1e-9);
        assert!((config.smoothing.ema_alpha - 0.14).abs() < 1e-9);
        assert!((config.gestures.pinch_start_ratio - 0.30).abs() < 1e-9);
        assert!((config.scroll.pinch_end_ratio - 0.42).abs() < 1e-9);
    }

    #[test]
    fn test_validation_rejects_bad_margin() {
        let mut config = Config::default();
        config.mapping.active_region_margin = 0.5;
        assert!(config.validate().is_err());

        config.mapping.active_region_margin = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_alpha() {
        let mut config = Config::default();
        config.smoothing.ema_alpha = 0.0;
        assert!(config.validate().is_err());

        config.smoothing.ema_alpha = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_hysteresis() {
        let mut config = Config::default();
        config.gestures.pinch_end_ratio = config.gestures.pinch_start_ratio - 0.05;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.scroll.pinch_end_ratio = config.scroll.pinch_start_ratio;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_drag_shorter_than_click() {
        let mut config = Config::default();
        config.gestures.pinch_drag_ms = config.gestures.pinch_click_ms;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_settings() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = Config::load(Path::new("/nonexistent/handmouse.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.camera.width, 1920);

        // Second call reads the file it just wrote
        let reloaded = Config::load_or_init(&path).unwrap();
        assert_eq!(reloaded.camera.width, config.camera.width);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.mapping.mouse_speed = 2.25;
        config.gestures.pinch_click_ms = 150;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!((loaded.mapping.mouse_speed - 2.25).abs() < 1e-9);
        assert_eq!(loaded.gestures.pinch_click_ms, 150);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[mapping]\nmouse_speed = 2.0\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!((config.mapping.mouse_speed - 2.0).abs() < 1e-9);
        // Untouched sections keep their defaults
        assert!((config.mapping.map_gamma - 1.10).abs() < 1e-9);
        assert_eq!(config.smoothing.deadzone_px, 3);
        assert_eq!(config.scroll.px_per_step, 22);
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default().with_overrides(Some(1.5), Some(0.1));
        assert!((config.mapping.mouse_speed - 1.5).abs() < 1e-9);
        assert!((config.mapping.active_region_margin - 0.1).abs() < 1e-9);

        let config = Config::default().with_overrides(None, None);
        assert!((config.mapping.mouse_speed - 3.0).abs() < 1e-9);
    }
}
