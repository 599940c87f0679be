//! enigo-backed pointer injection
//!
//! Drives the real OS cursor. Compiled in with the `inject` feature only,
//! since enigo links against display-server libraries.

use super::{InjectError, MouseButton, PointerSink, Result};
use crate::pointer::ScreenSize;
use enigo::{Axis, Button, Coordinate, Direction, Enigo, Mouse, Settings};
use tracing::warn;

/// Real pointer injection through enigo.
pub struct EnigoSink {
    enigo: Enigo,
}

impl EnigoSink {
    /// Connect to the display server.
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InjectError::Unavailable(format!("{:?}", e)))?;
        Ok(Self { enigo })
    }

    /// Detected size of the main display, if the backend reports one.
    pub fn display_size(&self) -> Option<ScreenSize> {
        match self.enigo.main_display() {
            Ok((w, h)) if w > 0 && h > 0 => Some(ScreenSize::new(w as u32, h as u32)),
            Ok((w, h)) => {
                warn!("Ignoring degenerate display size {}x{}", w, h);
                None
            }
            Err(e) => {
                warn!("Display size query failed: {:?}", e);
                None
            }
        }
    }
}

fn map_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
    }
}

impl PointerSink for EnigoSink {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| InjectError::Backend(format!("{:?}", e)))
    }

    fn click(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(map_button(button), Direction::Click)
            .map_err(|e| InjectError::Backend(format!("{:?}", e)))
    }

    fn press(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(map_button(button), Direction::Press)
            .map_err(|e| InjectError::Backend(format!("{:?}", e)))
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(map_button(button), Direction::Release)
            .map_err(|e| InjectError::Backend(format!("{:?}", e)))
    }

    fn scroll(&mut self, steps: i32) -> Result<()> {
        // enigo scrolls down for positive lengths; positive steps here mean up
        self.enigo
            .scroll(-steps, Axis::Vertical)
            .map_err(|e| InjectError::Backend(format!("{:?}", e)))
    }
}
