//! Pointer injection sinks
//!
//! A sink owns the OS-facing verbs the pipeline can emit. The trace sink
//! logs them and is always available; the enigo-backed sink performs real
//! injection and is compiled in with the `inject` feature.

#[cfg(feature = "inject")]
mod enigo;

#[cfg(feature = "inject")]
pub use self::enigo::EnigoSink;

use crate::gesture::GestureEvents;
use thiserror::Error;
use tracing::debug;

/// Result type for injection operations
pub type Result<T> = std::result::Result<T, InjectError>;

/// Injection error types
#[derive(Error, Debug)]
pub enum InjectError {
    /// Backend failed to initialize
    #[error("Injection backend unavailable: {0}")]
    Unavailable(String),

    /// A verb failed at the backend
    #[error("Injection failed: {0}")]
    Backend(String),
}

/// Mouse buttons the pipeline can operate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
}

/// OS-facing pointer verbs.
pub trait PointerSink {
    /// Move the cursor to an absolute screen position.
    fn move_to(&mut self, x: i32, y: i32) -> Result<()>;

    /// Click a button (press and release).
    fn click(&mut self, button: MouseButton) -> Result<()>;

    /// Press and hold a button.
    fn press(&mut self, button: MouseButton) -> Result<()>;

    /// Release a held button.
    fn release(&mut self, button: MouseButton) -> Result<()>;

    /// Scroll vertically by whole wheel steps; positive scrolls up.
    fn scroll(&mut self, steps: i32) -> Result<()>;
}

/// Apply one frame of pipeline output to a sink.
///
/// The cursor settles before any button verb, scroll fires before clicks,
/// and a drag release comes last, after any drag start from the other
/// pinch.
pub fn dispatch(
    sink: &mut dyn PointerSink,
    cursor: Option<(i32, i32)>,
    events: GestureEvents,
) -> Result<()> {
    if let Some((x, y)) = cursor {
        sink.move_to(x, y)?;
    }
    if events.scroll != 0 {
        sink.scroll(events.scroll)?;
    }
    if events.left_click {
        sink.click(MouseButton::Left)?;
    }
    if events.right_click {
        sink.click(MouseButton::Right)?;
    }
    if events.drag_start {
        sink.press(MouseButton::Left)?;
    }
    if events.drag_end {
        sink.release(MouseButton::Left)?;
    }
    Ok(())
}

/// Sink that logs every verb without touching the OS.
///
/// Used for dry runs and as the default when real injection is not
/// compiled in.
#[derive(Debug, Default)]
pub struct TraceSink;

impl PointerSink for TraceSink {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        debug!("pointer: move to ({}, {})", x, y);
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> Result<()> {
        debug!("pointer: click {:?}", button);
        Ok(())
    }

    fn press(&mut self, button: MouseButton) -> Result<()> {
        debug!("pointer: press {:?}", button);
        Ok(())
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        debug!("pointer: release {:?}", button);
        Ok(())
    }

    fn scroll(&mut self, steps: i32) -> Result<()> {
        debug!("pointer: scroll {}", steps);
        Ok(())
    }
}

/// One recorded sink verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkVerb {
    /// Cursor moved to an absolute position
    MoveTo(i32, i32),
    /// Button clicked
    Click(MouseButton),
    /// Button pressed
    Press(MouseButton),
    /// Button released
    Release(MouseButton),
    /// Wheel scrolled
    Scroll(i32),
}

/// Sink that records verbs in dispatch order, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Recorded verbs, oldest first
    pub verbs: Vec<SinkVerb>,
}

impl PointerSink for RecordingSink {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.verbs.push(SinkVerb::MoveTo(x, y));
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> Result<()> {
        self.verbs.push(SinkVerb::Click(button));
        Ok(())
    }

    fn press(&mut self, button: MouseButton) -> Result<()> {
        self.verbs.push(SinkVerb::Press(button));
        Ok(())
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        self.verbs.push(SinkVerb::Release(button));
        Ok(())
    }

    fn scroll(&mut self, steps: i32) -> Result<()> {
        self.verbs.push(SinkVerb::Scroll(steps));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_order() {
        let mut sink = RecordingSink::default();
        let events = GestureEvents {
            right_click: true,
            drag_end: true,
            scroll: -2,
            ..Default::default()
        };

        dispatch(&mut sink, Some((100, 200)), events).unwrap();

        assert_eq!(
            sink.verbs,
            vec![
                SinkVerb::MoveTo(100, 200),
                SinkVerb::Scroll(-2),
                SinkVerb::Click(MouseButton::Right),
                SinkVerb::Release(MouseButton::Left),
            ]
        );
    }

    #[test]
    fn test_dispatch_empty_frame_is_silent() {
        let mut sink = RecordingSink::default();
        dispatch(&mut sink, None, GestureEvents::default()).unwrap();
        assert!(sink.verbs.is_empty());
    }

    #[test]
    fn test_dispatch_left_click() {
        let mut sink = RecordingSink::default();
        let events = GestureEvents {
            left_click: true,
            ..Default::default()
        };

        dispatch(&mut sink, None, events).unwrap();
        assert_eq!(sink.verbs, vec![SinkVerb::Click(MouseButton::Left)]);
    }

    #[test]
    fn test_dispatch_drag_cycle() {
        let mut sink = RecordingSink::default();

        let start = GestureEvents {
            drag_start: true,
            ..Default::default()
        };
        dispatch(&mut sink, Some((10, 20)), start).unwrap();

        let end = GestureEvents {
            drag_end: true,
            ..Default::default()
        };
        dispatch(&mut sink, None, end).unwrap();

        assert_eq!(
            sink.verbs,
            vec![
                SinkVerb::MoveTo(10, 20),
                SinkVerb::Press(MouseButton::Left),
                SinkVerb::Release(MouseButton::Left),
            ]
        );
    }

    #[test]
    fn test_trace_sink_accepts_all_verbs() {
        let mut sink = TraceSink;
        assert!(sink.move_to(1, 2).is_ok());
        assert!(sink.click(MouseButton::Left).is_ok());
        assert!(sink.press(MouseButton::Right).is_ok());
        assert!(sink.release(MouseButton::Right).is_ok());
        assert!(sink.scroll(-3).is_ok());
    }
}
