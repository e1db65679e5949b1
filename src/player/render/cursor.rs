//! Blinking cursor for the terminal widget.
//!
//! Purely cosmetic and independent of playback: skipping or completing a
//! script does not touch the blink.

use std::time::Duration;

/// Glyph drawn while the cursor is visible.
pub const CURSOR_GLYPH: &str = "█";

/// Toggles visibility every `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
    interval: Duration,
    next_toggle: Duration,
}

impl CursorBlink {
    /// Create a visible cursor whose first toggle is due at `now + interval`.
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self {
            visible: true,
            interval,
            next_toggle: now + interval,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply every toggle due by `now`. Returns true if visibility changed.
    ///
    /// A zero interval disables blinking and keeps the cursor visible.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.interval.is_zero() {
            return false;
        }
        let before = self.visible;
        while self.next_toggle <= now {
            self.visible = !self.visible;
            self.next_toggle += self.interval;
        }
        before != self.visible
    }

    /// Time until the next toggle, for event loop timeouts.
    pub fn time_until_toggle(&self, now: Duration) -> Option<Duration> {
        if self.interval.is_zero() {
            return None;
        }
        Some(self.next_toggle.saturating_sub(now))
    }
}
