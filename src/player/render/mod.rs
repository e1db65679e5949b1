//! Rendering components for the terminal player.
//!
//! This module contains the terminal widget and its blinking cursor.

mod cursor;
mod terminal;

pub use cursor::{CursorBlink, CURSOR_GLYPH};
pub use terminal::{wrapped_height, TerminalView};
