//! Input handling for the terminal player.

mod keyboard;

pub use keyboard::{handle_key_event, SKIP_KEY};
