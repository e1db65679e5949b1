//! Typewriter terminal player
//!
//! Reveals scripted text line by line, the way a terminal types it out:
//!
//! - `typewriter`: reveals one line character by character
//! - `sequencer`: paces a whole script, with skip and completion handling
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `clock` / `timers`: injectable time source and the timer queue every
//!   delay lives in
//! - `state`: PlaybackState, Phase and shared types (InputResult)
//! - `input/`: Keyboard handling (skip, prompt editing)
//! - `render/`: Terminal widget and cursor blink
//!
//! # Usage
//!
//! ```
//! use cyberquest::player::{ManualClock, Pacing, Phase, Script, Sequencer};
//!
//! let clock = ManualClock::new();
//! let mut sequencer = Sequencer::new(clock.clone(), Pacing::default());
//! sequencer.play(Script::new(["", "Welcome", "Begin"]).speed(10));
//!
//! clock.advance_ms(10_000);
//! sequencer.tick();
//! assert_eq!(sequencer.phase(), Phase::Complete);
//! assert_eq!(sequencer.displayed(), ["Welcome", "Begin"]);
//! ```

pub mod clock;
pub mod input;
pub mod render;
pub mod sequencer;
pub mod state;
pub mod timers;
pub mod typewriter;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use sequencer::{Pacing, Script, Sequencer};
pub use state::{InputResult, Phase, PlaybackState};
pub use timers::{TimerId, TimerQueue};
pub use typewriter::{RevealRequest, Step, Typewriter};
