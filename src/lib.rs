//! CyberQuest - terminal cybersecurity awareness quiz
//!
//! - `player`: the typewriter engine (clock, timers, sequencer, terminal widget)
//! - `quiz`: challenge content, round sampling, password checker, game state
//! - `tui`: the game screens and the event loop
//! - `config`: TOML configuration
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod player;
pub mod quiz;
pub mod tui;

pub use config::Config;
pub use tui::theme;
