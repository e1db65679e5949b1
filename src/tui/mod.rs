//! TUI (Text User Interface) module for CyberQuest
//!
//! Terminal-based UI built on ratatui/crossterm: the full game, the
//! standalone script player, and the widgets and helpers they share.

pub mod app;
pub mod game_app;
pub mod help;
pub mod screens;
pub mod script_app;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use game_app::{Game, GameApp};
pub use script_app::{ScriptApp, ScriptPlayer};
pub use theme::current_theme;
