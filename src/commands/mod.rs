//! CLI subcommand handlers

pub mod check_password;
pub mod completions;
pub mod config;
pub mod play;
pub mod round;
pub mod script;
pub mod tips;
