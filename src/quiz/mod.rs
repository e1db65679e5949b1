//! Quiz content and rules
//!
//! - `data`: the static email, password and employee pools plus tips
//! - `sampler`: draws five-item rounds from the pools
//! - `password`: the password strength checker
//! - `announcer`: success/error/info notifications
//! - `game`: score, levels and elapsed time

pub mod announcer;
pub mod data;
pub mod game;
pub mod password;
pub mod sampler;

pub use announcer::{Announcer, RecordingAnnouncer, Toast, ToastKind, ToastQueue};
pub use game::{format_time, GameState, Level};
pub use password::{validate_password, PasswordReport, Strength};
pub use sampler::SampleError;

/// The three challenges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Challenge {
    Phishing,
    Password,
    Insider,
}

impl Challenge {
    pub fn level(self) -> Level {
        match self {
            Challenge::Phishing => Level::Phishing,
            Challenge::Password => Level::Password,
            Challenge::Insider => Level::InsiderThreat,
        }
    }

    /// Tips shown by the hint panel.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Challenge::Phishing => data::PHISHING_TIPS,
            Challenge::Password => data::PASSWORD_TIPS,
            Challenge::Insider => data::INSIDER_THREAT_TIPS,
        }
    }

    /// Heading of the hint panel.
    pub fn tips_title(self) -> &'static str {
        match self {
            Challenge::Phishing => "Phishing Red Flags",
            Challenge::Password => "Password Best Practices",
            Challenge::Insider => "What to Look For",
        }
    }
}
