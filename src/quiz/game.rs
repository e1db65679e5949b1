//! Score and progress for one play-through.
//!
//! Nothing here outlives the process: a new game always starts at zero.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Intro,
    Phishing,
    Password,
    InsiderThreat,
    Victory,
}

impl Level {
    /// The level that follows this one, if any.
    pub fn next(self) -> Option<Level> {
        match self {
            Level::Intro => Some(Level::Phishing),
            Level::Phishing => Some(Level::Password),
            Level::Password => Some(Level::InsiderThreat),
            Level::InsiderThreat => Some(Level::Victory),
            Level::Victory => None,
        }
    }

    /// 1-based number of a challenge level.
    pub fn number(self) -> Option<u8> {
        match self {
            Level::Phishing => Some(1),
            Level::Password => Some(2),
            Level::InsiderThreat => Some(3),
            Level::Intro | Level::Victory => None,
        }
    }

    pub fn is_challenge(self) -> bool {
        self.number().is_some()
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Intro => "Briefing",
            Level::Phishing => "Phishing Detection",
            Level::Password => "Password Security",
            Level::InsiderThreat => "Insider Threat Detection",
            Level::Victory => "Mission Complete",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "Level {}: {}", n, self.title()),
            None => f.write_str(self.title()),
        }
    }
}

/// Number of challenge levels.
pub const CHALLENGE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub completed: BTreeSet<Level>,
    pub level: Level,
    pub show_hint: bool,
    /// Clock reading when the game started
    pub started_at: Duration,
}

impl GameState {
    pub fn new(started_at: Duration) -> Self {
        Self {
            score: 0,
            completed: BTreeSet::new(),
            level: Level::Intro,
            show_hint: false,
            started_at,
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Mark a level solved. Returns false if it already was.
    pub fn complete_level(&mut self, level: Level) -> bool {
        let newly = self.completed.insert(level);
        if newly {
            info!(%level, score = self.score, "level complete");
        }
        newly
    }

    pub fn is_completed(&self, level: Level) -> bool {
        self.completed.contains(&level)
    }

    /// Enter a level. Hints are hidden again on every level change.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.show_hint = false;
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    pub fn challenges_completed(&self) -> usize {
        self.completed.iter().filter(|l| l.is_challenge()).count()
    }
}

/// Render whole seconds as `MM:SS`.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
