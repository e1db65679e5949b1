//! Line renderer: reveals one line character by character.
//!
//! The typewriter does not schedule anything itself. Its owner calls
//! `step` once immediately and then once per `speed` interval until it
//! resolves. An n-character line therefore resolves `n * speed` after the
//! first step, and a zero speed resolves on the first step.

use std::time::Duration;

/// One line plus the pace at which to reveal it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealRequest {
    pub line: String,
    /// Delay between characters. Zero means reveal instantly.
    pub speed: Duration,
}

impl RevealRequest {
    /// Build a request from a signed millisecond speed.
    ///
    /// Negative speeds are treated as zero (instant reveal).
    pub fn new(line: impl Into<String>, speed_ms: i64) -> Self {
        Self {
            line: line.into(),
            speed: speed_from_millis(speed_ms),
        }
    }

    pub fn is_instant(&self) -> bool {
        self.speed.is_zero()
    }
}

/// Clamp a signed millisecond speed into a `Duration`.
pub fn speed_from_millis(speed_ms: i64) -> Duration {
    Duration::from_millis(speed_ms.max(0) as u64)
}

/// Result of advancing the typewriter once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// One more character is visible; step again after `speed`.
    Typed,
    /// The whole line is revealed.
    Resolved(String),
}

/// Incremental reveal of a single line.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    speed: Duration,
    resolved: bool,
}

impl Typewriter {
    pub fn new(request: RevealRequest) -> Self {
        Self {
            chars: request.line.chars().collect(),
            revealed: 0,
            speed: request.speed,
            resolved: false,
        }
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Advance by one character, or resolve if nothing is left.
    ///
    /// Stepping an already resolved typewriter resolves again with the same
    /// text.
    pub fn step(&mut self) -> Step {
        if self.speed.is_zero() || self.revealed >= self.chars.len() {
            self.revealed = self.chars.len();
            self.resolved = true;
            return Step::Resolved(self.partial());
        }
        self.revealed += 1;
        Step::Typed
    }

    /// Text revealed so far.
    pub fn partial(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Number of characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Time from the first step until the line resolves.
    pub fn total_duration(&self) -> Duration {
        self.speed * self.chars.len() as u32
    }

    /// Step until resolved and return the text, ignoring pacing.
    pub fn finish(mut self) -> String {
        loop {
            if let Step::Resolved(text) = self.step() {
                return text;
            }
        }
    }
}
