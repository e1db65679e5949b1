//! Player state management
//!
//! Contains the `PlaybackState` owned by the sequencer, the `Phase` state
//! machine, and small shared types used across player modules.

/// Result of offering a key event to the terminal player.
///
/// Returned by the terminal key handler so the hosting screen knows whether
/// it should process the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// The player consumed the key
    Continue,
    /// The player had no use for the key
    Ignored,
}

/// Where the sequencer currently is in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing started yet
    #[default]
    Idle,
    /// Line `n` is being revealed (including its lead-in delay)
    RevealingLine(usize),
    /// Line `n` resolved; waiting before the next line or completion
    PausedBetweenLines(usize),
    /// All lines shown; waiting for one line of user input
    AwaitingInput,
    /// Finished; the completion notification has fired
    Complete,
}

impl Phase {
    /// True once every scripted line is visible.
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::AwaitingInput | Phase::Complete)
    }
}

/// Whether a line is a blank separator (empty or whitespace-only).
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Prefix put in front of accepted user input.
pub const PROMPT_MARKER: &str = "> ";

/// Playback cursor and revealed output for one script.
///
/// Created fresh for every script the sequencer loads and mutated only by
/// the sequencer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    // === Script ===
    /// Lines to reveal, in order
    pub lines: Vec<String>,
    /// Index of the line being revealed (== lines.len() once all are done)
    pub current_index: usize,

    // === Output ===
    /// Revealed non-blank lines, in order
    pub displayed: Vec<String>,
    /// Whether playback was cut short by a skip
    pub skipped: bool,
    /// Current state machine phase
    pub phase: Phase,

    // === Interactive input ===
    /// Text typed at the prompt but not yet submitted
    pub input: String,
}

impl PlaybackState {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Append a revealed line to the output.
    ///
    /// Blank text is discarded. A trailing blank entry is replaced instead of
    /// kept alongside the new line. Returns whether anything was appended.
    pub fn push_displayed(&mut self, text: String) -> bool {
        if is_blank(&text) {
            return false;
        }
        match self.displayed.last_mut() {
            Some(last) if is_blank(last) => *last = text,
            _ => self.displayed.push(text),
        }
        true
    }

    /// Replace the output with every non-blank line, in order.
    pub fn reveal_all(&mut self) {
        self.displayed = self
            .lines
            .iter()
            .filter(|line| !is_blank(line))
            .cloned()
            .collect();
        self.current_index = self.lines.len();
    }

    /// Number of non-blank lines in the script.
    pub fn non_blank_count(&self) -> usize {
        self.lines.iter().filter(|line| !is_blank(line)).count()
    }
}
