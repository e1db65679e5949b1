//! Keyboard input handling for the terminal player.
//!
//! While lines are still being revealed the only key the player cares about
//! is skip. Once the prompt is open (interactive scripts) printable keys,
//! Backspace and Enter edit and submit the input line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::clock::Clock;
use crate::player::sequencer::Sequencer;
use crate::player::state::InputResult;

/// Key that skips the remaining reveal.
pub const SKIP_KEY: char = 's';

/// Handle a keyboard event for a running script.
///
/// Returns `InputResult::Ignored` for keys the player has no use for, so the
/// hosting screen can handle them.
pub fn handle_key_event<C: Clock>(key: KeyEvent, sequencer: &mut Sequencer<C>) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Ignored;
    }

    if sequencer.accepts_input() {
        return handle_prompt_key(key, sequencer);
    }

    match key.code {
        KeyCode::Char(SKIP_KEY) if !sequencer.is_finished() => {
            sequencer.skip();
            InputResult::Continue
        }
        _ => InputResult::Ignored,
    }
}

/// Edit or submit the input line.
fn handle_prompt_key<C: Clock>(key: KeyEvent, sequencer: &mut Sequencer<C>) -> InputResult {
    match key.code {
        KeyCode::Char(c) => {
            sequencer.input_char(c);
            InputResult::Continue
        }
        KeyCode::Backspace => {
            sequencer.input_backspace();
            InputResult::Continue
        }
        KeyCode::Enter => {
            // Blank input is rejected and leaves the prompt open
            sequencer.submit();
            InputResult::Continue
        }
        _ => InputResult::Ignored,
    }
}
