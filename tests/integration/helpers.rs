//! Shared helpers for the integration tests.

use std::time::Duration;

use cyberquest::player::{ManualClock, Pacing, Script, Sequencer};
use ratatui::buffer::Buffer;

/// A sequencer on a manual clock with the default pacing.
pub fn manual_sequencer() -> (ManualClock, Sequencer<ManualClock>) {
    let clock = ManualClock::new();
    let sequencer = Sequencer::new(clock.clone(), Pacing::default());
    (clock, sequencer)
}

/// Play `lines` at `speed` ms/char and count completion notifications.
pub fn play_counting(
    lines: &[&str],
    speed: i64,
    interactive: bool,
) -> (ManualClock, Sequencer<ManualClock>, std::rc::Rc<std::cell::Cell<u32>>) {
    let (clock, mut sequencer) = manual_sequencer();
    let count = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = count.clone();
    sequencer.play(
        Script::new(lines.iter().copied())
            .speed(speed)
            .interactive(interactive)
            .on_complete(move || counter.set(counter.get() + 1)),
    );
    (clock, sequencer, count)
}

/// Advance in small steps, ticking after each, until nothing is pending.
pub fn run_to_end(clock: &ManualClock, sequencer: &mut Sequencer<ManualClock>) {
    for _ in 0..100_000 {
        match sequencer.time_until_next() {
            Some(delay) => {
                clock.advance(delay.max(Duration::from_millis(1)));
                sequencer.tick();
            }
            None => return,
        }
    }
    panic!("sequencer never settled");
}

/// Text content of a rendered buffer, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
