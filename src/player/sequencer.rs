//! Line-by-line playback driver.
//!
//! The `Sequencer` turns a `Script` into a timed reveal: each line gets a
//! lead-in delay, is typed out by a `Typewriter`, and is followed by a pause
//! before the next line. After the last line the sequencer either waits for
//! one line of user input (interactive scripts) or holds briefly and then
//! completes. All waiting happens in a `TimerQueue` polled by `tick`, so the
//! whole thing runs on whatever `Clock` it is given.

use std::time::Duration;

use tracing::debug;

use super::clock::Clock;
use super::state::{is_blank, Phase, PlaybackState, PROMPT_MARKER};
use super::timers::TimerQueue;
use super::typewriter::{speed_from_millis, RevealRequest, Step, Typewriter};

/// Delays between the steps of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Wait before a line starts typing
    pub line_lead_in: Duration,
    /// Wait after a line resolves
    pub line_pause: Duration,
    /// Wait after the last pause before completing (non-interactive only)
    pub completion_hold: Duration,
}

impl Pacing {
    /// No waiting between steps; only per-character delays remain.
    pub fn immediate() -> Self {
        Self {
            line_lead_in: Duration::ZERO,
            line_pause: Duration::ZERO,
            completion_hold: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            line_lead_in: Duration::from_millis(400),
            line_pause: Duration::from_millis(300),
            completion_hold: Duration::from_millis(1000),
        }
    }
}

type Callback = Box<dyn FnMut()>;

/// Lines to play plus how to play them.
pub struct Script {
    lines: Vec<String>,
    speed: Duration,
    interactive: bool,
    on_complete: Option<Callback>,
}

impl Script {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            speed: Duration::from_millis(30),
            interactive: false,
            on_complete: None,
        }
    }

    /// Milliseconds per character. Zero or negative reveals instantly.
    pub fn speed(mut self, speed_ms: i64) -> Self {
        self.speed = speed_from_millis(speed_ms);
        self
    }

    /// Wait for a line of user input after the scripted lines.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Called once when the script completes.
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl std::fmt::Debug for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Script")
            .field("lines", &self.lines)
            .field("speed", &self.speed)
            .field("interactive", &self.interactive)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Pending steps of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    /// Lead-in for line n elapsed; start typing it
    Begin(usize),
    /// Next character of the current line is due
    Type,
    /// Pause after line n elapsed
    Advance(usize),
    /// Completion hold elapsed
    Finish,
}

/// State machine pacing a script line by line.
pub struct Sequencer<C: Clock> {
    clock: C,
    pacing: Pacing,
    timers: TimerQueue<Timer>,
    state: PlaybackState,
    speed: Duration,
    interactive: bool,
    typewriter: Option<Typewriter>,
    on_complete: Option<Callback>,
    notified: bool,
}

impl<C: Clock> Sequencer<C> {
    /// Create an idle sequencer with nothing loaded.
    pub fn new(clock: C, pacing: Pacing) -> Self {
        Self {
            clock,
            pacing,
            timers: TimerQueue::new(),
            state: PlaybackState::default(),
            speed: Duration::ZERO,
            interactive: false,
            typewriter: None,
            on_complete: None,
            notified: false,
        }
    }

    /// Load a script and start playing it.
    ///
    /// Any script already playing is abandoned first: its timers are
    /// cancelled and its completion callback is dropped without firing.
    pub fn play(&mut self, script: Script) {
        self.load(script);
        self.start();
    }

    /// Replace the current script without starting it.
    pub fn load(&mut self, script: Script) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "abandoning previous script");
        }
        self.state = PlaybackState::new(script.lines);
        self.speed = script.speed;
        self.interactive = script.interactive;
        self.on_complete = script.on_complete;
        self.typewriter = None;
        self.notified = false;
    }

    /// Start the loaded script. Does nothing unless the sequencer is idle.
    pub fn start(&mut self) {
        if self.state.phase != Phase::Idle {
            return;
        }
        if self.speed.is_zero() {
            debug!("zero speed, revealing script instantly");
            self.skip();
            return;
        }
        if self.state.lines.is_empty() {
            self.finish_lines();
            if !self.interactive {
                self.complete();
            }
            return;
        }
        let now = self.clock.now();
        self.enter_line(0, now);
    }

    /// Fire every timer that is due. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;
        while let Some((due, timer)) = self.timers.pop_due(now) {
            self.fire(timer, due);
            changed = true;
        }
        changed
    }

    /// Reveal everything at once and finish.
    ///
    /// Returns false (and changes nothing) if the script was already
    /// finished.
    pub fn skip(&mut self) -> bool {
        if self.state.phase.is_finished() {
            return false;
        }
        let cancelled = self.timers.cancel_all();
        debug!(cancelled, "skipping script");
        self.typewriter = None;
        self.state.reveal_all();
        self.state.skipped = true;
        self.finish_lines();
        if !self.interactive {
            self.complete();
        }
        true
    }

    /// Abandon playback: cancel all timers and drop the callback.
    ///
    /// The revealed output stays readable, but nothing is appended and no
    /// notification fires afterwards.
    pub fn teardown(&mut self) {
        let cancelled = self.timers.cancel_all();
        debug!(cancelled, "sequencer torn down");
        self.typewriter = None;
        self.on_complete = None;
    }

    // === Interactive input ===

    /// Whether the prompt is open for input.
    pub fn accepts_input(&self) -> bool {
        self.state.phase == Phase::AwaitingInput
    }

    /// Type one character at the prompt.
    pub fn input_char(&mut self, c: char) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.state.input.push(c);
        true
    }

    /// Delete the last character at the prompt.
    pub fn input_backspace(&mut self) -> bool {
        self.accepts_input() && self.state.input.pop().is_some()
    }

    /// Submit the prompt buffer. See `submit_text`.
    pub fn submit(&mut self) -> bool {
        let text = std::mem::take(&mut self.state.input);
        if self.submit_text(&text) {
            return true;
        }
        if self.accepts_input() {
            self.state.input = text;
        }
        false
    }

    /// Accept one line of user input and complete.
    ///
    /// Blank text, or text offered while the prompt is closed, is rejected.
    pub fn submit_text(&mut self, text: &str) -> bool {
        if !self.accepts_input() || is_blank(text) {
            return false;
        }
        self.state.displayed.push(format!("{}{}", PROMPT_MARKER, text));
        self.state.input.clear();
        self.complete();
        true
    }

    // === Accessors ===

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn displayed(&self) -> &[String] {
        &self.state.displayed
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase.is_finished()
    }

    pub fn is_skipped(&self) -> bool {
        self.state.skipped
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether the completion notification has fired.
    pub fn has_notified(&self) -> bool {
        self.notified
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    /// Partially typed text of the current line, if any is visible yet.
    pub fn partial(&self) -> Option<String> {
        self.typewriter
            .as_ref()
            .filter(|tw| tw.revealed() > 0)
            .map(Typewriter::partial)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Time until the next timer is due, if any is pending.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // === State machine ===

    fn fire(&mut self, timer: Timer, due: Duration) {
        match timer {
            Timer::Begin(index) => self.begin_line(index, due),
            Timer::Type => self.type_step(due),
            Timer::Advance(index) => self.advance_from(index, due),
            Timer::Finish => self.complete(),
        }
    }

    fn enter_line(&mut self, index: usize, at: Duration) {
        debug!(index, "revealing line");
        self.state.phase = Phase::RevealingLine(index);
        self.state.current_index = index;
        self.timers
            .schedule(at + self.pacing.line_lead_in, Timer::Begin(index));
    }

    fn begin_line(&mut self, index: usize, at: Duration) {
        let Some(line) = self.state.lines.get(index) else {
            return;
        };
        let request = RevealRequest {
            line: line.clone(),
            speed: self.speed,
        };
        self.typewriter = Some(Typewriter::new(request));
        self.type_step(at);
    }

    fn type_step(&mut self, at: Duration) {
        let Some(typewriter) = self.typewriter.as_mut() else {
            return;
        };
        match typewriter.step() {
            Step::Typed => {
                let next = at + typewriter.speed();
                self.timers.schedule(next, Timer::Type);
            }
            Step::Resolved(text) => {
                self.typewriter = None;
                self.line_resolved(text, at);
            }
        }
    }

    fn line_resolved(&mut self, text: String, at: Duration) {
        let index = self.state.current_index;
        if !self.state.push_displayed(text) {
            debug!(index, "dropping blank line");
        }
        self.state.phase = Phase::PausedBetweenLines(index);
        self.timers
            .schedule(at + self.pacing.line_pause, Timer::Advance(index));
    }

    fn advance_from(&mut self, index: usize, at: Duration) {
        let next = index + 1;
        if next < self.state.lines.len() {
            self.enter_line(next, at);
            return;
        }
        if self.interactive {
            self.finish_lines();
        } else {
            self.state.current_index = self.state.lines.len();
            self.timers
                .schedule(at + self.pacing.completion_hold, Timer::Finish);
        }
    }

    /// All scripted lines are out; open the prompt or wait to complete.
    fn finish_lines(&mut self) {
        self.state.current_index = self.state.lines.len();
        if self.interactive {
            debug!("awaiting input");
            self.state.phase = Phase::AwaitingInput;
        }
    }

    fn complete(&mut self) {
        self.state.phase = Phase::Complete;
        if self.notified {
            return;
        }
        self.notified = true;
        debug!(lines = self.state.displayed.len(), "script complete");
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::player::clock::ManualClock;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    fn sequencer() -> (ManualClock, Sequencer<ManualClock>) {
        let clock = ManualClock::new();
        let seq = Sequencer::new(clock.clone(), Pacing::default());
        (clock, seq)
    }

    fn run(clock: &ManualClock, seq: &mut Sequencer<ManualClock>, ms: u64) {
        clock.advance_ms(ms);
        seq.tick();
    }

    #[test]
    fn new_sequencer_is_idle() {
        let (_, seq) = sequencer();
        assert_eq!(seq.phase(), Phase::Idle);
        assert!(seq.displayed().is_empty());
        assert_eq!(seq.pending_timers(), 0);
    }

    #[test]
    fn start_enters_first_line_immediately() {
        let (_, mut seq) = sequencer();
        seq.play(Script::new(["Hello"]).speed(10));
        assert_eq!(seq.phase(), Phase::RevealingLine(0));
        assert_eq!(seq.time_until_next(), Some(Duration::from_millis(400)));
    }

    #[test]
    fn leading_blank_is_dropped() {
        let (clock, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(
            Script::new(["", "Welcome", "Begin"])
                .speed(10)
                .on_complete(callback),
        );

        run(&clock, &mut seq, 10_000);

        assert_eq!(seq.displayed(), ["Welcome", "Begin"]);
        assert_eq!(seq.phase(), Phase::Complete);
        assert_eq!(count.get(), 1);
        assert_eq!(seq.pending_timers(), 0);
    }

    #[test]
    fn follows_reference_timeline() {
        let (clock, mut seq) = sequencer();
        seq.play(Script::new(["", "Welcome", "Begin"]).speed(10));

        // blank line resolves at 400, pause until 700, lead-in until 1100
        run(&clock, &mut seq, 700);
        assert_eq!(seq.phase(), Phase::RevealingLine(1));
        assert!(seq.displayed().is_empty());

        // chars at 1100, 1110, 1120, 1130
        clock.set(Duration::from_millis(1135));
        seq.tick();
        assert_eq!(seq.partial().as_deref(), Some("Welc"));

        // 7 chars resolve at 1170
        clock.set(Duration::from_millis(1170));
        seq.tick();
        assert_eq!(seq.phase(), Phase::PausedBetweenLines(1));
        assert_eq!(seq.displayed(), ["Welcome"]);

        // "Begin" resolves at 1470 + 400 + 50 = 1920, then 300 pause
        clock.set(Duration::from_millis(2220));
        seq.tick();
        assert_eq!(seq.phase(), Phase::PausedBetweenLines(2));
        assert_eq!(seq.state().current_index, 3);

        // completion hold of one second
        clock.set(Duration::from_millis(3219));
        seq.tick();
        assert!(!seq.has_notified());
        clock.set(Duration::from_millis(3220));
        seq.tick();
        assert_eq!(seq.phase(), Phase::Complete);
    }

    #[test]
    fn partial_is_none_before_typing_starts() {
        let (clock, mut seq) = sequencer();
        seq.play(Script::new(["abc"]).speed(10));
        run(&clock, &mut seq, 399);
        assert_eq!(seq.partial(), None);
        run(&clock, &mut seq, 1);
        assert_eq!(seq.partial().as_deref(), Some("a"));
    }

    #[test]
    fn skip_reveals_everything_and_notifies_once() {
        let (clock, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(
            Script::new(["one", "", "two", "three"])
                .speed(20)
                .on_complete(callback),
        );
        run(&clock, &mut seq, 500);

        assert!(seq.skip());
        assert_eq!(seq.displayed(), ["one", "two", "three"]);
        assert_eq!(seq.phase(), Phase::Complete);
        assert!(seq.is_skipped());
        assert_eq!(seq.pending_timers(), 0);
        assert_eq!(count.get(), 1);

        run(&clock, &mut seq, 60_000);
        assert_eq!(seq.displayed(), ["one", "two", "three"]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn skip_is_idempotent() {
        let (_, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(Script::new(["a", "b"]).speed(5).on_complete(callback));

        assert!(seq.skip());
        let after_first = seq.state().clone();
        assert!(!seq.skip());

        assert_eq!(seq.state(), &after_first);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn skip_during_completion_hold_notifies_once() {
        let (clock, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(Script::new(["x"]).speed(1).on_complete(callback));

        // x resolves at 401, pause ends at 701, hold runs until 1701
        run(&clock, &mut seq, 800);
        assert_eq!(seq.phase(), Phase::PausedBetweenLines(0));
        assert!(seq.skip());
        run(&clock, &mut seq, 5_000);

        assert_eq!(count.get(), 1);
        assert_eq!(seq.displayed(), ["x"]);
    }

    #[test]
    fn zero_speed_matches_skip() {
        let script = ["", "alpha", "  ", "beta"];

        let (_, mut instant) = sequencer();
        let (instant_count, callback) = counter();
        instant.play(Script::new(script).speed(0).on_complete(callback));

        let (_, mut skipped) = sequencer();
        let (skip_count, callback) = counter();
        skipped.play(Script::new(script).speed(25).on_complete(callback));
        skipped.skip();

        assert_eq!(instant.state(), skipped.state());
        assert_eq!(instant_count.get(), 1);
        assert_eq!(skip_count.get(), 1);
        assert_eq!(instant.pending_timers(), 0);
    }

    #[test]
    fn negative_speed_is_instant() {
        let (_, mut seq) = sequencer();
        seq.play(Script::new(["a", "b"]).speed(-5));
        assert_eq!(seq.phase(), Phase::Complete);
        assert_eq!(seq.displayed(), ["a", "b"]);
    }

    #[test]
    fn empty_script_completes_without_timers() {
        let (_, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(Script::new(Vec::<String>::new()).speed(30).on_complete(callback));

        assert_eq!(seq.phase(), Phase::Complete);
        assert!(seq.displayed().is_empty());
        assert_eq!(seq.pending_timers(), 0);
        assert_eq!(count.get(), 1);
        assert!(!seq.skip());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn interactive_waits_for_input_before_notifying() {
        let (clock, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(
            Script::new(["Report ready."])
                .speed(1)
                .interactive(true)
                .on_complete(callback),
        );

        run(&clock, &mut seq, 10_000);
        assert_eq!(seq.phase(), Phase::AwaitingInput);
        assert!(seq.is_finished());
        assert_eq!(count.get(), 0);
        assert_eq!(seq.pending_timers(), 0);

        assert!(!seq.submit_text("   "));
        assert_eq!(count.get(), 0);

        for c in "agent".chars() {
            seq.input_char(c);
        }
        assert!(seq.submit());
        assert_eq!(seq.displayed(), ["Report ready.", "> agent"]);
        assert_eq!(seq.phase(), Phase::Complete);
        assert_eq!(count.get(), 1);
        assert!(seq.input().is_empty());
    }

    #[test]
    fn interactive_skip_opens_prompt() {
        let (_, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(
            Script::new(["a", "b"])
                .speed(10)
                .interactive(true)
                .on_complete(callback),
        );

        assert!(seq.skip());
        assert_eq!(seq.phase(), Phase::AwaitingInput);
        assert_eq!(count.get(), 0);
        assert!(!seq.skip());

        assert!(seq.submit_text("done"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn rejected_submit_keeps_buffer() {
        let (_, mut seq) = sequencer();
        seq.play(Script::new(["a"]).speed(0).interactive(true));
        seq.input_char(' ');
        assert!(!seq.submit());
        assert_eq!(seq.input(), " ");
        assert!(seq.input_backspace());
        assert!(!seq.input_backspace());
    }

    #[test]
    fn input_is_ignored_while_revealing() {
        let (_, mut seq) = sequencer();
        seq.play(Script::new(["a"]).speed(10).interactive(true));
        assert!(!seq.input_char('x'));
        assert!(!seq.submit_text("hello"));
        assert!(seq.input().is_empty());
    }

    #[test]
    fn teardown_cancels_pending_reveal() {
        let (clock, mut seq) = sequencer();
        let (count, callback) = counter();
        seq.play(Script::new(["first", "second"]).speed(10).on_complete(callback));
        run(&clock, &mut seq, 420);

        seq.teardown();
        assert_eq!(seq.pending_timers(), 0);
        run(&clock, &mut seq, 60_000);

        assert!(seq.displayed().is_empty());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn loading_new_script_abandons_old_one() {
        let (clock, mut seq) = sequencer();
        let (old_count, old_callback) = counter();
        seq.play(Script::new(["old"]).speed(10).on_complete(old_callback));
        run(&clock, &mut seq, 405);

        seq.play(Script::new(["new"]).speed(10));
        run(&clock, &mut seq, 60_000);

        assert_eq!(seq.displayed(), ["new"]);
        assert_eq!(old_count.get(), 0);
    }

    #[test]
    fn immediate_pacing_finishes_after_typing_time() {
        let clock = ManualClock::new();
        let mut seq = Sequencer::new(clock.clone(), Pacing::immediate());
        seq.play(Script::new(["ab", "cd"]).speed(10));

        clock.advance_ms(39);
        seq.tick();
        assert!(!seq.is_finished());
        clock.advance_ms(1);
        seq.tick();
        assert_eq!(seq.phase(), Phase::Complete);
        assert_eq!(seq.displayed(), ["ab", "cd"]);
    }
}
