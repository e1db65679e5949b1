//! End-to-end playback properties of the sequencer.

use super::helpers::{manual_sequencer, play_counting, run_to_end};
use cyberquest::player::{Phase, Script};

// ============================================================================
// Full playback
// ============================================================================

#[test]
fn blank_lines_are_dropped_and_completion_fires_once() {
    let (clock, mut seq, count) = play_counting(&["", "Welcome", "Begin"], 10, false);
    run_to_end(&clock, &mut seq);

    assert_eq!(seq.displayed(), ["Welcome", "Begin"]);
    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(count.get(), 1);
    assert_eq!(seq.pending_timers(), 0);
}

#[test]
fn lines_reveal_on_schedule() {
    let (clock, mut seq, count) = play_counting(&["Welcome", "Begin"], 10, false);

    // lead-in 400 + 7 chars * 10
    clock.set(std::time::Duration::from_millis(469));
    seq.tick();
    assert!(seq.displayed().is_empty());
    clock.advance_ms(1);
    seq.tick();
    assert_eq!(seq.displayed(), ["Welcome"]);
    assert_eq!(seq.phase(), Phase::PausedBetweenLines(0));

    // pause 300 + lead-in 400 + 5 chars * 10
    clock.advance_ms(750);
    seq.tick();
    assert_eq!(seq.displayed(), ["Welcome", "Begin"]);

    // pause 300 + hold 1000
    clock.advance_ms(1299);
    seq.tick();
    assert_eq!(count.get(), 0);
    clock.advance_ms(1);
    seq.tick();
    assert_eq!(count.get(), 1);
}

#[test]
fn whitespace_inside_lines_is_preserved() {
    let (clock, mut seq, _) = play_counting(&["  indented\ttab  "], 1, false);
    run_to_end(&clock, &mut seq);
    assert_eq!(seq.displayed(), ["  indented\ttab  "]);
}

#[test]
fn empty_script_completes_without_timers() {
    let (_, seq, count) = play_counting(&[], 10, false);
    assert_eq!(seq.phase(), Phase::Complete);
    assert!(seq.displayed().is_empty());
    assert_eq!(seq.pending_timers(), 0);
    assert_eq!(count.get(), 1);
}

// ============================================================================
// Skip
// ============================================================================

#[test]
fn skip_after_first_line_reveals_the_rest() {
    let (clock, mut seq, count) = play_counting(&["one", "two", "three"], 10, false);
    clock.advance_ms(430);
    seq.tick();
    assert_eq!(seq.displayed(), ["one"]);

    assert!(seq.skip());
    assert_eq!(seq.displayed(), ["one", "two", "three"]);
    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(seq.pending_timers(), 0);
    assert_eq!(count.get(), 1);

    clock.advance_ms(60_000);
    assert!(!seq.tick());
    assert_eq!(seq.displayed().len(), 3);
    assert_eq!(count.get(), 1);
}

#[test]
fn skip_is_idempotent() {
    let (_, mut seq, count) = play_counting(&["a", "b"], 10, false);
    assert!(seq.skip());
    assert!(!seq.skip());
    assert_eq!(seq.displayed(), ["a", "b"]);
    assert_eq!(count.get(), 1);
}

#[test]
fn zero_and_negative_speed_behave_like_skip() {
    for speed in [0, -40] {
        let (_, seq, count) = play_counting(&["a", "", "b"], speed, false);
        assert_eq!(seq.displayed(), ["a", "b"]);
        assert_eq!(seq.phase(), Phase::Complete);
        assert_eq!(count.get(), 1);
    }
}

// ============================================================================
// Interactive mode
// ============================================================================

#[test]
fn interactive_notifies_only_after_non_blank_submit() {
    let (clock, mut seq, count) = play_counting(&["Who are you?"], 5, true);
    run_to_end(&clock, &mut seq);
    assert_eq!(seq.phase(), Phase::AwaitingInput);
    assert_eq!(count.get(), 0);

    assert!(!seq.submit_text("   "));
    assert_eq!(count.get(), 0);

    assert!(seq.submit_text("operator"));
    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(seq.displayed(), ["Who are you?", "> operator"]);
    assert_eq!(count.get(), 1);

    assert!(!seq.submit_text("again"));
    assert_eq!(count.get(), 1);
}

#[test]
fn interactive_skip_opens_prompt_without_notifying() {
    let (_, mut seq, count) = play_counting(&["a", "b"], 10, true);
    seq.skip();
    assert!(seq.accepts_input());
    assert_eq!(count.get(), 0);
}

#[test]
fn submit_before_prompt_is_rejected() {
    let (_, mut seq, _) = play_counting(&["a"], 10, true);
    assert!(!seq.submit_text("early"));
    assert!(!seq.input_char('x'));
}

// ============================================================================
// Teardown and reload
// ============================================================================

#[test]
fn teardown_mid_reveal_stops_everything() {
    let (clock, mut seq, count) = play_counting(&["first", "second"], 10, false);
    clock.advance_ms(480);
    seq.tick();
    assert_eq!(seq.displayed(), ["first"]);

    seq.teardown();
    assert_eq!(seq.pending_timers(), 0);
    clock.advance_ms(60_000);
    seq.tick();
    assert_eq!(seq.displayed(), ["first"]);
    assert_eq!(count.get(), 0);
}

#[test]
fn playing_a_new_script_abandons_the_old_one() {
    let (clock, mut seq, count) = play_counting(&["old one", "old two"], 10, false);
    clock.advance_ms(500);
    seq.tick();

    seq.play(Script::new(["new"]).speed(10));
    run_to_end(&clock, &mut seq);
    assert_eq!(seq.displayed(), ["new"]);
    assert_eq!(count.get(), 0);
}

#[test]
fn idle_sequencer_has_nothing_pending() {
    let (_, seq) = manual_sequencer();
    assert_eq!(seq.phase(), Phase::Idle);
    assert_eq!(seq.time_until_next(), None);
}
