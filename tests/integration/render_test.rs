//! Rendering the terminal widget and the game through ratatui's TestBackend.

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, Terminal};

use super::helpers::{buffer_text, play_counting, run_to_end};
use cyberquest::player::render::TerminalView;
use cyberquest::player::ManualClock;
use cyberquest::quiz::Level;
use cyberquest::theme::Theme;
use cyberquest::tui::screens::ScreenId;
use cyberquest::tui::Game;
use cyberquest::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render_game(game: &Game<ManualClock>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| game.render(frame)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn terminal_widget_scrolls_to_newest_line() {
    let lines: Vec<String> = (1..=20).map(|i| format!("line {i:02}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let (clock, mut seq, _) = play_counting(&refs, 1, false);
    run_to_end(&clock, &mut seq);

    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(30, 7)).unwrap();
    terminal
        .draw(|frame| {
            let view = TerminalView::from_sequencer(&seq, false, &theme).title("log");
            frame.render_widget(view, frame.area());
        })
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains(" log "));
    assert!(text.contains("line 20"));
    assert!(text.contains("line 16"));
    assert!(!text.contains("line 15"));
}

#[test]
fn word_wrapped_prose_keeps_prompt_in_view() {
    let prose = "abcdef ".repeat(10);
    let (clock, mut seq, _) = play_counting(&[&prose, &prose, "LASTLINE"], 1, true);
    run_to_end(&clock, &mut seq);
    assert!(seq.accepts_input());

    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(12, 10)).unwrap();
    terminal
        .draw(|frame| {
            let view = TerminalView::from_sequencer(&seq, false, &theme);
            frame.render_widget(view, frame.area());
        })
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    let rows: Vec<&str> = text.lines().collect();

    assert!(text.contains("LASTLINE"));
    assert!(rows[rows.len() - 2].contains("> "));
    assert!(rows[rows.len() - 3].contains("LASTLINE"));
}

#[test]
fn live_typing_shows_partial_line() {
    let (clock, mut seq, _) = play_counting(&["abcdef"], 10, false);
    clock.advance_ms(420);
    seq.tick();

    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
    terminal
        .draw(|frame| {
            let view = TerminalView::from_sequencer(&seq, true, &theme).cursor(true);
            frame.render_widget(view, frame.area());
        })
        .unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("abc█"));
}

#[test]
fn game_walks_from_title_to_first_challenge() {
    let clock = ManualClock::new();
    let mut game = Game::new(
        clock.clone(),
        Config::default(),
        Theme::default(),
        ScreenId::Home,
        StdRng::seed_from_u64(1),
    )
    .unwrap();
    assert!(render_game(&game).contains("Escape the Hacker"));

    game.handle_key(key(KeyCode::Enter)).unwrap();
    for c in "neo".chars() {
        game.handle_key(key(KeyCode::Char(c))).unwrap();
    }
    game.handle_key(key(KeyCode::Tab)).unwrap();
    for c in "secret".chars() {
        game.handle_key(key(KeyCode::Char(c))).unwrap();
    }
    game.handle_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(game.screen_id(), ScreenId::Level(Level::Intro));

    clock.advance_ms(500);
    game.tick().unwrap();
    assert!(render_game(&game).contains("Skip Intro"));

    game.handle_key(key(KeyCode::Char('s'))).unwrap();
    let text = render_game(&game);
    assert!(text.contains("Start Challenge"));

    game.handle_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(game.screen_id(), ScreenId::Level(Level::Phishing));
    let text = render_game(&game);
    assert!(text.contains("Level 1: Phishing Detection"));
    assert!(text.contains("Inbox"));
}

#[test]
fn tips_toggle_on_challenge_screen() {
    let clock = ManualClock::new();
    let mut game = Game::new(
        clock,
        Config::default(),
        Theme::default(),
        ScreenId::Level(Level::InsiderThreat),
        StdRng::seed_from_u64(4),
    )
    .unwrap();
    assert!(!render_game(&game).contains("What to Look For"));
    game.handle_key(key(KeyCode::Char('h'))).unwrap();
    assert!(render_game(&game).contains("What to Look For"));
}
