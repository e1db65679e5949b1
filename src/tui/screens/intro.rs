//! Briefing typed out in the terminal widget before level 1.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::{Context, Outcome, Screen, ScreenId, View};
use crate::config::PlayerConfig;
use crate::player::clock::Clock;
use crate::player::input::handle_key_event;
use crate::player::render::{CursorBlink, TerminalView};
use crate::player::{InputResult, Script, Sequencer};
use crate::quiz::data::intro_lines;
use crate::quiz::game::Level;

pub struct IntroScreen<C: Clock> {
    sequencer: Sequencer<C>,
    blink: CursorBlink,
    live_typing: bool,
}

impl<C: Clock + Clone> IntroScreen<C> {
    pub fn new(clock: C, player: &PlayerConfig) -> Self {
        let blink = CursorBlink::new(player.cursor_blink(), clock.now());
        let mut sequencer = Sequencer::new(clock, player.pacing());
        sequencer.play(Script::new(intro_lines()).speed(player.typing_speed_ms));
        Self {
            sequencer,
            blink,
            live_typing: player.live_typing,
        }
    }
}

impl<C: Clock> IntroScreen<C> {
    pub fn sequencer(&self) -> &Sequencer<C> {
        &self.sequencer
    }

    pub fn is_finished(&self) -> bool {
        self.sequencer.is_finished()
    }
}

impl<C: Clock + 'static> Screen for IntroScreen<C> {
    fn id(&self) -> ScreenId {
        ScreenId::Level(Level::Intro)
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context<'_>) -> Result<Outcome> {
        if handle_key_event(key, &mut self.sequencer) == InputResult::Continue {
            return Ok(Outcome::Stay);
        }
        Ok(match key.code {
            KeyCode::Enter if self.sequencer.is_finished() => {
                Outcome::Goto(ScreenId::Level(Level::Phishing))
            }
            KeyCode::Esc => Outcome::Goto(ScreenId::Home),
            _ => Outcome::Stay,
        })
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let theme = view.theme;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let terminal = TerminalView::from_sequencer(&self.sequencer, self.live_typing, theme)
            .cursor(self.blink.is_visible())
            .title("cyberquest@training: ~");
        frame.render_widget(terminal, rows[0]);

        let hint = if self.sequencer.is_finished() {
            Span::styled("[ Enter ]  Start Challenge", theme.accent_bold_style())
        } else {
            Span::styled("[ s ]  Skip Intro", theme.warning_style())
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), rows[1]);
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        if self.sequencer.is_finished() {
            vec![("Enter", "start challenge"), ("?", "help"), ("q", "quit")]
        } else {
            vec![("s", "skip intro"), ("?", "help"), ("q", "quit")]
        }
    }

    fn tick(&mut self) -> bool {
        let now = self.sequencer.clock().now();
        let advanced = self.sequencer.tick();
        let blinked = self.blink.tick(now);
        advanced || blinked
    }

    fn next_wakeup(&self) -> Option<Duration> {
        let now = self.sequencer.clock().now();
        [
            self.sequencer.time_until_next(),
            self.blink.time_until_toggle(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn teardown(&mut self) {
        self.sequencer.teardown();
    }
}
