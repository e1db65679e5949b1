//! Standalone terminal player for a text file.
//!
//! Plays arbitrary lines through the same sequencer and widget the game's
//! briefing uses. Handy for checking pacing without playing through the
//! game.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tracing::info;

use super::app::status_footer::render_footer;
use super::app::{is_interrupt, App, TuiApp};
use super::theme::{current_theme, Theme};
use crate::config::PlayerConfig;
use crate::player::clock::{Clock, MonotonicClock};
use crate::player::input::handle_key_event;
use crate::player::render::{CursorBlink, TerminalView};
use crate::player::{InputResult, Phase, Script, Sequencer};

/// Sequencer plus the key handling around it.
pub struct ScriptPlayer<C: Clock> {
    sequencer: Sequencer<C>,
    blink: CursorBlink,
    live_typing: bool,
    title: String,
    quit: bool,
}

impl<C: Clock + Clone> ScriptPlayer<C> {
    pub fn new(clock: C, player: &PlayerConfig, script: Script, title: impl Into<String>) -> Self {
        let blink = CursorBlink::new(player.cursor_blink(), clock.now());
        let mut sequencer = Sequencer::new(clock, player.pacing());
        sequencer.play(script);
        Self {
            sequencer,
            blink,
            live_typing: player.live_typing,
            title: title.into(),
            quit: false,
        }
    }
}

impl<C: Clock> ScriptPlayer<C> {
    pub fn sequencer(&self) -> &Sequencer<C> {
        &self.sequencer
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_interrupt(&key) {
            self.quit = true;
            return;
        }
        if self.sequencer.phase() == Phase::Complete {
            self.quit = true;
            return;
        }
        if handle_key_event(key, &mut self.sequencer) == InputResult::Continue {
            return;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            info!(phase = ?self.sequencer.phase(), "script player closed early");
            self.quit = true;
        }
    }

    pub fn tick(&mut self) -> bool {
        let now = self.sequencer.clock().now();
        let advanced = self.sequencer.tick();
        let blinked = self.blink.tick(now);
        advanced || blinked
    }

    pub fn next_wakeup(&self) -> Option<Duration> {
        let now = self.sequencer.clock().now();
        [
            self.sequencer.time_until_next(),
            self.blink.time_until_toggle(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        match self.sequencer.phase() {
            Phase::Complete => vec![("any key", "exit")],
            Phase::AwaitingInput => vec![("Enter", "submit"), ("Esc", "quit")],
            _ => vec![("s", "skip"), ("q", "quit")],
        }
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());
        let view = TerminalView::from_sequencer(&self.sequencer, self.live_typing, theme)
            .cursor(self.blink.is_visible())
            .title(&self.title);
        frame.render_widget(view, rows[0]);
        render_footer(frame, rows[1], &self.footer_keys());
    }
}

/// `ScriptPlayer` on the real terminal.
pub struct ScriptApp {
    app: App,
    player: ScriptPlayer<MonotonicClock>,
    theme: Theme,
}

impl ScriptApp {
    pub fn new(
        player_config: &PlayerConfig,
        script: Script,
        title: impl Into<String>,
        tick_rate: Duration,
    ) -> Result<Self> {
        let player = ScriptPlayer::new(MonotonicClock::new(), player_config, script, title);
        let app = App::new(tick_rate)?;
        Ok(Self {
            app,
            player,
            theme: current_theme(),
        })
    }

    /// Lines shown when the player closed.
    pub fn displayed(&self) -> &[String] {
        self.player.sequencer().displayed()
    }
}

impl TuiApp for ScriptApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.player.handle_key(key);
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let player = &self.player;
        let theme = &self.theme;
        self.app.draw(|frame| player.render(frame, theme))
    }

    fn tick(&mut self) -> Result<bool> {
        Ok(self.player.tick())
    }

    fn next_wakeup(&self) -> Option<Duration> {
        self.player.next_wakeup()
    }

    fn should_quit(&self) -> bool {
        self.player.should_quit()
    }
}
