//! Mission debrief.
//!
//! Plays the final report as an interactive script: once the lines are out
//! the player signs the report at the prompt, and the next key after that
//! returns to the title screen.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use tracing::info;

use super::{Context, Outcome, Screen, ScreenId, View};
use crate::config::PlayerConfig;
use crate::player::clock::Clock;
use crate::player::input::handle_key_event;
use crate::player::render::{CursorBlink, TerminalView};
use crate::player::{InputResult, Phase, Script, Sequencer};
use crate::quiz::game::{format_time, GameState, Level, CHALLENGE_COUNT};

pub const SIGN_PROMPT: &str = "Sign the incident report to finish:";

/// Lines of the final report for `game` as of `now`.
///
/// Spacing rides on trailing newlines since blank entries are never shown.
pub fn debrief_lines(game: &GameState, now: Duration) -> Vec<String> {
    vec![
        "MISSION ACCOMPLISHED\n".to_string(),
        "The intruder has been locked out of the network.".to_string(),
        format!("Final score: {}", game.score),
        format!("Time: {}", format_time(game.elapsed(now).as_secs())),
        format!(
            "Challenges completed: {}/{}\n",
            game.challenges_completed(),
            CHALLENGE_COUNT
        ),
        SIGN_PROMPT.to_string(),
    ]
}

pub struct VictoryScreen<C: Clock> {
    sequencer: Sequencer<C>,
    blink: CursorBlink,
    live_typing: bool,
}

impl<C: Clock + Clone> VictoryScreen<C> {
    pub fn new(clock: C, player: &PlayerConfig, game: &GameState) -> Self {
        let now = clock.now();
        let blink = CursorBlink::new(player.cursor_blink(), now);
        let mut sequencer = Sequencer::new(clock, player.pacing());
        let score = game.score;
        sequencer.play(
            Script::new(debrief_lines(game, now))
                .speed(player.typing_speed_ms)
                .interactive(true)
                .on_complete(move || info!(score, "incident report signed")),
        );
        Self {
            sequencer,
            blink,
            live_typing: player.live_typing,
        }
    }
}

impl<C: Clock> VictoryScreen<C> {
    pub fn sequencer(&self) -> &Sequencer<C> {
        &self.sequencer
    }
}

impl<C: Clock + 'static> Screen for VictoryScreen<C> {
    fn id(&self) -> ScreenId {
        ScreenId::Level(Level::Victory)
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context<'_>) -> Result<Outcome> {
        if self.sequencer.phase() == Phase::Complete {
            return Ok(Outcome::Goto(ScreenId::Home));
        }
        if handle_key_event(key, &mut self.sequencer) == InputResult::Continue {
            return Ok(Outcome::Stay);
        }
        Ok(match key.code {
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
            .title("cyberquest@debrief: ~");
        frame.render_widget(terminal, rows[0]);

        let hint = match self.sequencer.phase() {
            Phase::Complete => Span::styled("Press any key to return home", theme.accent_bold_style()),
            Phase::AwaitingInput => Span::styled("Type your name and press Enter", theme.warning_style()),
            _ => Span::styled("[ s ]  Skip", theme.text_secondary_style()),
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), rows[1]);
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        match self.sequencer.phase() {
            Phase::Complete => vec![("any key", "home"), ("q", "quit")],
            Phase::AwaitingInput => vec![("Enter", "sign"), ("Esc", "home")],
            _ => vec![("s", "skip"), ("Esc", "home")],
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

    fn captures_text(&self) -> bool {
        self.sequencer.accepts_input()
    }

    fn teardown(&mut self) {
        self.sequencer.teardown();
    }
}
