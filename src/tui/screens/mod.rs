//! Game screens
//!
//! Each screen owns its own state and reports what should happen next as an
//! `Outcome`; the game driver applies it (switching screens, awarding
//! points, scheduling the advance to the next level). Screens never touch
//! the terminal directly and never sleep, so they are driven the same way
//! by the event loop and by tests.

pub mod home;
pub mod insider;
pub mod intro;
pub mod login;
pub mod password;
pub mod phishing;
pub mod victory;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyEvent;
use rand::RngCore;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::Config;
use crate::quiz::announcer::Announcer;
use crate::quiz::game::{GameState, Level};
use crate::quiz::Challenge;
use crate::tui::theme::Theme;

pub use home::HomeScreen;
pub use insider::InsiderScreen;
pub use intro::IntroScreen;
pub use login::LoginScreen;
pub use password::PasswordScreen;
pub use phishing::PhishingScreen;
pub use victory::VictoryScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Home,
    Login,
    Level(Level),
}

/// What the driver should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    Goto(ScreenId),
    /// The current challenge was solved
    Solved,
    Quit,
}

/// Mutable game services a screen may use while handling input.
pub struct Context<'a> {
    pub game: &'a mut GameState,
    pub announcer: &'a mut dyn Announcer,
    pub rng: &'a mut dyn RngCore,
    pub config: &'a Config,
}

/// Read-only state a screen may show.
pub struct View<'a> {
    pub game: &'a GameState,
    pub theme: &'a Theme,
    pub now: Duration,
}

pub trait Screen {
    fn id(&self) -> ScreenId;

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context<'_>) -> Result<Outcome>;

    fn render(&self, frame: &mut Frame, area: Rect, view: &View<'_>);

    /// Key hints for the footer.
    fn footer_keys(&self) -> Vec<(&'static str, &'static str)>;

    /// Fire due timers. Returns true if anything changed.
    fn tick(&mut self) -> bool {
        false
    }

    fn next_wakeup(&self) -> Option<Duration> {
        None
    }

    /// Whether printable keys go to a text field, so global shortcuts like
    /// `q` must not fire.
    fn captures_text(&self) -> bool {
        false
    }

    /// Cancel pending timers before the screen is dropped.
    fn teardown(&mut self) {}
}

/// Move a list selection one step, starting at the first or last item.
pub fn step_selection(selected: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (selected, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1).min(len - 1),
        (Some(i), false) => i.saturating_sub(1),
    })
}

/// Render a challenge's tips panel.
pub fn render_tips(frame: &mut Frame, area: Rect, challenge: Challenge, theme: &Theme) {
    let lines: Vec<Line> = challenge
        .tips()
        .iter()
        .map(|tip| Line::from(vec![Span::styled("• ", theme.warning_style()), Span::raw(*tip)]))
        .collect();
    let panel = Paragraph::new(lines)
        .style(theme.text_style())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.warning_style())
                .title(Span::styled(
                    format!(" {} ", challenge.tips_title()),
                    theme.warning_style(),
                )),
        );
    frame.render_widget(panel, area);
}

/// Height of the tips panel for `challenge`, including borders.
pub fn tips_height(challenge: Challenge) -> u16 {
    u16::try_from(challenge.tips().len() + 2).unwrap_or(u16::MAX)
}

/// One-line instruction under a challenge title.
pub fn intro_paragraph<'a>(title: &'a str, text: &'a str, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(title, theme.accent_bold_style())),
        Line::from(Span::styled(text, theme.text_secondary_style())),
    ])
    .wrap(Wrap { trim: true })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_selection_starts_at_ends() {
        assert_eq!(step_selection(None, 5, true), Some(0));
        assert_eq!(step_selection(None, 5, false), Some(4));
    }

    #[test]
    fn step_selection_clamps() {
        assert_eq!(step_selection(Some(4), 5, true), Some(4));
        assert_eq!(step_selection(Some(0), 5, false), Some(0));
        assert_eq!(step_selection(Some(2), 5, true), Some(3));
    }

    #[test]
    fn step_selection_on_empty_list_is_none() {
        assert_eq!(step_selection(None, 0, true), None);
    }

    #[test]
    fn tips_height_includes_borders() {
        assert_eq!(tips_height(Challenge::Phishing), 8);
        assert_eq!(tips_height(Challenge::Insider), 7);
    }
}
