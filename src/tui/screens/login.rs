//! Login form.
//!
//! Both fields must be filled in; nothing is checked beyond that.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::info;

use super::{Context, Outcome, Screen, ScreenId, View};
use crate::quiz::game::Level;
use crate::tui::ui::centered_fixed;

pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Glyph shown in place of each password character.
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginScreen {
    username: String,
    password: String,
    focus: Field,
    error: Option<&'static str>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn error(&self) -> Option<&str> {
        self.error
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Field::Username => Field::Password,
            Field::Password => Field::Username,
        };
    }

    fn submit(&mut self) -> Outcome {
        if self.username.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS);
            return Outcome::Stay;
        }
        info!(username = %self.username, "logged in");
        Outcome::Goto(ScreenId::Level(Level::Intro))
    }

    fn field_line(&self, label: &str, field: Field, view: &View<'_>) -> Line<'static> {
        let theme = view.theme;
        let value = match field {
            Field::Username => self.username.clone(),
            Field::Password => MASK_CHAR.to_string().repeat(self.password.chars().count()),
        };
        let focused = self.focus == field;
        let label_style = if focused {
            theme.accent_bold_style()
        } else {
            theme.text_secondary_style()
        };
        let mut spans = vec![
            Span::styled(format!("{:<10}", label), label_style),
            Span::styled(value, theme.text_style()),
        ];
        if focused {
            spans.push(Span::styled("█", theme.accent_style()));
        }
        Line::from(spans)
    }
}

impl Screen for LoginScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Login
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context<'_>) -> Result<Outcome> {
        match key.code {
            KeyCode::Esc => return Ok(Outcome::Goto(ScreenId::Home)),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.switch_focus(),
            KeyCode::Enter => return Ok(self.submit()),
            KeyCode::Backspace => {
                self.focused_mut().pop();
            }
            KeyCode::Char(c) => {
                self.focused_mut().push(c);
                self.error = None;
            }
            _ => {}
        }
        Ok(Outcome::Stay)
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let theme = view.theme;
        let form_area = centered_fixed(50, 12, area);
        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(Span::styled(" CyberQuest ", theme.accent_bold_style()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter your credentials to begin",
                theme.text_secondary_style(),
            ))
            .alignment(Alignment::Center),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(self.field_line("Username", Field::Username, view)),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(self.field_line("Password", Field::Password, view)),
            rows[2],
        );
        if let Some(error) = self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error, theme.error_style())),
                rows[3],
            );
        }
        frame.render_widget(
            Paragraph::new(Span::styled("[ Enter ]  Login", theme.accent_style()))
                .alignment(Alignment::Center),
            rows[4],
        );
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Tab", "switch field"), ("Enter", "login"), ("Esc", "back")]
    }

    fn captures_text(&self) -> bool {
        true
    }
}
