//! Title screen with the three challenge cards.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{Context, Outcome, Screen, ScreenId, View};
use crate::tui::theme::Theme;

const CARDS: [(&str, &str); 3] = [
    (
        "Phishing Detection",
        "Learn to identify suspicious emails and protect yourself from phishing attacks.",
    ),
    (
        "Password Security",
        "Master the art of creating and maintaining strong, secure passwords.",
    ),
    (
        "Insider Threat Detection",
        "Develop skills to identify and prevent insider threats in your organization.",
    ),
];

#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    fn title_lines(theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(Span::styled("C Y B E R Q U E S T", theme.accent_bold_style())),
            Line::from(Span::styled("Escape the Hacker", theme.text_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Embark on an exciting journey to master cybersecurity skills. \
                 Face three challenging levels and prove your expertise in detecting threats.",
                theme.text_secondary_style(),
            )),
        ]
    }
}

impl Screen for HomeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Home
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context<'_>) -> Result<Outcome> {
        Ok(match key.code {
            KeyCode::Enter => Outcome::Goto(ScreenId::Login),
            _ => Outcome::Stay,
        })
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let theme = view.theme;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Self::title_lines(theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(title, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[1]);
        for ((heading, body), column) in CARDS.iter().zip(columns.iter()) {
            let card = Paragraph::new(*body)
                .style(theme.text_style())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.accent_style())
                        .title(Span::styled(format!(" {} ", heading), theme.accent_bold_style())),
                );
            frame.render_widget(card, *column);
        }

        let start = Paragraph::new(Line::from(vec![
            Span::styled("[ Enter ] ", theme.highlight_style()),
            Span::styled(" Start Challenge", theme.accent_style()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(start, rows[2]);
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Enter", "start"), ("?", "help"), ("q", "quit")]
    }
}
