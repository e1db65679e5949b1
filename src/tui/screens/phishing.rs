//! Level 1: flag the phishing email in a five-message inbox.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{
    intro_paragraph, render_tips, step_selection, tips_height, Context, Outcome, Screen, ScreenId,
    View,
};
use crate::quiz::announcer::Announcer;
use crate::quiz::data::Email;
use crate::quiz::game::Level;
use crate::quiz::sampler::phishing_round;
use crate::quiz::Challenge;

pub const NO_SELECTION: &str = "Please select an email to flag.";
pub const CORRECT: &str = "Correct! You spotted the phishing email.";
pub const WRONG: &str =
    "That email is legitimate. Check sender addresses, links and urgent language.";

pub struct PhishingScreen {
    emails: Vec<&'static Email>,
    selected: Option<usize>,
    solved: bool,
}

impl PhishingScreen {
    pub fn new(ctx: &mut Context<'_>) -> Result<Self> {
        Ok(Self::with_emails(phishing_round(&mut *ctx.rng)?))
    }

    pub fn with_emails(emails: Vec<&'static Email>) -> Self {
        Self {
            emails,
            selected: None,
            solved: false,
        }
    }

    pub fn emails(&self) -> &[&'static Email] {
        &self.emails
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    fn flag(&mut self, ctx: &mut Context<'_>) -> Outcome {
        let Some(email) = self.selected.and_then(|i| self.emails.get(i)) else {
            ctx.announcer.error(NO_SELECTION);
            return Outcome::Stay;
        };
        if email.is_phishing {
            ctx.announcer.success(CORRECT);
            self.solved = true;
            Outcome::Solved
        } else {
            ctx.announcer.error(WRONG);
            Outcome::Stay
        }
    }

    fn render_inbox(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let theme = view.theme;
        let items: Vec<ListItem> = self
            .emails
            .iter()
            .map(|email| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(email.sender, theme.text_style()),
                        Span::styled(format!("  {}", email.date), theme.text_secondary_style()),
                    ]),
                    Line::from(Span::styled(email.subject, theme.accent_style())),
                ])
            })
            .collect();
        let list = List::new(items)
            .highlight_style(theme.highlight_style())
            .highlight_symbol("▶ ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_style())
                    .title(" Inbox "),
            );
        let mut state = ListState::default().with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let theme = view.theme;
        let mut lines = Vec::new();
        match self.selected.and_then(|i| self.emails.get(i)) {
            Some(email) => {
                lines.push(Line::from(vec![
                    Span::styled("From: ", theme.text_secondary_style()),
                    Span::styled(email.sender, theme.text_style()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Subject: ", theme.text_secondary_style()),
                    Span::styled(email.subject, theme.text_style()),
                ]));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(email.content, theme.text_style())));
                if self.solved && email.is_phishing {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled("Red flags:", theme.warning_style())));
                    for clue in email.clues {
                        lines.push(Line::from(Span::styled(
                            format!("  • {}", clue),
                            theme.warning_style(),
                        )));
                    }
                }
            }
            None => lines.push(Line::from(Span::styled(
                "Select an email to read it.",
                theme.text_secondary_style(),
            ))),
        }
        let message = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(" Message "),
        );
        frame.render_widget(message, area);
    }
}

impl Screen for PhishingScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Level(Level::Phishing)
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context<'_>) -> Result<Outcome> {
        if key.code == KeyCode::Esc {
            return Ok(Outcome::Goto(ScreenId::Home));
        }
        if self.solved {
            return Ok(Outcome::Stay);
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = step_selection(self.selected, self.emails.len(), false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = step_selection(self.selected, self.emails.len(), true);
            }
            KeyCode::Enter => return Ok(self.flag(ctx)),
            KeyCode::Char('r') => {
                *self = Self::new(ctx)?;
                ctx.announcer.info("New emails loaded.");
            }
            _ => {}
        }
        Ok(Outcome::Stay)
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let tips = if view.game.show_hint {
            tips_height(Challenge::Phishing)
        } else {
            0
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(tips),
                Constraint::Min(5),
            ])
            .split(area);

        frame.render_widget(
            intro_paragraph(
                "Phishing Detection",
                "One of these emails is a phishing attempt. Select it and press Enter to flag it.",
                view.theme,
            ),
            rows[0],
        );
        if view.game.show_hint {
            render_tips(frame, rows[1], Challenge::Phishing, view.theme);
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);
        self.render_inbox(frame, columns[0], view);
        self.render_message(frame, columns[1], view);
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑/↓", "select"),
            ("Enter", "flag"),
            ("r", "new emails"),
            ("h", "tips"),
            ("Esc", "home"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::announcer::ToastKind;
    use crate::tui::screens::test_support::{key, render_text, Harness};

    fn screen(harness: &mut Harness) -> PhishingScreen {
        PhishingScreen::new(&mut harness.ctx()).unwrap()
    }

    fn select(screen: &mut PhishingScreen, harness: &mut Harness, index: usize) {
        for _ in 0..=index {
            screen.handle_key(key(KeyCode::Down), &mut harness.ctx()).unwrap();
        }
        assert_eq!(screen.selected(), Some(index));
    }

    #[test]
    fn round_has_one_phishing_email() {
        let mut harness = Harness::new();
        let screen = screen(&mut harness);
        assert_eq!(screen.emails().len(), 5);
        assert_eq!(screen.emails().iter().filter(|e| e.is_phishing).count(), 1);
    }

    #[test]
    fn flag_without_selection_is_an_error() {
        let mut harness = Harness::new();
        let mut screen = screen(&mut harness);
        let outcome = screen.handle_key(key(KeyCode::Enter), &mut harness.ctx()).unwrap();
        assert_eq!(outcome, Outcome::Stay);
        assert_eq!(harness.announcer.last(), Some((ToastKind::Error, NO_SELECTION)));
    }

    #[test]
    fn flagging_phishing_email_solves_level() {
        let mut harness = Harness::new();
        let mut screen = screen(&mut harness);
        let target = screen.emails().iter().position(|e| e.is_phishing).unwrap();
        select(&mut screen, &mut harness, target);

        let outcome = screen.handle_key(key(KeyCode::Enter), &mut harness.ctx()).unwrap();
        assert_eq!(outcome, Outcome::Solved);
        assert!(screen.is_solved());
        assert_eq!(harness.last_message(), Some(CORRECT));
    }

    #[test]
    fn flagging_legitimate_email_is_an_error() {
        let mut harness = Harness::new();
        let mut screen = screen(&mut harness);
        let decoy = screen.emails().iter().position(|e| !e.is_phishing).unwrap();
        select(&mut screen, &mut harness, decoy);

        let outcome = screen.handle_key(key(KeyCode::Enter), &mut harness.ctx()).unwrap();
        assert_eq!(outcome, Outcome::Stay);
        assert_eq!(harness.announcer.last(), Some((ToastKind::Error, WRONG)));
    }

    #[test]
    fn solved_screen_ignores_input() {
        let mut harness = Harness::new();
        let mut screen = screen(&mut harness);
        let target = screen.emails().iter().position(|e| e.is_phishing).unwrap();
        select(&mut screen, &mut harness, target);
        screen.handle_key(key(KeyCode::Enter), &mut harness.ctx()).unwrap();

        let outcome = screen.handle_key(key(KeyCode::Enter), &mut harness.ctx()).unwrap();
        assert_eq!(outcome, Outcome::Stay);
        assert_eq!(harness.announcer.messages.len(), 1);
    }

    #[test]
    fn new_round_clears_selection() {
        let mut harness = Harness::new();
        let mut screen = screen(&mut harness);
        select(&mut screen, &mut harness, 2);
        screen.handle_key(key(KeyCode::Char('r')), &mut harness.ctx()).unwrap();
        assert_eq!(screen.selected(), None);
    }

    #[test]
    fn tips_render_when_hint_is_on() {
        let mut harness = Harness::new();
        let screen = screen(&mut harness);
        assert!(!render_text(&screen, &harness.game).contains("Phishing Red Flags"));

        harness.game.toggle_hint();
        assert!(render_text(&screen, &harness.game).contains("Phishing Red Flags"));
    }
}
