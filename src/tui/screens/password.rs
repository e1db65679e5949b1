//! Level 2: password audit.
//!
//! Two stages. First the player marks every weak password in a five-account
//! audit; the marked set has to match the weak set exactly. Then they type a
//! new password, which is checked live and accepted only once it passes
//! every rule.

use std::collections::BTreeSet;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::login::MASK_CHAR;
use super::{
    intro_paragraph, render_tips, step_selection, tips_height, Context, Outcome, Screen, ScreenId,
    View,
};
use crate::quiz::announcer::Announcer;
use crate::quiz::data::PasswordEntry;
use crate::quiz::game::Level;
use crate::quiz::password::{validate_password, Strength};
use crate::quiz::sampler::password_round;
use crate::quiz::Challenge;
use crate::tui::theme::Theme;

pub const NOTHING_MARKED: &str = "Mark at least one weak password first.";
pub const AUDIT_PASSED: &str = "Correct! You found every weak password. Now create a strong one.";
pub const AUDIT_FAILED: &str =
    "Not quite. Some weak passwords were missed or strong ones were marked.";
pub const PASSWORD_ACCEPTED: &str = "Great! That password meets every requirement.";
pub const PASSWORD_REJECTED: &str = "That password does not meet all requirements yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Identify,
    Create,
    Done,
}

pub struct PasswordScreen {
    entries: Vec<&'static PasswordEntry>,
    cursor: Option<usize>,
    marked: BTreeSet<usize>,
    stage: Stage,
    new_password: String,
}

impl PasswordScreen {
    pub fn new(ctx: &mut Context<'_>) -> Result<Self> {
        Ok(Self::with_entries(password_round(&mut *ctx.rng)?))
    }

    pub fn with_entries(entries: Vec<&'static PasswordEntry>) -> Self {
        Self {
            entries,
            cursor: None,
            marked: BTreeSet::new(),
            stage: Stage::Identify,
            new_password: String::new(),
        }
    }

    pub fn entries(&self) -> &[&'static PasswordEntry] {
        &self.entries
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn marked(&self) -> &BTreeSet<usize> {
        &self.marked
    }

    fn weak_set(&self) -> BTreeSet<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_weak())
            .map(|(i, _)| i)
            .collect()
    }

    fn toggle_mark(&mut self) {
        if self.cursor.is_none() {
            self.cursor = step_selection(None, self.entries.len(), true);
        }
        if let Some(i) = self.cursor {
            if !self.marked.remove(&i) {
                self.marked.insert(i);
            }
        }
    }

    fn submit_audit(&mut self, ctx: &mut Context<'_>) {
        if self.marked.is_empty() {
            ctx.announcer.error(NOTHING_MARKED);
        } else if self.marked == self.weak_set() {
            ctx.announcer.success(AUDIT_PASSED);
            self.stage = Stage::Create;
        } else {
            ctx.announcer.error(AUDIT_FAILED);
        }
    }

    fn handle_identify_key(&mut self, key: KeyEvent, ctx: &mut Context<'_>) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = step_selection(self.cursor, self.entries.len(), false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = step_selection(self.cursor, self.entries.len(), true);
            }
            KeyCode::Char(' ') => self.toggle_mark(),
            KeyCode::Enter => self.submit_audit(ctx),
            KeyCode::Char('r') => {
                *self = Self::new(ctx)?;
                ctx.announcer.info("New accounts loaded.");
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_create_key(&mut self, key: KeyEvent, ctx: &mut Context<'_>) -> Outcome {
        match key.code {
            KeyCode::Char(c) => self.new_password.push(c),
            KeyCode::Backspace => {
                self.new_password.pop();
            }
            KeyCode::Enter => {
                if validate_password(&self.new_password).is_valid {
                    ctx.announcer.success(PASSWORD_ACCEPTED);
                    self.stage = Stage::Done;
                    return Outcome::Solved;
                }
                ctx.announcer.error(PASSWORD_REJECTED);
            }
            _ => {}
        }
        Outcome::Stay
    }

    fn render_audit(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let revealed = self.stage != Stage::Identify;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mark = if self.marked.contains(&i) { "[x] " } else { "[ ] " };
                let mut spans = vec![
                    Span::styled(mark, theme.warning_style()),
                    Span::styled(format!("{:<16}", entry.username), theme.text_secondary_style()),
                    Span::styled(entry.password, theme.text_style()),
                ];
                if revealed {
                    if let Some(reason) = entry.weakness_reason {
                        spans.push(Span::styled(format!("  ({})", reason), theme.error_style()));
                    }
                }
                ListItem::new(Line::from(spans))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(theme.highlight_style())
            .highlight_symbol("▶ ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.accent_style())
                    .title(" Account Audit "),
            );
        let mut state = ListState::default().with_selected(if revealed { None } else { self.cursor });
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_create(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let report = validate_password(&self.new_password);
        let strength_style = match report.strength {
            Strength::Strong => theme.success_style(),
            Strength::Medium => theme.warning_style(),
            Strength::Weak => theme.error_style(),
        };
        let masked: String = std::iter::repeat(MASK_CHAR)
            .take(self.new_password.chars().count())
            .collect();

        let mut lines = vec![
            Line::from(vec![
                Span::styled("New password: ", theme.text_secondary_style()),
                Span::styled(masked, theme.text_style()),
                Span::styled("█", theme.accent_style()),
            ]),
            Line::from(vec![
                Span::styled("Strength: ", theme.text_secondary_style()),
                Span::styled(report.strength.to_string(), strength_style),
            ]),
            Line::from(""),
        ];
        if report.is_valid {
            lines.push(Line::from(Span::styled(
                "✔ Meets all requirements",
                theme.success_style(),
            )));
        } else {
            lines.extend(report.feedback.iter().map(|message| {
                Line::from(Span::styled(format!("• {}", message), theme.error_style()))
            }));
        }
        let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Create a Strong Password "),
        );
        frame.render_widget(panel, area);
    }
}

impl Screen for PasswordScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Level(Level::Password)
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context<'_>) -> Result<Outcome> {
        if key.code == KeyCode::Esc {
            return Ok(Outcome::Goto(ScreenId::Home));
        }
        match self.stage {
            Stage::Identify => {
                self.handle_identify_key(key, ctx)?;
                Ok(Outcome::Stay)
            }
            Stage::Create => Ok(self.handle_create_key(key, ctx)),
            Stage::Done => Ok(Outcome::Stay),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let theme = view.theme;
        let tips = if view.game.show_hint {
            tips_height(Challenge::Password)
        } else {
            0
        };
        let create = if self.stage == Stage::Identify { 0 } else { 10 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(tips),
                Constraint::Length(7),
                Constraint::Length(create),
                Constraint::Min(0),
            ])
            .split(area);

        let instructions = match self.stage {
            Stage::Identify => "Mark every weak password with Space, then press Enter to submit.",
            Stage::Create | Stage::Done => {
                "Type a password that passes every rule and press Enter."
            }
        };
        frame.render_widget(
            intro_paragraph("Password Security", instructions, theme),
            rows[0],
        );
        if view.game.show_hint {
            render_tips(frame, rows[1], Challenge::Password, theme);
        }
        self.render_audit(frame, rows[2], theme);
        if self.stage != Stage::Identify {
            self.render_create(frame, rows[3], theme);
        }
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        match self.stage {
            Stage::Identify => vec![
                ("↑/↓", "select"),
                ("Space", "mark weak"),
                ("Enter", "submit"),
                ("r", "new accounts"),
                ("h", "tips"),
                ("Esc", "home"),
            ],
            Stage::Create | Stage::Done => vec![("Enter", "submit password"), ("Esc", "home")],
        }
    }

    fn captures_text(&self) -> bool {
        self.stage == Stage::Create
    }
}
