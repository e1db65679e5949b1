//! Level 3: pick the insider threat out of five employee profiles.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{
    intro_paragraph, render_tips, step_selection, tips_height, Context, Outcome, Screen, ScreenId,
    View,
};
use crate::quiz::announcer::Announcer;
use crate::quiz::data::{AccessLevel, Employee};
use crate::quiz::game::Level;
use crate::quiz::sampler::insider_round;
use crate::quiz::Challenge;
use crate::tui::theme::Theme;

pub const NO_SELECTION: &str = "Please select an employee to analyze.";
pub const CORRECT: &str = "Excellent! You've identified the insider threat.";
pub const WRONG: &str = "This employee's activity appears normal. Look for unusual patterns \
                         in login times, locations, and activities.";

pub struct InsiderScreen {
    employees: Vec<&'static Employee>,
    selected: Option<usize>,
    solved: bool,
}

fn access_style(level: AccessLevel, theme: &Theme) -> Style {
    match level {
        AccessLevel::High => theme.error_style(),
        AccessLevel::Medium => theme.warning_style(),
        AccessLevel::Low => theme.success_style(),
    }
}

impl InsiderScreen {
    pub fn new(ctx: &mut Context<'_>) -> Result<Self> {
        Ok(Self::with_employees(insider_round(&mut *ctx.rng)?))
    }

    pub fn with_employees(employees: Vec<&'static Employee>) -> Self {
        Self {
            employees,
            selected: None,
            solved: false,
        }
    }

    pub fn employees(&self) -> &[&'static Employee] {
        &self.employees
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    fn analyze(&mut self, ctx: &mut Context<'_>) -> Outcome {
        let Some(employee) = self.selected.and_then(|i| self.employees.get(i)) else {
            ctx.announcer.error(NO_SELECTION);
            return Outcome::Stay;
        };
        if employee.is_threat() {
            ctx.announcer.success(CORRECT);
            self.solved = true;
            Outcome::Solved
        } else {
            ctx.announcer.error(WRONG);
            Outcome::Stay
        }
    }

    fn render_roster(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .employees
            .iter()
            .map(|employee| {
                ListItem::new(vec![
                    Line::from(Span::styled(employee.name, theme.text_style())),
                    Line::from(vec![
                        Span::styled(
                            format!("{} · {}  ", employee.role, employee.department),
                            theme.text_secondary_style(),
                        ),
                        Span::styled(
                            employee.access_level.to_string(),
                            access_style(employee.access_level, theme),
                        ),
                    ]),
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
                    .title(" Employees "),
            );
        let mut state = ListState::default().with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_profile(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let field = |label: &'static str, value: String, style: Style| {
            Line::from(vec![
                Span::styled(format!("{:<16}", label), theme.text_secondary_style()),
                Span::styled(value, style),
            ])
        };
        let lines = match self.selected.and_then(|i| self.employees.get(i)) {
            Some(employee) => {
                let mut lines = vec![
                    field("Name", employee.name.to_string(), theme.accent_bold_style()),
                    field("Role", employee.role.to_string(), theme.text_style()),
                    field("Department", employee.department.to_string(), theme.text_style()),
                    field(
                        "Access level",
                        employee.access_level.to_string(),
                        access_style(employee.access_level, theme),
                    ),
                    field("Last login", employee.last_login.to_string(), theme.text_style()),
                    field("Location", employee.login_location.to_string(), theme.text_style()),
                    Line::from(""),
                    Line::from(Span::styled("Recent activity:", theme.text_secondary_style())),
                    Line::from(Span::styled(employee.recent_activity, theme.text_style())),
                ];
                if self.solved {
                    if let Some(indicators) = employee.suspicious_indicators {
                        lines.push(Line::from(""));
                        lines.push(Line::from(Span::styled(
                            format!("Indicators: {}", indicators),
                            theme.warning_style(),
                        )));
                    }
                }
                lines
            }
            None => vec![Line::from(Span::styled(
                "Select an employee to review their profile.",
                theme.text_secondary_style(),
            ))],
        };
        let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(" Profile "),
        );
        frame.render_widget(panel, area);
    }
}

impl Screen for InsiderScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Level(Level::InsiderThreat)
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
                self.selected = step_selection(self.selected, self.employees.len(), false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = step_selection(self.selected, self.employees.len(), true);
            }
            KeyCode::Enter => return Ok(self.analyze(ctx)),
            KeyCode::Char('r') => {
                *self = Self::new(ctx)?;
                ctx.announcer.info("New profiles loaded.");
            }
            _ => {}
        }
        Ok(Outcome::Stay)
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &View<'_>) {
        let theme = view.theme;
        let tips = if view.game.show_hint {
            tips_height(Challenge::Insider)
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
                "Insider Threat Detection",
                "One employee is acting suspiciously. Select them and press Enter to analyze.",
                theme,
            ),
            rows[0],
        );
        if view.game.show_hint {
            render_tips(frame, rows[1], Challenge::Insider, theme);
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);
        self.render_roster(frame, columns[0], theme);
        self.render_profile(frame, columns[1], theme);
    }

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑/↓", "select"),
            ("Enter", "analyze"),
            ("r", "try different profiles"),
            ("h", "tips"),
            ("Esc", "home"),
        ]
    }
}
