//! Help overlay listing the keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use super::ui::centered_fixed;

/// Shortcut sections: (heading, [(key, description)]).
pub const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Enter", "Continue / submit"),
            ("Up/Down", "Move selection"),
            ("Tab", "Switch field (login)"),
            ("Esc", "Back to home"),
        ],
    ),
    (
        "Challenges",
        &[
            ("Space", "Mark password as weak"),
            ("r", "Draw a new round"),
            ("h", "Show / hide tips"),
        ],
    ),
    (
        "Terminal",
        &[("s", "Skip the typing animation")],
    ),
    (
        "General",
        &[("?", "Show this help"), ("q / Ctrl-C", "Quit")],
    ),
];

const KEY_COLUMN: usize = 14;

/// Styled help text.
pub fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (heading, keys) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            format!("  {}", heading),
            theme.accent_bold_style(),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:<width$}", key, width = KEY_COLUMN), theme.accent_style()),
                Span::styled(desc.to_string(), theme.text_style()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "        Press any key to close",
        theme.text_secondary_style(),
    )));
    lines
}

/// Render the help modal centered over `area`.
pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = help_lines(theme);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let modal_area = centered_fixed(48, height, area);

    frame.render_widget(Clear, modal_area);
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" CyberQuest Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}
