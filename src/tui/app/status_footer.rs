//! Toast line and key-hint footer shared by the TUI applications

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::quiz::announcer::{Toast, ToastKind};
use crate::tui::theme::{current_theme, Theme};

/// Render the newest toast, or nothing.
pub fn render_toast_line(frame: &mut Frame, area: Rect, toast: Option<&Toast>) {
    let Some(toast) = toast else {
        return;
    };
    let theme = current_theme();
    let line = Line::from(build_toast_spans(toast, &theme));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn build_toast_spans(toast: &Toast, theme: &Theme) -> Vec<Span<'static>> {
    let (icon, style) = match toast.kind {
        ToastKind::Success => ("✔", theme.success_style()),
        ToastKind::Error => ("✖", theme.error_style()),
        ToastKind::Info => ("ℹ", theme.accent_style()),
    };
    vec![
        Span::styled(format!("{} ", icon), style),
        Span::styled(toast.message.clone(), style),
    ]
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("q", "quit"), ("?", "help")]` renders as `"q: quit | ?: help"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let theme = current_theme();
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, &theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Keys in the accent color, descriptions dimmed, entries separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
