//! Terminal-style widget showing a script's revealed lines.
//!
//! Renders the displayed lines with whitespace preserved, an optional
//! partially typed line, the input prompt for interactive scripts, and a
//! block cursor. The view keeps its bottom in sight: once the text is taller
//! than the area it scrolls so the newest line stays visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::cursor::CURSOR_GLYPH;
use crate::player::clock::Clock;
use crate::player::sequencer::Sequencer;
use crate::player::state::PROMPT_MARKER;
use crate::tui::theme::Theme;

/// Widget rendering one script's output.
#[derive(Debug, Clone)]
pub struct TerminalView<'a> {
    displayed: &'a [String],
    partial: Option<String>,
    prompt: Option<&'a str>,
    cursor_visible: bool,
    title: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TerminalView<'a> {
    pub fn new(displayed: &'a [String], theme: &'a Theme) -> Self {
        Self {
            displayed,
            partial: None,
            prompt: None,
            cursor_visible: false,
            title: None,
            theme,
        }
    }

    /// Build a view of a sequencer's current output.
    ///
    /// `live_typing` shows the partially typed line; without it a line only
    /// appears once fully revealed.
    pub fn from_sequencer<C: Clock>(
        sequencer: &'a Sequencer<C>,
        live_typing: bool,
        theme: &'a Theme,
    ) -> Self {
        let partial = if live_typing {
            sequencer.partial()
        } else {
            None
        };
        let prompt = sequencer.accepts_input().then(|| sequencer.input());
        Self::new(sequencer.displayed(), theme)
            .partial(partial)
            .prompt(prompt)
    }

    pub fn partial(mut self, partial: Option<String>) -> Self {
        self.partial = partial;
        self
    }

    /// Show the input prompt with the given buffer.
    pub fn prompt(mut self, input: Option<&'a str>) -> Self {
        self.prompt = input;
        self
    }

    pub fn cursor(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Lines to draw, before wrapping and scrolling.
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for entry in self.displayed {
            let style = if entry.starts_with(PROMPT_MARKER) {
                self.theme.accent_style()
            } else {
                self.theme.text_style()
            };
            lines.extend(
                entry
                    .split('\n')
                    .map(|part| Line::from(Span::styled(part.to_string(), style))),
            );
        }

        if let Some(input) = self.prompt {
            lines.push(Line::from(vec![
                Span::styled(PROMPT_MARKER.to_string(), self.theme.accent_style()),
                Span::styled(input.to_string(), self.theme.text_style()),
                self.cursor_span(),
            ]));
        } else if let Some(partial) = &self.partial {
            let mut parts: Vec<Line<'static>> = partial
                .split('\n')
                .map(|part| Line::from(Span::styled(part.to_string(), self.theme.text_style())))
                .collect();
            if let Some(last) = parts.last_mut() {
                last.spans.push(self.cursor_span());
            }
            lines.extend(parts);
        }

        lines
    }

    fn cursor_span(&self) -> Span<'static> {
        if self.cursor_visible {
            Span::styled(CURSOR_GLYPH, self.theme.accent_style())
        } else {
            Span::raw(" ")
        }
    }
}

/// Paragraph the view draws, word-wrapped without trimming.
fn wrapped_paragraph<'a>(lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// Rows needed to show `lines` word-wrapped at `width` columns.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    wrapped_paragraph(lines.to_vec()).line_count(width.max(1))
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.text_secondary));
        if let Some(title) = self.title {
            block = block.title(Span::styled(
                format!(" {} ", title),
                self.theme.accent_bold_style(),
            ));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = wrapped_paragraph(self.build_lines());
        let overflow = paragraph
            .line_count(inner.width.max(1))
            .saturating_sub(usize::from(inner.height));
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

        paragraph.scroll((scroll, 0)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| &*s.content).collect())
            .collect()
    }

    #[test]
    fn multiline_entries_are_split() {
        let theme = Theme::default();
        let displayed = vec!["\nTitle\nBody\n".to_string()];
        let view = TerminalView::new(&displayed, &theme);
        assert_eq!(text_of(&view.build_lines()), vec!["", "Title", "Body", ""]);
    }

    #[test]
    fn partial_line_carries_cursor() {
        let theme = Theme::default();
        let displayed = vec!["done".to_string()];
        let view = TerminalView::new(&displayed, &theme)
            .partial(Some("typ".to_string()))
            .cursor(true);
        assert_eq!(text_of(&view.build_lines()), vec!["done", "typ█"]);
    }

    #[test]
    fn hidden_cursor_keeps_width() {
        let theme = Theme::default();
        let view = TerminalView::new(&[], &theme).partial(Some("ab".to_string()));
        assert_eq!(text_of(&view.build_lines()), vec!["ab "]);
    }

    #[test]
    fn prompt_replaces_partial() {
        let theme = Theme::default();
        let displayed = vec!["Sign the report:".to_string()];
        let view = TerminalView::new(&displayed, &theme)
            .partial(Some("ignored".to_string()))
            .prompt(Some("neo"))
            .cursor(true);
        assert_eq!(
            text_of(&view.build_lines()),
            vec!["Sign the report:", "> neo█"]
        );
    }

    #[test]
    fn wrapped_height_counts_soft_wraps() {
        let lines = vec![Line::from("x".repeat(25)), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 10), 3 + 1 + 1);
    }

    #[test]
    fn wrapped_height_breaks_at_words() {
        let lines = vec![Line::from("abcdef abcdef abcdef")];
        assert_eq!(wrapped_height(&lines, 10), 3);
    }

    #[test]
    fn wrapped_height_uses_display_width() {
        let lines = vec![Line::from("日本語日本")];
        // five double-width characters = 10 columns
        assert_eq!(wrapped_height(&lines, 4), 3);
    }
}
