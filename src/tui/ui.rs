//! UI rendering helpers for TUI
//!
//! Screen layout, the game header and small layout helpers.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::quiz::game::{format_time, GameState};
use crate::tui::theme::Theme;

/// Areas of a full screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub toast: Rect,
    pub footer: Rect,
}

/// Split the frame into header, body, toast line and footer.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        body: chunks[1],
        toast: chunks[2],
        footer: chunks[3],
    }
}

/// Header text: level, score and elapsed time.
pub fn header_line(game: &GameState, now: Duration, theme: &Theme) -> Line<'static> {
    let elapsed = format_time(game.elapsed(now).as_secs());
    Line::from(vec![
        Span::styled("CyberQuest", theme.accent_bold_style()),
        Span::styled("  │  ", theme.text_secondary_style()),
        Span::styled(game.level.to_string(), theme.text_style()),
        Span::styled("  │  ", theme.text_secondary_style()),
        Span::styled(format!("Score: {}", game.score), theme.success_style()),
        Span::styled("  │  ", theme.text_secondary_style()),
        Span::styled(format!("Time: {}", elapsed), theme.text_style()),
    ])
}

pub fn render_header(frame: &mut Frame, area: Rect, game: &GameState, now: Duration, theme: &Theme) {
    let header = Paragraph::new(header_line(game, now, theme))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.text_secondary_style()),
        );
    frame.render_widget(header, area);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fixed_shrinks_to_area() {
        let area = Rect::new(5, 5, 40, 10);
        let rect = centered_fixed(60, 6, area);
        assert_eq!(rect, Rect::new(5, 7, 40, 6));
    }

    #[test]
    fn screen_layout_reserves_header_and_footer() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.height, 19);
        assert_eq!(layout.toast.y, 22);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn header_shows_score_and_time() {
        let mut game = GameState::new(Duration::ZERO);
        game.add_points(200);
        let line = header_line(&game, Duration::from_secs(83), &Theme::default());
        let text: String = line.spans.iter().map(|s| &*s.content).collect();
        assert!(text.contains("Score: 200"));
        assert!(text.contains("Time: 01:23"));
        assert!(text.contains("Briefing"));
    }
}
