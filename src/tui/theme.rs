//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).
//! The active theme is chosen once at startup from the config file.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (terminal output, card bodies)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for titles, borders and key hints
    pub accent: Color,
    /// Error / danger color
    pub error: Color,
    /// Warning color (hints, medium access)
    pub warning: Color,
    /// Success color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::cyber()
    }
}

impl Theme {
    /// CyberQuest theme - cyan terminal text on the default background.
    pub fn cyber() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            warning: Color::LightYellow,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Monochrome theme for terminals with poor color support.
    pub fn mono() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Gray,
            accent: Color::White,
            error: Color::White,
            warning: Color::White,
            success: Color::White,
            background: Color::Reset,
        }
    }

    /// Look up a theme preset by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cyber" => Some(Self::cyber()),
            "classic" => Some(Self::classic()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (titles, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected row of a list.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        paint(self.warning, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// Raw ANSI sequences for CLI output that is not tied to a theme color.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

fn paint(color: Color, text: &str) -> String {
    let code = color_to_ansi(color);
    if code.is_empty() {
        return text.to_string();
    }
    format!("{}{}{}", code, text, ansi::RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        // Reset, RGB and indexed colors print uncolored
        _ => "",
    }
}

static ACTIVE_THEME: OnceLock<Theme> = OnceLock::new();

/// Select the process-wide theme. Only the first call has an effect.
pub fn init_theme(theme: Theme) {
    let _ = ACTIVE_THEME.set(theme);
}

/// The active theme (the default theme if none was selected).
pub fn current_theme() -> Theme {
    ACTIVE_THEME.get().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_cyber() {
        let theme = Theme::default();
        assert_eq!(theme.text_primary, Color::Cyan);
        assert_eq!(theme.accent, Color::LightCyan);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Theme::from_name("CLASSIC"), Some(Theme::classic()));
        assert_eq!(Theme::from_name("mono"), Some(Theme::mono()));
        assert_eq!(Theme::from_name("neon"), None);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::cyber();
        assert_eq!(theme.text_style().fg, Some(Color::Cyan));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.error_style().fg, Some(Color::Red));
        assert_eq!(theme.warning_style().fg, Some(Color::Yellow));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::cyber();

        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[36m"));
        assert!(primary.ends_with("\x1b[0m"));
        assert!(primary.contains("hello"));

        let error = theme.error_text("bad");
        assert!(error.starts_with("\x1b[31m"));
    }

    #[test]
    fn reset_color_prints_plain_text() {
        let theme = Theme::mono();
        assert_eq!(theme.primary_text("plain"), "plain");
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::LightCyan), "\x1b[96m");
        assert_eq!(color_to_ansi(Color::Reset), "");
    }
}
