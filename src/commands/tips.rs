//! Tips subcommand handler

use anyhow::Result;

use cyberquest::quiz::Challenge;
use cyberquest::tui::current_theme;

/// Tips as plain text, one bullet per line.
pub fn format_tips(challenge: Challenge) -> String {
    challenge
        .tips()
        .iter()
        .map(|tip| format!("  • {}\n", tip))
        .collect()
}

#[cfg(not(tarpaulin_include))]
pub fn handle(challenge: Challenge) -> Result<()> {
    let theme = current_theme();
    println!("{}", theme.accent_text(challenge.tips_title()));
    print!("{}", theme.primary_text(&format_tips(challenge)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_tip() {
        let text = format_tips(Challenge::Insider);
        assert_eq!(text.lines().count(), Challenge::Insider.tips().len());
        assert!(text.lines().all(|line| line.starts_with("  • ")));
    }
}
