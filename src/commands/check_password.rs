//! Check-password subcommand handler

use anyhow::Result;

use cyberquest::quiz::{validate_password, PasswordReport, Strength};
use cyberquest::tui::current_theme;
use cyberquest::tui::theme::Theme;

/// Colored report: strength line, then one line per failed rule.
pub fn format_report(report: &PasswordReport, theme: &Theme) -> String {
    let strength = report.strength.to_string();
    let strength = match report.strength {
        Strength::Strong => theme.success_text(&strength),
        Strength::Medium => theme.warning_text(&strength),
        Strength::Weak => theme.error_text(&strength),
    };
    let mut out = format!("{} {}\n", theme.secondary_text("Strength:"), strength);
    if report.is_valid {
        out.push_str(&theme.success_text("Meets all requirements"));
        out.push('\n');
    }
    for message in &report.feedback {
        out.push_str(&theme.error_text(&format!("  - {}", message)));
        out.push('\n');
    }
    out
}

#[cfg(not(tarpaulin_include))]
pub fn handle(password: &str, json: bool) -> Result<()> {
    let report = validate_password(password);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report, &current_theme()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_report_lists_failures() {
        let report = validate_password("abc");
        let text = format_report(&report, &Theme::mono());
        assert!(text.contains("weak"));
        assert!(text.contains("  - Password should be at least 8 characters long"));
        assert!(!text.contains("Meets all requirements"));
    }

    #[test]
    fn strong_password_reports_success() {
        let report = validate_password("C0rrect-Horse!");
        let text = format_report(&report, &Theme::mono());
        assert!(text.contains("strong"));
        assert!(text.contains("Meets all requirements"));
    }
}
