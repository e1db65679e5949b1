//! Round subcommand handler
//!
//! Prints one sampled round the way the game would deal it, answers
//! included, as a table or as JSON.

use std::fmt::Write as _;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use cyberquest::quiz::sampler::{insider_round, password_round, phishing_round};
use cyberquest::quiz::Challenge;
use cyberquest::tui::current_theme;

/// RNG for a round: seeded when a seed is given, from entropy otherwise.
pub fn round_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Draw a round and render it as a plain-text table.
pub fn format_table<R: Rng + ?Sized>(challenge: Challenge, rng: &mut R) -> Result<String> {
    let mut out = String::new();
    match challenge {
        Challenge::Phishing => {
            writeln!(out, "{:<3} {:<8} {:<34} SUBJECT", "#", "PHISHING", "SENDER")?;
            for (i, email) in phishing_round(rng)?.iter().enumerate() {
                writeln!(
                    out,
                    "{:<3} {:<8} {:<34} {}",
                    i + 1,
                    mark(email.is_phishing),
                    email.sender,
                    email.subject
                )?;
            }
        }
        Challenge::Password => {
            writeln!(out, "{:<3} {:<16} {:<20} WEAKNESS", "#", "USERNAME", "PASSWORD")?;
            for (i, entry) in password_round(rng)?.iter().enumerate() {
                writeln!(
                    out,
                    "{:<3} {:<16} {:<20} {}",
                    i + 1,
                    entry.username,
                    entry.password,
                    entry.weakness_reason.unwrap_or("-")
                )?;
            }
        }
        Challenge::Insider => {
            writeln!(out, "{:<3} {:<6} {:<20} {:<8} ROLE", "#", "THREAT", "NAME", "ACCESS")?;
            for (i, employee) in insider_round(rng)?.iter().enumerate() {
                writeln!(
                    out,
                    "{:<3} {:<6} {:<20} {:<8} {}",
                    i + 1,
                    mark(employee.is_threat()),
                    employee.name,
                    employee.access_level.to_string(),
                    employee.role
                )?;
            }
        }
    }
    Ok(out)
}

/// Draw a round and render it as pretty-printed JSON.
pub fn format_json<R: Rng + ?Sized>(challenge: Challenge, rng: &mut R) -> Result<String> {
    let json = match challenge {
        Challenge::Phishing => serde_json::to_string_pretty(&phishing_round(rng)?)?,
        Challenge::Password => serde_json::to_string_pretty(&password_round(rng)?)?,
        Challenge::Insider => serde_json::to_string_pretty(&insider_round(rng)?)?,
    };
    Ok(json)
}

#[cfg(not(tarpaulin_include))]
pub fn handle(challenge: Challenge, json: bool, seed: Option<u64>) -> Result<()> {
    info!(?challenge, json, seed, "sampling round");
    let mut rng = round_rng(seed);
    if json {
        println!("{}", format_json(challenge, &mut rng)?);
    } else {
        let theme = current_theme();
        println!("{}", theme.accent_text(challenge.level().title()));
        print!("{}", format_table(challenge, &mut rng)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_header_and_five_rows() {
        let mut rng = round_rng(Some(1));
        let table = format_table(Challenge::Phishing, &mut rng).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("#"));
        assert_eq!(lines.iter().filter(|l| l.contains(" yes ")).count(), 1);
    }

    #[test]
    fn same_seed_same_round() {
        let a = format_json(Challenge::Password, &mut round_rng(Some(42))).unwrap();
        let b = format_json(Challenge::Password, &mut round_rng(Some(42))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn json_round_parses_as_five_items() {
        let json = format_json(Challenge::Insider, &mut round_rng(Some(5))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 5);
        let threats = items
            .iter()
            .filter(|item| !item["suspicious_indicators"].is_null())
            .count();
        assert_eq!(threats, 1);
    }
}
