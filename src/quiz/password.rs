//! Rule-based password strength checker.
//!
//! Five independent rules, each contributing one feedback message when it
//! fails. Strength is derived from the number of failed rules.

use std::fmt;

use serde::Serialize;

/// Minimum length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Characters accepted as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordReport {
    pub is_valid: bool,
    pub strength: Strength,
    pub feedback: Vec<&'static str>,
}

impl fmt::Display for PasswordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strength: {}", self.strength)?;
        if self.is_valid {
            return writeln!(f, "Meets all requirements");
        }
        for message in &self.feedback {
            writeln!(f, "  - {}", message)?;
        }
        Ok(())
    }
}

fn long_enough(pw: &str) -> bool {
    pw.chars().count() >= MIN_LENGTH
}

fn has_uppercase(pw: &str) -> bool {
    pw.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(pw: &str) -> bool {
    pw.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(pw: &str) -> bool {
    pw.chars().any(|c| c.is_ascii_digit())
}

fn has_special(pw: &str) -> bool {
    pw.chars().any(|c| SPECIAL_CHARS.contains(c))
}

type Rule = (fn(&str) -> bool, &'static str);

// Feedback is reported in this order
const RULES: [Rule; 5] = [
    (long_enough, "Password should be at least 8 characters long"),
    (has_uppercase, "Include at least one uppercase letter"),
    (has_lowercase, "Include at least one lowercase letter"),
    (has_digit, "Include at least one number"),
    (has_special, "Include at least one special character"),
];

/// Check `password` against every rule.
pub fn validate_password(password: &str) -> PasswordReport {
    let feedback: Vec<&'static str> = RULES
        .iter()
        .filter(|(passes, _)| !passes(password))
        .map(|(_, message)| *message)
        .collect();

    let strength = match feedback.len() {
        0..=1 => Strength::Strong,
        2..=3 => Strength::Medium,
        _ => Strength::Weak,
    };

    PasswordReport {
        is_valid: feedback.is_empty(),
        strength,
        feedback,
    }
}
