//! Password strength value objects.
//!
//! DDD: Strength is derived from the password alone, compared by value.
//! The scoring rule lives here so the UI hint and the tests share it.

use serde::{Deserialize, Serialize};

use crate::constants::{MEDIUM_MAX_SCORE, MIN_PASSWORD_LENGTH, WEAK_MAX_SCORE};

/// Coarse strength tier of a password.
///
/// Ordered: `Weak < Medium < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Map a criteria score onto a tier
    pub fn from_score(score: u8) -> Self {
        if score <= WEAK_MAX_SCORE {
            PasswordStrength::Weak
        } else if score <= MEDIUM_MAX_SCORE {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Strong
        }
    }

    /// Check if this is the top tier
    pub fn is_strong(&self) -> bool {
        matches!(self, PasswordStrength::Strong)
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordStrength::Weak => write!(f, "weak"),
            PasswordStrength::Medium => write!(f, "medium"),
            PasswordStrength::Strong => write!(f, "strong"),
        }
    }
}

/// Which strength criteria a password satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl StrengthReport {
    /// Evaluate every criterion against a password.
    ///
    /// Length is counted in characters, not bytes.
    pub fn evaluate(password: &str) -> Self {
        let mut report = Self {
            long_enough: password.chars().count() >= MIN_PASSWORD_LENGTH,
            ..Self::default()
        };

        for c in password.chars() {
            if c.is_uppercase() {
                report.has_uppercase = true;
            } else if c.is_lowercase() {
                report.has_lowercase = true;
            } else if c.is_ascii_digit() {
                report.has_digit = true;
            } else if c.is_ascii_punctuation() {
                report.has_symbol = true;
            }
        }

        report
    }

    /// Number of satisfied criteria (0-5)
    pub fn score(&self) -> u8 {
        [
            self.long_enough,
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_symbol,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }

    /// Tier for this report
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STRENGTH_CRITERIA_COUNT;

    #[test]
    fn test_score_thresholds() {
        assert_eq!(PasswordStrength::from_score(0), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(1), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(3), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(4), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(5), PasswordStrength::Strong);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(PasswordStrength::Weak < PasswordStrength::Medium);
        assert!(PasswordStrength::Medium < PasswordStrength::Strong);
    }

    #[test]
    fn test_report_all_criteria() {
        let report = StrengthReport::evaluate("Abcdef1!");
        assert!(report.long_enough);
        assert!(report.has_uppercase);
        assert!(report.has_lowercase);
        assert!(report.has_digit);
        assert!(report.has_symbol);
        assert_eq!(report.score(), STRENGTH_CRITERIA_COUNT);
        assert!(report.strength().is_strong());
    }

    #[test]
    fn test_report_empty_password() {
        let report = StrengthReport::evaluate("");
        assert_eq!(report, StrengthReport::default());
        assert_eq!(report.score(), 0);
        assert_eq!(report.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 8 characters, 16 bytes
        let report = StrengthReport::evaluate("ééééééé1");
        assert!(report.long_enough);

        // 4 characters, 8 bytes
        let report = StrengthReport::evaluate("éééé");
        assert!(!report.long_enough);
    }

    #[test]
    fn test_whitespace_is_not_a_symbol() {
        let report = StrengthReport::evaluate("a b");
        assert!(!report.has_symbol);
    }

    #[test]
    fn test_display() {
        assert_eq!(PasswordStrength::Weak.to_string(), "weak");
        assert_eq!(PasswordStrength::Medium.to_string(), "medium");
        assert_eq!(PasswordStrength::Strong.to_string(), "strong");
    }
}
