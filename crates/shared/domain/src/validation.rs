//! Field validation - pure checks run before any network call.
//!
//! Nothing here performs I/O or keeps state, so every function can be
//! called on each keystroke and exercised directly in tests.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{EMAIL_PATTERN, MIN_PASSWORD_LENGTH};
use crate::error::ValidationErrorKind;
use crate::password::{PasswordStrength, StrengthReport};
use crate::registration::{RegistrationForm, ValidationOutcome};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check that `email` is shaped like `local@domain.tld`.
///
/// Syntax only: no DNS or MX lookup happens.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Classify a password into a strength tier.
pub fn check_password_strength(password: &str) -> PasswordStrength {
    StrengthReport::evaluate(password).strength()
}

/// Run the local checks in order, stopping at the first failure.
///
/// Order: missing fields, email shape, password length, confirmation
/// match, terms acceptance.
pub fn validate_form(form: &RegistrationForm) -> ValidationOutcome {
    match check_form(form) {
        Ok(()) => ValidationOutcome::Valid,
        Err(kind) => ValidationOutcome::Invalid(kind),
    }
}

fn check_form(form: &RegistrationForm) -> Result<(), ValidationErrorKind> {
    if !form.has_all_fields() {
        return Err(ValidationErrorKind::MissingFields);
    }

    if !validate_email(&form.email) {
        return Err(ValidationErrorKind::InvalidEmail);
    }

    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationErrorKind::WeakPasswordLength);
    }

    // Exact comparison: no trimming or case folding
    if form.password != form.confirm_password {
        return Err(ValidationErrorKind::PasswordMismatch);
    }

    if !form.terms_accepted {
        return Err(ValidationErrorKind::TermsNotAccepted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm::new("Ana Souza", "ana@example.com", "Secret123!", "Secret123!")
            .with_terms_accepted(true)
    }

    // =========================================================================
    // Email
    // =========================================================================

    #[test]
    fn test_valid_emails() {
        for email in [
            "a@b.com",
            "ana.souza@example.com",
            "user+tag@mail.example.co.uk",
            "x@y.z",
        ] {
            assert!(validate_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_email_without_at() {
        assert!(!validate_email("ana.example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_email_empty_parts() {
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("ana@"));
        assert!(!validate_email("@"));
    }

    #[test]
    fn test_email_domain_without_dot() {
        assert!(!validate_email("ana@localhost"));
        assert!(!validate_email("ana@.com"));
        assert!(!validate_email("ana@example."));
    }

    #[test]
    fn test_email_domain_with_empty_labels() {
        for email in ["a@...", "a@b..com", "a@.b.com", "a@b.com.", "a@b.c."] {
            assert!(!validate_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_email_with_whitespace() {
        assert!(!validate_email("ana souza@example.com"));
        assert!(!validate_email(" ana@example.com"));
        assert!(!validate_email("ana@example.com "));
        assert!(!validate_email("ana@exa\tmple.com"));
    }

    #[test]
    fn test_email_with_two_ats() {
        assert!(!validate_email("ana@foo@example.com"));
    }

    // =========================================================================
    // Password strength
    // =========================================================================

    #[test]
    fn test_strength_tiers() {
        assert_eq!(check_password_strength(""), PasswordStrength::Weak);
        assert_eq!(check_password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(check_password_strength("abcdefgh"), PasswordStrength::Medium);
        assert_eq!(check_password_strength("Abcdefgh"), PasswordStrength::Medium);
        assert_eq!(check_password_strength("Abcdefg1"), PasswordStrength::Strong);
        assert_eq!(check_password_strength("Abcdef1!"), PasswordStrength::Strong);
    }

    #[test]
    fn test_strength_is_monotonic() {
        // Each step satisfies one more criterion than the previous one
        let steps = ["", "a", "aB", "aB3", "aB3$", "aB3$wxyz"];

        let tiers: Vec<_> = steps.iter().map(|p| check_password_strength(p)).collect();
        for pair in tiers.windows(2) {
            assert!(pair[1] >= pair[0], "{:?} dropped to {:?}", pair[0], pair[1]);
        }

        for (i, password) in steps.iter().enumerate() {
            assert_eq!(StrengthReport::evaluate(password).score() as usize, i);
        }
    }

    #[test]
    fn test_adding_any_single_criterion_never_lowers_tier() {
        let base = ["abcdefgh", "ABCDEFGH", "abc", "1234", "Ab1"];
        let additions = ["Z", "z", "7", "#", "padding!"];

        for password in base {
            let before = check_password_strength(password);
            for extra in additions {
                let after = check_password_strength(&format!("{password}{extra}"));
                assert!(after >= before, "{password}+{extra}: {before} -> {after}");
            }
        }
    }

    #[test]
    fn test_strength_is_idempotent() {
        for password in ["", "abcdefgh", "Abcdef1!", "ñandú-2024"] {
            assert_eq!(
                check_password_strength(password),
                check_password_strength(password)
            );
        }
    }

    // =========================================================================
    // Form gate
    // =========================================================================

    #[test]
    fn test_valid_form() {
        assert_eq!(validate_form(&valid_form()), ValidationOutcome::Valid);
    }

    #[test]
    fn test_each_missing_field() {
        let blanks: [fn(&mut RegistrationForm); 4] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.password.clear(),
            |f| f.confirm_password.clear(),
        ];

        for blank in blanks {
            let mut form = valid_form();
            blank(&mut form);
            assert_eq!(
                validate_form(&form),
                ValidationOutcome::Invalid(ValidationErrorKind::MissingFields)
            );
        }
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        let form = RegistrationForm::new("", "not-an-email", "short", "other");
        assert_eq!(
            validate_form(&form),
            ValidationOutcome::Invalid(ValidationErrorKind::MissingFields)
        );
    }

    #[test]
    fn test_invalid_email_checked_before_length() {
        let form = RegistrationForm::new("Ana", "not-an-email", "short", "other");
        assert_eq!(
            validate_form(&form),
            ValidationOutcome::Invalid(ValidationErrorKind::InvalidEmail)
        );
    }

    #[test]
    fn test_short_password_checked_before_mismatch() {
        let form = RegistrationForm::new("Ana", "ana@example.com", "short", "other");
        assert_eq!(
            validate_form(&form),
            ValidationOutcome::Invalid(ValidationErrorKind::WeakPasswordLength)
        );
    }

    #[test]
    fn test_mismatch_checked_before_terms() {
        let form = RegistrationForm::new("Ana", "ana@example.com", "password1", "password2");
        assert_eq!(
            validate_form(&form),
            ValidationOutcome::Invalid(ValidationErrorKind::PasswordMismatch)
        );
    }

    #[test]
    fn test_mismatch_is_exact() {
        let mut form = valid_form();
        form.confirm_password = "secret123!".to_string();
        assert_eq!(
            validate_form(&form),
            ValidationOutcome::Invalid(ValidationErrorKind::PasswordMismatch)
        );

        let mut form = valid_form();
        form.confirm_password = "Secret123! ".to_string();
        assert_eq!(
            validate_form(&form),
            ValidationOutcome::Invalid(ValidationErrorKind::PasswordMismatch)
        );
    }

    #[test]
    fn test_terms_not_accepted() {
        let form = valid_form().with_terms_accepted(false);
        assert_eq!(
            validate_form(&form),
            ValidationOutcome::Invalid(ValidationErrorKind::TermsNotAccepted)
        );
    }

    #[test]
    fn test_exactly_minimum_length_passes() {
        let form = RegistrationForm::new("Ana", "ana@example.com", "12345678", "12345678")
            .with_terms_accepted(true);
        assert!(validate_form(&form).is_valid());
    }
}
