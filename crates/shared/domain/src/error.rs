//! Registration failure taxonomy.
//!
//! Every way a submission can fail maps to exactly one variant here.
//! The set is closed: callers can match exhaustively to pick a message.

use serde::Serialize;
use thiserror::Error;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Reasons a registration attempt can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    // Local checks
    #[error("Required fields are missing")]
    MissingFields,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Password is shorter than the minimum length")]
    WeakPasswordLength,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Terms of use were not accepted")]
    TermsNotAccepted,

    // Identity service
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Identity provider is unavailable")]
    ProviderUnavailable,

    #[error("{0}")]
    ProviderError(String),
}

impl ValidationErrorKind {
    /// Stable machine-readable code for the failure
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingFields => "MISSING_FIELDS",
            ValidationErrorKind::InvalidEmail => "INVALID_EMAIL",
            ValidationErrorKind::WeakPasswordLength => "WEAK_PASSWORD_LENGTH",
            ValidationErrorKind::PasswordMismatch => "PASSWORD_MISMATCH",
            ValidationErrorKind::TermsNotAccepted => "TERMS_NOT_ACCEPTED",
            ValidationErrorKind::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            ValidationErrorKind::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
            ValidationErrorKind::ProviderError(_) => "PROVIDER_ERROR",
        }
    }

    /// Get user-facing message.
    ///
    /// Provider errors are shown as the provider reported them.
    pub fn user_message(&self) -> String {
        match self {
            ValidationErrorKind::MissingFields => "All fields are required.".to_string(),
            ValidationErrorKind::InvalidEmail => "Please enter a valid email address.".to_string(),
            ValidationErrorKind::WeakPasswordLength => format!(
                "Password must be at least {} characters long.",
                MIN_PASSWORD_LENGTH
            ),
            ValidationErrorKind::PasswordMismatch => "Passwords do not match.".to_string(),
            ValidationErrorKind::TermsNotAccepted => {
                "You must accept the terms of use and the privacy policy.".to_string()
            }
            ValidationErrorKind::EmailAlreadyRegistered => {
                "This email is already registered. Please log in.".to_string()
            }
            ValidationErrorKind::ProviderUnavailable => {
                "The account service is unavailable. Please try again later.".to_string()
            }
            ValidationErrorKind::ProviderError(detail) => detail.clone(),
        }
    }

    /// True for failures decided without any network round-trip
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ValidationErrorKind::MissingFields
                | ValidationErrorKind::InvalidEmail
                | ValidationErrorKind::WeakPasswordLength
                | ValidationErrorKind::PasswordMismatch
                | ValidationErrorKind::TermsNotAccepted
        )
    }

    /// Convenience constructor for provider failures
    pub fn provider(detail: impl Into<String>) -> Self {
        ValidationErrorKind::ProviderError(detail.into())
    }
}
