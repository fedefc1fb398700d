//! Identity-service error handling.
//!
//! Adapters report failures as [`IdentityError`]; the orchestrator turns
//! them into a [`ValidationErrorKind`] depending on which call failed.

use domain::ValidationErrorKind;
use thiserror::Error;

/// Failure reported by an identity-service adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The remote call could not complete (network, timeout, 5xx, throttling)
    #[error("Identity service unavailable: {0}")]
    Unavailable(String),

    /// The provider answered and refused the request
    #[error("{0}")]
    Rejected(String),
}

impl IdentityError {
    /// Provider-supplied detail, without any prefix added here
    pub fn detail(&self) -> &str {
        match self {
            IdentityError::Unavailable(detail) | IdentityError::Rejected(detail) => detail,
        }
    }

    /// Check if the call never reached a decision on the provider side
    pub fn is_unavailable(&self) -> bool {
        matches!(self, IdentityError::Unavailable(_))
    }

    /// Failure kind when the existence lookup fails.
    ///
    /// Pure mapping; callers log the detail before it is dropped.
    pub fn into_lookup_failure(self) -> ValidationErrorKind {
        match self {
            IdentityError::Unavailable(_) => ValidationErrorKind::ProviderUnavailable,
            IdentityError::Rejected(detail) => ValidationErrorKind::ProviderError(detail),
        }
    }

    /// Failure kind when account creation fails.
    ///
    /// Always a provider error carrying the detail verbatim.
    pub fn into_create_failure(self) -> ValidationErrorKind {
        match self {
            IdentityError::Unavailable(detail) | IdentityError::Rejected(detail) => {
                ValidationErrorKind::ProviderError(detail)
            }
        }
    }
}

/// Result type alias for identity-service calls
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Convenience constructors
impl IdentityError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        IdentityError::Unavailable(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        IdentityError::Rejected(msg.into())
    }
}
