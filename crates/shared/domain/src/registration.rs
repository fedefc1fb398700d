//! Registration form and submission outcomes.

use serde::Serialize;

use crate::error::ValidationErrorKind;

/// Values entered on the registration screen for one submission attempt.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Full name
    pub name: String,
    /// Email address, used as the account identity
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
    /// Terms of use and privacy policy checkbox
    pub terms_accepted: bool,
}

// Don't expose passwords in debug output (security)
impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}

impl RegistrationForm {
    /// Create a form with the terms checkbox unticked
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            terms_accepted: false,
        }
    }

    /// Set the terms checkbox
    pub fn with_terms_accepted(mut self, accepted: bool) -> Self {
        self.terms_accepted = accepted;
        self
    }

    /// Check that no text field was left blank
    pub fn has_all_fields(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }
}

/// Verdict of the local validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationErrorKind),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Convert into a `Result` for `?` propagation
    pub fn into_result(self) -> Result<(), ValidationErrorKind> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(kind) => Err(kind),
        }
    }
}

/// Terminal outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum RegistrationResult {
    Success,
    Failure(ValidationErrorKind),
}

impl RegistrationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationResult::Success)
    }

    /// Failure reason, if any
    pub fn failure(&self) -> Option<&ValidationErrorKind> {
        match self {
            RegistrationResult::Success => None,
            RegistrationResult::Failure(kind) => Some(kind),
        }
    }

    /// Message the caller shows for this outcome
    pub fn user_message(&self) -> String {
        match self {
            RegistrationResult::Success => {
                "Registration complete. Check your email to activate your account.".to_string()
            }
            RegistrationResult::Failure(kind) => kind.user_message(),
        }
    }
}

impl From<ValidationErrorKind> for RegistrationResult {
    fn from(kind: ValidationErrorKind) -> Self {
        RegistrationResult::Failure(kind)
    }
}

impl From<Result<(), ValidationErrorKind>> for RegistrationResult {
    fn from(result: Result<(), ValidationErrorKind>) -> Self {
        match result {
            Ok(()) => RegistrationResult::Success,
            Err(kind) => RegistrationResult::Failure(kind),
        }
    }
}

/// Phases of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationState {
    Idle,
    Validating,
    CheckingExistence,
    Creating,
    Succeeded,
    Failed,
}

impl RegistrationState {
    /// Terminal states never transition again
    pub fn is_terminal(&self) -> bool {
        matches!(self, RegistrationState::Succeeded | RegistrationState::Failed)
    }

    /// Check whether `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: RegistrationState) -> bool {
        use RegistrationState::*;

        match (self, next) {
            (Idle, Validating) => true,
            (Validating, CheckingExistence) | (Validating, Failed) => true,
            (CheckingExistence, Creating) | (CheckingExistence, Failed) => true,
            (Creating, Succeeded) | (Creating, Failed) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RegistrationState::Idle => "idle",
            RegistrationState::Validating => "validating",
            RegistrationState::CheckingExistence => "checking_existence",
            RegistrationState::Creating => "creating",
            RegistrationState::Succeeded => "succeeded",
            RegistrationState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}
