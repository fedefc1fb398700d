//! Registration orchestrator - Validates a form and creates the account.
//!
//! SOLID (SRP): Sequencing only. Field rules live in `domain::validation`,
//! remote calls go through the `IdentityService` port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::client::IdentityService;
use domain::{
    validate_form, RegistrationForm, RegistrationResult, RegistrationState, ValidationErrorKind,
};

/// Registration use case trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Run one submission to its terminal outcome
    async fn submit(&self, form: &RegistrationForm) -> RegistrationResult;
}

/// Record of the states one submission went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationAttempt {
    history: Vec<RegistrationState>,
}

impl RegistrationAttempt {
    fn new() -> Self {
        Self {
            history: vec![RegistrationState::Idle],
        }
    }

    /// Current state
    pub fn state(&self) -> RegistrationState {
        self.history
            .last()
            .copied()
            .unwrap_or(RegistrationState::Idle)
    }

    /// Every state visited, starting at `Idle`
    pub fn history(&self) -> &[RegistrationState] {
        &self.history
    }

    fn advance(&mut self, next: RegistrationState) {
        let current = self.state();
        debug_assert!(
            current.can_transition_to(next),
            "illegal transition {} -> {}",
            current,
            next
        );
        debug!(from = %current, to = %next, "Registration state change");
        self.history.push(next);
    }

    fn finish(&mut self, outcome: &Result<(), ValidationErrorKind>) {
        match outcome {
            Ok(()) => self.advance(RegistrationState::Succeeded),
            Err(_) => self.advance(RegistrationState::Failed),
        }
    }
}

/// Run one submission against an identity provider.
///
/// Local checks run first and short-circuit; then a single existence
/// lookup and, only if the email is free, a single create call.
pub async fn submit(form: &RegistrationForm, identity: &dyn IdentityService) -> RegistrationResult {
    submit_recorded(form, identity).await.0
}

/// Same as [`submit`], also returning the states visited.
pub async fn submit_recorded(
    form: &RegistrationForm,
    identity: &dyn IdentityService,
) -> (RegistrationResult, RegistrationAttempt) {
    let mut attempt = RegistrationAttempt::new();
    let outcome = run(&mut attempt, form, identity).await;
    attempt.finish(&outcome);

    match &outcome {
        Ok(()) => info!("Registration succeeded"),
        Err(kind) if kind.is_local() => debug!(code = kind.code(), "Registration rejected locally"),
        Err(kind) => warn!(code = kind.code(), "Registration failed: {}", kind),
    }

    (RegistrationResult::from(outcome), attempt)
}

async fn run(
    attempt: &mut RegistrationAttempt,
    form: &RegistrationForm,
    identity: &dyn IdentityService,
) -> Result<(), ValidationErrorKind> {
    attempt.advance(RegistrationState::Validating);
    validate_form(form).into_result()?;

    attempt.advance(RegistrationState::CheckingExistence);
    let exists = identity
        .exists(&form.email)
        .await
        .map_err(|err| {
            debug!(unavailable = err.is_unavailable(), "Identity lookup failed: {}", err.detail());
            err.into_lookup_failure()
        })?;
    if exists {
        return Err(ValidationErrorKind::EmailAlreadyRegistered);
    }

    attempt.advance(RegistrationState::Creating);
    identity
        .create(&form.email, &form.password)
        .await
        .map_err(|err| {
            debug!(unavailable = err.is_unavailable(), "Identity create failed: {}", err.detail());
            err.into_create_failure()
        })
}

/// Concrete implementation of RegistrationService over an identity provider.
pub struct RegistrationOrchestrator {
    identity: Arc<dyn IdentityService>,
}

impl RegistrationOrchestrator {
    /// Create new orchestrator instance
    pub fn new(identity: Arc<dyn IdentityService>) -> Self {
        Self { identity }
    }

    /// Submit and keep the state history, for callers that render progress
    pub async fn submit_recorded(
        &self,
        form: &RegistrationForm,
    ) -> (RegistrationResult, RegistrationAttempt) {
        submit_recorded(form, self.identity.as_ref()).await
    }
}

#[async_trait]
impl RegistrationService for RegistrationOrchestrator {
    #[instrument(skip_all)]
    async fn submit(&self, form: &RegistrationForm) -> RegistrationResult {
        submit(form, self.identity.as_ref()).await
    }
}
