//! Registration business logic.

mod registration;

pub use registration::{
    submit, submit_recorded, RegistrationAttempt, RegistrationOrchestrator, RegistrationService,
};
