//! Domain layer - Registration rules and value objects.
//!
//! This crate contains pure validation logic with no infrastructure dependencies.
//! The registration service and any UI layer share these types.

pub mod constants;
pub mod error;
pub mod password;
pub mod registration;
pub mod validation;

pub use constants::*;
pub use error::ValidationErrorKind;
pub use password::{PasswordStrength, StrengthReport};
pub use registration::{RegistrationForm, RegistrationResult, RegistrationState, ValidationOutcome};
pub use validation::{check_password_strength, validate_email, validate_form};
