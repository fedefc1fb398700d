//! Common utilities shared by identity-service adapters.
//!
//! This crate provides:
//! - Identity-service error type and its mapping onto registration failures
//! - Client configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{IdentityError, IdentityResult};
