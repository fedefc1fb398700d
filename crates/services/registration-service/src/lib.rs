//! Registration Service Library
//!
//! This crate runs the account registration flow: local validation of the
//! submitted form, then an existence check and account creation against an
//! identity provider.

pub mod cli;
pub mod client;
pub mod config;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::client::{HttpIdentityClient, IdentityService, InMemoryIdentityService};
use crate::config::RegistrationServiceConfig;
use crate::service::RegistrationOrchestrator;

/// Where the orchestrator sends its identity calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityBackend {
    /// Remote provider from configuration
    Http,
    /// In-process provider seeded with existing emails
    InMemory { existing: Vec<String> },
}

/// Build an orchestrator wired to the chosen identity backend.
pub fn build_orchestrator(
    config: &RegistrationServiceConfig,
    backend: IdentityBackend,
) -> Result<RegistrationOrchestrator, reqwest::Error> {
    let identity: Arc<dyn IdentityService> = match backend {
        IdentityBackend::Http => {
            info!("Using identity provider at {}", config.identity.endpoint);
            Arc::new(HttpIdentityClient::new(&config.identity)?)
        }
        IdentityBackend::InMemory { existing } => {
            info!("Using in-memory identity provider ({} accounts)", existing.len());
            Arc::new(InMemoryIdentityService::with_accounts(existing))
        }
    };

    Ok(RegistrationOrchestrator::new(identity))
}
