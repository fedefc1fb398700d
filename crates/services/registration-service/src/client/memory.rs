//! In-process identity provider.
//!
//! Keeps registered emails in memory. Used by the CLI's offline mode and
//! by tests that need a provider with real duplicate detection.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::IdentityService;
use common::{IdentityError, IdentityResult};
use domain::PROVIDER_EMAIL_EXISTS;

/// Identity provider backed by an in-memory set of emails.
#[derive(Debug, Default)]
pub struct InMemoryIdentityService {
    accounts: RwLock<HashSet<String>>,
}

impl InMemoryIdentityService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that already knows these emails
    pub fn with_accounts<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accounts: RwLock::new(emails.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of registered accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl IdentityService for InMemoryIdentityService {
    async fn exists(&self, email: &str) -> IdentityResult<bool> {
        Ok(self.accounts.read().await.contains(email))
    }

    async fn create(&self, email: &str, _password: &str) -> IdentityResult<()> {
        let mut accounts = self.accounts.write().await;

        // Source of truth for uniqueness: a racing submit may pass `exists`
        if !accounts.insert(email.to_string()) {
            return Err(IdentityError::rejected(PROVIDER_EMAIL_EXISTS));
        }

        debug!(total = accounts.len(), "Account stored in memory");
        Ok(())
    }
}
