//! Shared configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identity provider client configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct IdentityClientConfig {
    /// Provider base URL (e.g., "http://localhost:9099/v1")
    pub endpoint: String,
    /// Optional API key sent as a bearer token
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl std::fmt::Debug for IdentityClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl IdentityClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for IdentityClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9099/v1".to_string(),
            api_key: None,
            connect_timeout_ms: 5000,
            request_timeout_ms: 30000,
        }
    }
}
