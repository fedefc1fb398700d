//! Registration service configuration.

use std::env;

use common::IdentityClientConfig;

/// Registration service configuration.
#[derive(Debug, Clone)]
pub struct RegistrationServiceConfig {
    /// Identity provider connection settings
    pub identity: IdentityClientConfig,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl RegistrationServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = IdentityClientConfig::default();

        Self {
            identity: IdentityClientConfig {
                endpoint: env::var("IDENTITY_SERVICE_URL")
                    .or_else(|_| env::var("REGISTRATION_SERVICE_IDENTITY_URL"))
                    .unwrap_or(defaults.endpoint),
                api_key: env::var("IDENTITY_API_KEY")
                    .ok()
                    .filter(|key| !key.is_empty()),
                connect_timeout_ms: env::var("IDENTITY_CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.connect_timeout_ms),
                request_timeout_ms: env::var("IDENTITY_REQUEST_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.request_timeout_ms),
            },
            log_level: env::var("REGISTRATION_SERVICE_LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for RegistrationServiceConfig {
    fn default() -> Self {
        Self {
            identity: IdentityClientConfig::default(),
            log_level: "info".to_string(),
        }
    }
}
