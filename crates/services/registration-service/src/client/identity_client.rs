//! Identity provider port and its HTTP client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use common::{IdentityClientConfig, IdentityError, IdentityResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lookup route, relative to the provider base URL
const LOOKUP_ROUTE: &str = "accounts:lookup";

/// Sign-up route, relative to the provider base URL
const SIGN_UP_ROUTE: &str = "accounts:signUp";

/// Operations the registration flow needs from the identity provider.
///
/// Retries and timeouts, if any, belong to the implementation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Check whether an account already uses this email
    async fn exists(&self, email: &str) -> IdentityResult<bool>;

    /// Create an account for this email and password
    async fn create(&self, email: &str, password: &str) -> IdentityResult<()>;
}

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    exists: bool,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// HTTP client for a REST identity provider.
#[derive(Clone)]
pub struct HttpIdentityClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpIdentityClient {
    /// Build a client from configuration.
    pub fn new(config: &IdentityClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        debug!("Identity provider at {}", config.endpoint);

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn post(&self, route: &str) -> RequestBuilder {
        let request = self.client.post(format!("{}/{}", self.base_url, route));
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl IdentityService for HttpIdentityClient {
    #[instrument(skip_all)]
    async fn exists(&self, email: &str) -> IdentityResult<bool> {
        let response = self
            .post(LOOKUP_ROUTE)
            .json(&LookupRequest { email })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(extract_error(response).await);
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::unavailable(format!("Invalid lookup response: {}", e)))?;

        debug!(exists = body.exists, "Lookup completed");
        Ok(body.exists)
    }

    #[instrument(skip_all)]
    async fn create(&self, email: &str, password: &str) -> IdentityResult<()> {
        let response = self
            .post(SIGN_UP_ROUTE)
            .json(&SignUpRequest { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(extract_error(response).await);
        }

        debug!("Account created");
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> IdentityError {
    IdentityError::unavailable(err.to_string())
}

/// Turn a non-success response into an error, keeping the provider's message.
async fn extract_error(response: Response) -> IdentityError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if !body.trim().is_empty() => body,
        _ => status.to_string(),
    };

    debug!(status = status.as_u16(), "Identity provider error: {}", message);

    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        IdentityError::Unavailable(message)
    } else {
        IdentityError::Rejected(message)
    }
}
