//! Reqwest-backed implementation of the login operation.
//!
//! One `ApiClient` is built per process from an [`ApiConfig`] and shared by
//! every caller. The configured timeout bounds the whole login round trip;
//! an expired timeout surfaces as [`ClientError::Timeout`] and is treated by
//! callers exactly like any other failed login.

use async_trait::async_trait;
use log::{debug, error, warn};
use secrecy::{ExposeSecret, SecretString};

use tollgate_common::{ApiConfig, ErrorBody, LoginRequest, LoginResponse};

use crate::LoginClient;
use crate::error::ClientError;

/// HTTP client for the upstream API's login endpoint.
///
/// Cheaply cloneable; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the base URL does not
    /// parse, or [`ClientError::Network`] if the underlying HTTP client
    /// fails to build.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        url::Url::parse(&config.base_url).map_err(|e| {
            ClientError::Configuration(format!(
                "invalid base URL {:?}: {e}",
                config.base_url
            ))
        })?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Maps a transport error, distinguishing timeouts from other failures.
    fn map_transport_error(err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Network(err)
        }
    }
}

#[async_trait]
impl LoginClient for ApiClient {
    async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.expose_secret().to_string(),
        };

        debug!("logging in user: {username}");

        let response = self
            .inner
            .post(format!("{}/auth/login", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.map_err(|e| {
                warn!("failed to read login error body: {e}");
                Self::map_transport_error(e)
            })?;

            // Prefer the upstream's structured error body, fall back to raw text.
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .map_or(error_text, |parsed| parsed.message);

            error!("login failed for user {username} with status {status}: {message}");
            return Err(ClientError::Status { status, message });
        }

        let response_text = response.text().await.map_err(Self::map_transport_error)?;
        let parsed: LoginResponse =
            serde_json::from_str(&response_text).map_err(ClientError::Serialization)?;

        debug!("login succeeded for user: {}", parsed.username);
        Ok(parsed)
    }
}
