//! Error types for the login client.

use thiserror::Error;

/// Errors that can occur when calling the upstream login endpoint.
///
/// Every variant counts as a login failure from the token cache's point of
/// view; the distinctions exist so callers can log the cause. None of these
/// are retried internally; retry policy belongs to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network or HTTP transport failure.
    ///
    /// DNS resolution, connection refusal, socket errors, or a response
    /// body that could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization error.
    ///
    /// The login response body did not match the expected shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The login call exceeded the configured timeout.
    #[error("login request timed out")]
    Timeout,

    /// The upstream rejected the login call with a non-success status.
    #[error("login rejected with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the upstream.
        status: u16,
        /// Error detail extracted from the response body.
        message: String,
    },

    /// Client configuration issue, such as an unparseable base URL.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Check if this error was caused by the request timing out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Check if the upstream explicitly rejected the credentials (HTTP 401).
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}
