//! Error types for the token lifecycle core.

use thiserror::Error;

use tollgate_client::ClientError;

/// Errors surfaced by the credential store and token cache.
///
/// Neither variant is fatal to the process: callers are expected to fail
/// the single request in flight and keep serving others. Neither is retried
/// internally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// No credentials are installed.
    ///
    /// Raised when a username or secret is requested before a session has
    /// been established, or after it has been torn down. Recoverable by
    /// re-establishing the session.
    #[error("no credentials installed")]
    CredentialsNotSet,

    /// The external login call failed.
    ///
    /// Carries the underlying client error so callers can log the cause.
    /// The token cache is left untouched, so a later call retries the
    /// refresh.
    #[error("login failed: {0}")]
    LoginFailed(#[from] ClientError),
}

/// Result type alias using [`AuthError`].
pub type Result<T> = std::result::Result<T, AuthError>;
