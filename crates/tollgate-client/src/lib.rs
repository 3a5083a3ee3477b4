//! # tollgate-client
//!
//! HTTP boundary between the token lifecycle core and the upstream API.
//!
//! The core only needs one thing from the upstream: exchange a
//! username/password pair for a bearer token. That operation is expressed as
//! the [`LoginClient`] trait so the cache can be exercised against a mock,
//! with [`ApiClient`] as the reqwest-backed implementation used in
//! production.
//!
//! ## Example
//!
//! ```no_run
//! use secrecy::SecretString;
//! use tollgate_client::{ApiClient, LoginClient};
//! use tollgate_common::ApiConfig;
//!
//! # async fn example() -> Result<(), tollgate_client::ClientError> {
//! let config = ApiConfig::default().with_base_url("http://localhost:8080");
//! let client = ApiClient::new(config)?;
//!
//! let password = SecretString::from("hunter2".to_string());
//! let response = client.login("alice", &password).await?;
//! println!("token issued for {}", response.username);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use secrecy::SecretString;

use tollgate_common::LoginResponse;

pub mod api;
pub mod error;

pub use api::ApiClient;
pub use error::ClientError;

/// The external login operation.
///
/// Implementations must be thread-safe: one client instance is shared by
/// every concurrent caller going through the token cache.
#[async_trait]
pub trait LoginClient: Send + Sync {
    /// Exchange a username/password pair for a bearer token.
    ///
    /// The call is bounded by the implementation's configured timeout and
    /// is never retried here.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the call times out, the transport
    /// fails, the upstream responds with a non-success status, or the
    /// response body cannot be parsed.
    async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, ClientError>;
}

#[async_trait]
impl<T: LoginClient + ?Sized> LoginClient for std::sync::Arc<T> {
    async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, ClientError> {
        (**self).login(username, password).await
    }
}
