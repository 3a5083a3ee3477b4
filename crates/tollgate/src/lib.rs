//! # tollgate
//!
//! Credential storage and transparent bearer-token caching for a
//! downstream HTTP API.
//!
//! Callers hand over a long-lived username/password pair once per session;
//! tollgate issues, caches, and refreshes the short-lived bearer token that
//! every subsequent call to the upstream API needs. Two components do the
//! work, in dependency order:
//!
//! - [`CredentialStore`]: holds exactly one set of credentials at a time,
//!   with explicit wipe-before-release handling of the password buffer.
//! - [`TokenCache`]: maps a username to its cached bearer token, checks the
//!   token's own expiration claim before reuse, and logs in through the
//!   external collaborator when the cached token is stale, missing, or
//!   unreadable.
//!
//! [`Authenticator`] ties the two together behind a single entry point for
//! request handlers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use secrecy::SecretString;
//! use tollgate::{ApiClient, ApiConfig, Authenticator};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ApiConfig::default().with_base_url("http://localhost:8080");
//! let auth = Authenticator::new(ApiClient::new(config)?);
//!
//! auth.establish("alice", Some(&SecretString::from("hunter2".to_string())));
//!
//! // Fresh cached tokens are returned without a network call; stale or
//! // missing ones trigger a login against the upstream.
//! let token = auth.bearer_token().await?;
//! println!("Authorization: Bearer {token}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//!
//! - [`AuthError::CredentialsNotSet`]: no session established; recover by
//!   establishing one.
//! - [`AuthError::LoginFailed`]: the upstream login errored, timed out, or
//!   returned an unparseable body; the cache is left unchanged and nothing
//!   is retried internally.
//! - A malformed token is never an error: it is treated as expired and
//!   silently refreshed.

pub mod cache;
pub mod claims;
pub mod credentials;
pub mod error;
pub mod session;

pub use tollgate_client::{ApiClient, ClientError, LoginClient};
pub use tollgate_common::{ApiConfig, ErrorBody, LoginRequest, LoginResponse};

pub use cache::TokenCache;
pub use credentials::CredentialStore;
pub use error::{AuthError, Result};
pub use session::Authenticator;
