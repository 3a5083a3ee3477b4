//! Session facade tying credentials to token refresh.
//!
//! A session-establishment event (for the upstream deployment, a connection
//! handshake carrying two header values) supplies a username and password
//! once; from then on every protected call asks this facade for a bearer
//! token and gets a cached or freshly minted one without touching the
//! password again.

use secrecy::SecretString;

use tollgate_client::LoginClient;

use crate::cache::TokenCache;
use crate::credentials::CredentialStore;
use crate::error::{AuthError, Result};

/// Combines the credential store and token cache behind one entry point.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use tollgate::{ApiClient, ApiConfig, Authenticator};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = ApiClient::new(ApiConfig::default())?;
/// let auth = Authenticator::new(client);
///
/// // Session establishment supplies the credentials once.
/// auth.establish("alice", Some(&SecretString::from("hunter2".to_string())));
///
/// // Every protected call gets a valid bearer token transparently.
/// let token = auth.bearer_token().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Authenticator<C> {
    credentials: CredentialStore,
    tokens: TokenCache<C>,
}

impl<C: LoginClient> Authenticator<C> {
    /// Creates an authenticator with empty credentials and an empty cache.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            credentials: CredentialStore::new(),
            tokens: TokenCache::new(client),
        }
    }

    /// Installs credentials for the session, replacing any existing ones.
    pub fn establish(&self, username: &str, password: Option<&SecretString>) {
        self.credentials.set_credentials(username, password);
    }

    /// Whether usable credentials are installed.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.credentials.has_credentials()
    }

    /// Returns a valid bearer token for the current session.
    ///
    /// Serves from the cache when fresh, otherwise logs in through the
    /// external collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialsNotSet`] if no session is
    /// established, or [`AuthError::LoginFailed`] if the refresh fails.
    pub async fn bearer_token(&self) -> Result<String> {
        if !self.credentials.has_credentials() {
            return Err(AuthError::CredentialsNotSet);
        }
        let username = self.credentials.username()?;
        let secret = self.credentials.secret()?;
        self.tokens.get_valid_token(&username, &secret).await
    }

    /// Tears the session down: wipes credentials and drops the user's
    /// cached token.
    pub fn end_session(&self) {
        if let Ok(username) = self.credentials.username() {
            self.tokens.clear_token(&username);
        }
        self.credentials.clear_credentials();
    }

    /// The credential store backing this session.
    #[must_use]
    pub const fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The token cache backing this session.
    #[must_use]
    pub const fn tokens(&self) -> &TokenCache<C> {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use tollgate_client::ClientError;
    use tollgate_common::LoginResponse;

    use super::*;
    use crate::claims::test_support::token_expiring_at;

    struct StubLogin {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LoginClient for StubLogin {
        async fn login(
            &self,
            username: &str,
            _password: &SecretString,
        ) -> std::result::Result<LoginResponse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(LoginResponse {
                token: token_expiring_at(Utc::now().timestamp() + 3600),
                username: username.to_string(),
                email: format!("{username}@example.com"),
            })
        }
    }

    fn fixture() -> (Arc<StubLogin>, Authenticator<Arc<StubLogin>>) {
        let stub = Arc::new(StubLogin {
            calls: AtomicUsize::new(0),
        });
        (Arc::clone(&stub), Authenticator::new(stub))
    }

    fn password(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[tokio::test]
    async fn test_bearer_token_without_session_fails() {
        let (stub, auth) = fixture();

        let err = auth.bearer_token().await.unwrap_err();
        assert!(matches!(err, AuthError::CredentialsNotSet));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_established_session_yields_cached_token() {
        let (stub, auth) = fixture();
        auth.establish("alice", Some(&password("hunter2")));
        assert!(auth.has_session());

        let first = auth.bearer_token().await.unwrap();
        let second = auth.bearer_token().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_session_with_empty_password_is_unusable() {
        let (stub, auth) = fixture();
        auth.establish("alice", Some(&password("")));

        assert!(!auth.has_session());
        let err = auth.bearer_token().await.unwrap_err();
        assert!(matches!(err, AuthError::CredentialsNotSet));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_end_session_clears_credentials_and_token() {
        let (_stub, auth) = fixture();
        auth.establish("alice", Some(&password("hunter2")));
        auth.bearer_token().await.unwrap();
        assert!(auth.tokens().contains("alice"));

        auth.end_session();

        assert!(!auth.has_session());
        assert!(!auth.tokens().contains("alice"));
        let err = auth.bearer_token().await.unwrap_err();
        assert!(matches!(err, AuthError::CredentialsNotSet));
    }

    #[tokio::test]
    async fn test_reestablish_replaces_identity() {
        let (stub, auth) = fixture();
        auth.establish("alice", Some(&password("hunter2")));
        auth.bearer_token().await.unwrap();

        auth.establish("bob", Some(&password("swordfish")));
        auth.bearer_token().await.unwrap();

        // One login per identity; alice's cached token is untouched.
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
        assert!(auth.tokens().contains("alice"));
        assert!(auth.tokens().contains("bob"));
    }
}
