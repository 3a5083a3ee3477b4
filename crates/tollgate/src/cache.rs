//! Concurrent bearer-token cache with transparent refresh.
//!
//! The cache maps a username to its most recently issued bearer token and
//! answers one question: "give me a token for this user that is valid for
//! at least a short grace window." A fresh cached token is returned as-is
//! with no network call; a stale, missing, or unreadable one triggers a
//! login against the upstream and a whole-entry replacement.
//!
//! ## Concurrency
//!
//! Entries are only ever inserted, replaced wholesale, or removed, never
//! mutated in place, so a concurrent reader can never observe a
//! half-updated entry. Two callers that race on the same just-expired
//! username may both log in; that duplicate is tolerated, the last write
//! wins, and both callers receive a valid token. The cost is one extra
//! idempotent round trip, not a correctness violation.

use dashmap::DashMap;
use log::{debug, info};
use secrecy::SecretString;

use tollgate_client::LoginClient;

use crate::claims;
use crate::error::Result;

/// A cached bearer token for one username.
///
/// Opaque except for the expiration claim read by [`claims::is_stale`].
/// Replaced atomically, never mutated.
#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
}

/// Username-keyed token cache backed by the external login operation.
///
/// Shared by every concurrent caller; lookups and stale checks are
/// in-memory, and only the login call itself suspends.
#[derive(Debug)]
pub struct TokenCache<C> {
    client: C,
    tokens: DashMap<String, CachedToken>,
}

impl<C: LoginClient> TokenCache<C> {
    /// Creates an empty cache that refreshes through the given client.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            tokens: DashMap::new(),
        }
    }

    /// Returns a bearer token for `username`, refreshing if needed.
    ///
    /// A cached token that is not stale is returned unchanged without any
    /// network call. Otherwise the external login operation is awaited,
    /// bounded by the client's configured timeout, and its result replaces
    /// any prior entry for the username.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::LoginFailed`](crate::AuthError::LoginFailed) if
    /// the login call errors, times out, or returns an unparseable body.
    /// The cache is left untouched on failure so a later call can retry.
    pub async fn get_valid_token(&self, username: &str, secret: &SecretString) -> Result<String> {
        // Clone the token out rather than holding a map guard across the
        // stale check and the later insert.
        let cached = self.tokens.get(username).map(|entry| entry.token.clone());
        if let Some(token) = cached
            && !claims::is_stale(&token)
        {
            debug!("using cached token for user: {username}");
            return Ok(token);
        }

        info!("token stale or missing for user: {username}, refreshing");
        let response = self.client.login(username, secret).await?;

        self.tokens.insert(
            username.to_string(),
            CachedToken {
                token: response.token.clone(),
            },
        );
        info!("token refreshed for user: {username}");
        Ok(response.token)
    }

    /// Removes all cached tokens.
    pub fn clear_cache(&self) {
        self.tokens.clear();
        info!("token cache cleared");
    }

    /// Removes the cached token for one username, if present.
    pub fn clear_token(&self, username: &str) {
        if self.tokens.remove(username).is_some() {
            info!("token cleared for user: {username}");
        }
    }

    /// Whether a token is cached for `username`, stale or not.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.tokens.contains_key(username)
    }
}
