//! In-memory storage for the session's credentials.
//!
//! The store holds exactly one identity at a time, installed by a
//! session-establishment event and consumed by the token cache whenever a
//! refresh is needed. The password is the most sensitive piece of state in
//! the process, so the store never hands out its own buffer: readers get an
//! independent copy, and every path that stops owning a secret overwrites
//! it in place before releasing it.
//!
//! # Security
//!
//! Secrets are held in a [`Zeroizing`] buffer and wiped explicitly on
//! replacement and clear, in addition to the zeroize-on-drop safety net.
//! Copies returned to callers are [`SecretString`]s, which zero their own
//! backing memory when dropped.
//!
//! # Single-tenant caveat
//!
//! There is one store for the whole process, not one per concurrent caller.
//! A later `set_credentials` silently replaces an in-flight caller's
//! identity. That matches the upstream deployment assumption of one user
//! per server instance; it is a correctness risk if concurrent sessions for
//! different users are ever expected.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::info;
use secrecy::{ExposeSecret, SecretString};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{AuthError, Result};

/// The stored identity: a username and its password buffer.
struct Identity {
    username: String,
    secret: Zeroizing<String>,
}

/// Holds one identity's credentials between session establishment and use.
///
/// All operations are serialized behind a single mutex so a concurrent
/// replacement can never expose a half-written or released buffer to a
/// reader.
#[derive(Default)]
pub struct CredentialStore {
    slot: Mutex<Option<Identity>>,
}

impl CredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<Identity>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs credentials, replacing any existing ones.
    ///
    /// An absent or empty secret is accepted; it leaves the store in a
    /// state where [`has_credentials`](Self::has_credentials) is `false`.
    /// Any previously stored secret is overwritten in place before its
    /// buffer is released.
    pub fn set_credentials(&self, username: impl Into<String>, secret: Option<&SecretString>) {
        let username = username.into();
        let secret = secret.map_or_else(Zeroizing::default, |s| {
            Zeroizing::new(s.expose_secret().to_string())
        });

        let mut slot = self.slot();
        if let Some(mut old) = slot.take() {
            old.secret.zeroize();
        }
        info!("credentials set for user: {username}");
        *slot = Some(Identity { username, secret });
    }

    /// Returns the stored username.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialsNotSet`] if no credentials are
    /// installed.
    pub fn username(&self) -> Result<String> {
        self.slot()
            .as_ref()
            .map(|identity| identity.username.clone())
            .ok_or(AuthError::CredentialsNotSet)
    }

    /// Returns an independent copy of the stored secret.
    ///
    /// The copy has its own backing buffer: zeroing it cannot corrupt the
    /// store's buffer, and clearing the store cannot corrupt the copy.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialsNotSet`] if no credentials are
    /// installed or the stored secret is empty.
    pub fn secret(&self) -> Result<SecretString> {
        match self.slot().as_ref() {
            Some(identity) if !identity.secret.is_empty() => {
                Ok(SecretString::from(identity.secret.as_str().to_string()))
            }
            _ => Err(AuthError::CredentialsNotSet),
        }
    }

    /// Whether a username and a non-empty secret are currently installed.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|identity| !identity.secret.is_empty())
    }

    /// Overwrites the secret buffer in place, then clears both fields.
    ///
    /// Idempotent.
    pub fn clear_credentials(&self) {
        let mut slot = self.slot();
        if let Some(mut old) = slot.take() {
            old.secret.zeroize();
            info!("credentials cleared");
        }
    }
}

// Custom Debug implementation to avoid exposing the secret
impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot();
        f.debug_struct("CredentialStore")
            .field("username", &slot.as_ref().map(|id| id.username.as_str()))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
