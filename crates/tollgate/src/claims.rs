//! Token freshness checking.
//!
//! A bearer token with three dot-separated segments carries its own
//! expiration claim in the base64url-encoded middle segment. This module
//! reads that claim and nothing else: no signature verification, no other
//! claims. The signature was already verified by the party that issued the
//! token; this check is cache hygiene, not authentication.
//!
//! Anything that cannot be read as an expiration claim (wrong segment
//! count, undecodable payload, missing or non-integer `exp`) is reported
//! as stale. That downgrades a malformed token to a cache miss rather than
//! a caller-visible failure: the next step is a refresh either way.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use log::{debug, warn};
use serde::Deserialize;

/// Tokens expiring within this many seconds are treated as already stale.
///
/// The buffer absorbs clock skew and the latency of the request the token
/// is about to be attached to.
pub const REFRESH_BUFFER_SECS: i64 = 60;

/// The only claim this layer reads from the token payload.
#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// Whether a token must be refreshed before use.
///
/// Returns `true` when the token's claimed expiration is less than
/// [`REFRESH_BUFFER_SECS`] away, or when the token cannot be parsed at all.
/// Never fails: an unreadable token is simply stale.
#[must_use]
pub fn is_stale(token: &str) -> bool {
    match remaining_validity(token) {
        Some(remaining) => {
            let stale = remaining < REFRESH_BUFFER_SECS;
            if stale {
                debug!("token expired or expiring soon, {remaining}s remaining");
            }
            stale
        }
        None => true,
    }
}

/// Seconds until the token's claimed expiration, or `None` if unreadable.
fn remaining_validity(token: &str) -> Option<i64> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        warn!(
            "invalid token format: expected 3 segments, got {}",
            segments.len()
        );
        return None;
    }

    let payload = match URL_SAFE_NO_PAD.decode(segments[1]) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("token payload is not valid base64url: {err}");
            return None;
        }
    };

    let claims: Claims = match serde_json::from_slice(&payload) {
        Ok(claims) => claims,
        Err(err) => {
            warn!("no usable exp claim in token payload: {err}");
            return None;
        }
    };

    Some(claims.exp - Utc::now().timestamp())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Engine, URL_SAFE_NO_PAD};

    /// Builds a three-segment token whose payload carries the given claims.
    pub fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    /// Builds a token expiring at the given epoch second.
    pub fn token_expiring_at(exp: i64) -> String {
        token_with_payload(&format!(r#"{{"sub":"user","exp":{exp}}}"#))
    }
}
