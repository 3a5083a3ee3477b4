//! Wire types for the upstream login endpoint.
//!
//! The upstream exchanges a username/password pair for a bearer token plus
//! account metadata. These types mirror that contract exactly; everything
//! else about the token is opaque to this layer.

use serde::{Deserialize, Serialize};

/// Body of a login call.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account identifier.
    pub username: String,
    /// Long-lived password for the account.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to present on protected calls.
    pub token: String,
    /// Username the token was issued for.
    pub username: String,
    /// Email address on the account.
    pub email: String,
}

/// Structured error body returned by the upstream on failures.
///
/// The upstream is not guaranteed to return this shape for every failure,
/// so consumers fall back to the raw response text when it does not parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub message: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_login_request_serializes_both_fields() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "hunter2");
    }

    #[test]
    fn test_login_response_ignores_extra_fields() {
        let body = r#"{"token": "abc.def.ghi", "username": "alice", "email": "a@example.com", "issuedAt": 12345}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.username, "alice");
        assert_eq!(response.email, "a@example.com");
    }

    #[test]
    fn test_error_body_extracts_message() {
        let body = r#"{"timestamp": "2024-01-01T00:00:00", "status": 401, "error": "Unauthorized", "message": "Invalid username or password"}"#;
        let error: ErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(error.message, "Invalid username or password");
    }
}
