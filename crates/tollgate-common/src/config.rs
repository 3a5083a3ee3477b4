//! Configuration for the upstream API.

use std::time::Duration;

use serde::Deserialize;

/// Default base URL for the upstream API.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for the upstream API.
///
/// The timeout bounds every call to the upstream, including the login call
/// used for token refresh. A timeout is reported to callers the same way as
/// any other login failure.
///
/// # Examples
///
/// ```
/// use tollgate_common::ApiConfig;
///
/// let config = ApiConfig::default()
///     .with_base_url("https://api.example.com")
///     .with_timeout_ms(5_000);
///
/// assert_eq!(config.base_url, "https://api.example.com");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the upstream API, without a trailing slash.
    pub base_url: String,
    /// Total request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ApiConfig::default()
            .with_base_url("https://expenses.internal")
            .with_timeout_ms(1_500);
        assert_eq!(config.base_url, "https://expenses.internal");
        assert_eq!(config.timeout(), Duration::from_millis(1_500));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url": "http://api.local:9090"}"#).unwrap();
        assert_eq!(config.base_url, "http://api.local:9090");
        assert_eq!(config.timeout_ms, 30_000);
    }
}
