//! Static process configuration
//!
//! Loaded from the environment once at startup and passed explicitly into the
//! API client and tool registry constructors. Never mutated afterwards, so
//! concurrent tool invocations can share it freely.

use std::env;

/// Default platform API base URL (versioned REST root)
pub const DEFAULT_API_BASE_URL: &str = "https://api.widgetplatform.com/platform/api/v1";

/// Environment variable holding the account access token
pub const API_TOKEN_ENV: &str = "WIDGETD_API_TOKEN";

/// Environment variable overriding the API base URL (staging, tests)
pub const API_BASE_URL_ENV: &str = "WIDGETD_API_BASE_URL";

/// Immutable gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the platform REST API, without a trailing slash
    pub api_base_url: String,

    /// Account access token forwarded as a bearer credential on every call
    pub api_token: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// A missing token degrades to an empty credential; remote calls will
    /// then fail upstream authentication rather than failing startup.
    pub fn from_env() -> Self {
        let api_token = env::var(API_TOKEN_ENV).unwrap_or_default();
        if api_token.is_empty() {
            log::warn!(
                "{} is not set; platform API calls will be unauthenticated",
                API_TOKEN_ENV
            );
        }

        let api_base_url = env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self::new(api_base_url, api_token)
    }

    /// Build configuration from explicit values (tests, embedding).
    pub fn new(api_base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = Config::new("https://api.example.com/v1/", "token");
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.api_token, "token");
    }

    #[test]
    fn test_new_keeps_clean_url() {
        let config = Config::new("https://api.example.com/v1", "");
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert!(config.api_token.is_empty());
    }
}
