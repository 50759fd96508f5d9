//! Client configuration
//!
//! Token resolution and the fixed parts of every GitHub request.

use crate::error::{Error, Result};

/// Environment variable holding the fallback bearer token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub const API_VERSION: &str = "2022-11-28";

pub const ACCEPT: &str = "application/vnd.github+json";

pub const USER_AGENT: &str = concat!("ghreport/", env!("CARGO_PKG_VERSION"));

/// Settings needed to build a [`crate::GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: String,
    pub user_agent: String,
}

impl ClientConfig {
    /// Build a config from an optional explicit token, falling back to `GITHUB_TOKEN`
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self> {
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: resolve_token(token)?,
            user_agent: USER_AGENT.to_string(),
        })
    }
}

/// Resolve the bearer token: explicit argument first, then the environment
pub fn resolve_token(explicit: Option<String>) -> Result<String> {
    resolve_token_from(explicit, std::env::var(TOKEN_ENV).ok())
}

/// Empty strings count as absent.
pub fn resolve_token_from(explicit: Option<String>, env_value: Option<String>) -> Result<String> {
    explicit
        .filter(|t| !t.trim().is_empty())
        .or_else(|| env_value.filter(|t| !t.trim().is_empty()))
        .ok_or(Error::MissingToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_token_wins() {
        let token = resolve_token_from(Some("abc".into()), Some("env".into())).unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn test_env_fallback() {
        let token = resolve_token_from(None, Some("env".into())).unwrap();
        assert_eq!(token, "env");
    }

    #[test]
    fn test_empty_explicit_falls_back_to_env() {
        let token = resolve_token_from(Some(String::new()), Some("env".into())).unwrap();
        assert_eq!(token, "env");
    }

    #[test]
    fn test_missing_token() {
        let err = resolve_token_from(None, None).unwrap_err();
        assert!(matches!(err, Error::MissingToken));

        let err = resolve_token_from(Some("  ".into()), Some(String::new())).unwrap_err();
        assert!(matches!(err, Error::MissingToken));
    }

    #[test]
    fn test_client_config_trims_api_url() {
        let config = ClientConfig::new("https://ghe.example.com/api/v3/", Some("t".into())).unwrap();
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert!(config.user_agent.starts_with("ghreport/"));
    }
}
