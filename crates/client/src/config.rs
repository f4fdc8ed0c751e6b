//! Client configuration.

use thiserror::Error;
use url::Url;

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "GOOFYCOIN_API_URL";

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("API URL {0:?} must use http or https")]
    UnsupportedScheme(String),
}

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
}

impl ClientConfig {
    /// Validate `api_url` and normalise away any trailing `/`.
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_url.into();
        let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(raw));
        }

        Ok(Self {
            api_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Read [`API_URL_ENV`], falling back to [`DEFAULT_API_URL`] when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_URL_ENV) {
            Ok(url) => {
                tracing::info!("Using API URL from {}: {}", API_URL_ENV, url);
                Self::new(url)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Endpoint for creating (POST) and listing (GET) users.
    pub fn user_endpoint(&self) -> String {
        format!("{}/user", self.api_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.user_endpoint(), "http://localhost:8080/user");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://127.0.0.1:9000/").unwrap();
        assert_eq!(config.api_url(), "http://127.0.0.1:9000");
        assert_eq!(config.user_endpoint(), "http://127.0.0.1:9000/user");
    }

    #[test]
    fn keeps_a_path_prefix() {
        let config = ClientConfig::new("https://example.test/api").unwrap();
        assert_eq!(config.user_endpoint(), "https://example.test/api/user");
    }

    // The only test touching API_URL_ENV, so set/remove cannot race another
    // reader in this binary.
    #[test]
    fn from_env_reads_the_override_and_falls_back_when_unset() {
        // SAFETY: no other test in this process reads or writes API_URL_ENV.
        unsafe { std::env::set_var(API_URL_ENV, "http://ledger.test:9090/") };
        let configured = ClientConfig::from_env();

        // SAFETY: as above.
        unsafe { std::env::remove_var(API_URL_ENV) };
        let fallback = ClientConfig::from_env();

        let configured = configured.unwrap();
        assert_eq!(configured.api_url(), "http://ledger.test:9090");
        assert_eq!(configured.user_endpoint(), "http://ledger.test:9090/user");
        assert_eq!(fallback, Ok(ClientConfig::default()));
    }

    #[test]
    fn rejects_garbage_and_non_http_schemes() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert_eq!(
            ClientConfig::new("ftp://example.test"),
            Err(ConfigError::UnsupportedScheme("ftp://example.test".to_string()))
        );
    }
}
