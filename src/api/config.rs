//! API endpoint configuration. The base URL comes from `STOCKROOM_API_URL`
//! (or `--api-url`) and falls back to a local default when unset or blank.
//! Configuration values are public; do not store secrets here.

use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const API_URL_ENV: &str = "STOCKROOM_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported API URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("API URL has no host")]
    MissingHost,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiConfig {
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL with a host.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let raw = normalize_value(base_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        match base_url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        if base_url.host_str().is_none() {
            return Err(ConfigError::MissingHost);
        }

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: crate::APP_USER_AGENT.to_string(),
        })
    }

    /// Reads `STOCKROOM_API_URL`, falling back to `DEFAULT_API_URL`.
    /// # Errors
    /// Returns an error if the configured URL is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(API_URL_ENV).unwrap_or_default();
        Self::new(&value)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join a request path onto the base URL, keeping any base path prefix.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim();

        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back_to_default() {
        assert_eq!(normalize_value("   "), None);
        let config = ApiConfig::new("  ").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn endpoint_joins_paths() {
        let config = ApiConfig::new("https://inventory.example.com/").unwrap();
        assert_eq!(
            config.endpoint("/productos"),
            "https://inventory.example.com/productos"
        );
        assert_eq!(
            config.endpoint("productos/recientes"),
            "https://inventory.example.com/productos/recientes"
        );

        let prefixed = ApiConfig::new("https://example.com/backend").unwrap();
        assert_eq!(
            prefixed.endpoint("/api/v1/dashboard"),
            "https://example.com/backend/api/v1/dashboard"
        );
    }

    #[test]
    fn rejects_unusable_urls() {
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn reads_env_with_fallback() {
        temp_env::with_vars([(API_URL_ENV, Some("http://10.0.0.5:9000"))], || {
            let config = ApiConfig::from_env().unwrap();
            assert_eq!(config.endpoint("/stocks"), "http://10.0.0.5:9000/stocks");
        });

        temp_env::with_vars([(API_URL_ENV, None::<&str>)], || {
            let config = ApiConfig::from_env().unwrap();
            assert_eq!(config.endpoint("/stocks"), "http://localhost:8080/stocks");
        });
    }
}
