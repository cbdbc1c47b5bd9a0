//! Backend address configuration
//!
//! The only external setting is the backend base URL, read once from
//! `SDXS_BACKEND_URL` at startup. Nothing is written to disk.

use tracing::{info, warn};
use url::Url;

use sdxs_core::prelude::*;

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "SDXS_BACKEND_URL";

/// Used when the environment does not name a backend
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8001`
    pub base_url: String,
}

impl BackendConfig {
    /// Read the backend URL from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(BACKEND_URL_ENV).ok())
    }

    /// Build from an optional raw value; `None` or blank falls back to the default
    pub fn from_value(raw: Option<String>) -> Result<Self> {
        let raw = match raw.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v,
            _ => {
                warn!(
                    "{} not set, using default backend {}",
                    BACKEND_URL_ENV, DEFAULT_BACKEND_URL
                );
                DEFAULT_BACKEND_URL.to_string()
            }
        };

        let parsed = Url::parse(&raw).map_err(|e| {
            Error::config_invalid(format!("{} is not a valid URL ({}): {}", BACKEND_URL_ENV, e, raw))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "{} must use http or https, got '{}'",
                BACKEND_URL_ENV,
                parsed.scheme()
            )));
        }

        let base_url = raw.trim_end_matches('/').to_string();
        info!("Backend base URL: {}", base_url);
        Ok(Self { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_default() {
        let config = BackendConfig::from_value(None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);

        let config = BackendConfig::from_value(Some("  ".into())).unwrap();
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = BackendConfig::from_value(Some("http://host:1234/".into())).unwrap();
        assert_eq!(config.base_url, "http://host:1234");
    }

    #[test]
    fn test_invalid_url_is_fatal() {
        let err = BackendConfig::from_value(Some("not a url".into())).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = BackendConfig::from_value(Some("ftp://host/".into())).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }
}
