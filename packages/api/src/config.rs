//! # Gateway configuration
//!
//! The only setting is the backend base URL. Resolution order:
//!
//! | Target | Source |
//! |--------|--------|
//! | host | `.env` / process env `BACKEND_URL`, else [`DEFAULT_BACKEND_URL`] |
//! | wasm | `BACKEND_URL` baked in at compile time, else the page origin |
//!
//! An empty variable counts as unset, so a deployment served from the same
//! origin as the backend needs no configuration.

use reqwest::Url;

use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Fallback used for local development.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: Url,
}

impl GatewayConfig {
    /// Parse and validate a base URL. Only `http` and `https` are accepted.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }
        Ok(Self { base_url: url })
    }

    /// Resolve the base URL from the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        match std::env::var(BACKEND_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    /// Resolve the base URL from the build environment or the page origin.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Some(url) = option_env!("BACKEND_URL").filter(|u| !u.trim().is_empty()) {
            return Self::new(url);
        }
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self::new(&origin)
    }

    /// Absolute URL for an API path such as `/api/recipes`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = GatewayConfig::new("https://dishdialog.example.com/").unwrap();
        assert_eq!(
            config.endpoint("/api/recipes"),
            "https://dishdialog.example.com/api/recipes"
        );

        let config = GatewayConfig::new("http://localhost:5000").unwrap();
        assert_eq!(
            config.endpoint("/api/users/login"),
            "http://localhost:5000/api/users/login"
        );
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(matches!(
            GatewayConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(GatewayConfig::new("not a url").is_err());
        assert!(GatewayConfig::new("mailto:chef@example.com").is_err());
    }

    #[test]
    fn test_default_url_is_valid() {
        let config = GatewayConfig::new(DEFAULT_BACKEND_URL).unwrap();
        assert_eq!(config.endpoint("/api/users"), "http://localhost:5000/api/users");
    }
}
