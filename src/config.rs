//! Client configuration
//!
//! `ClientConfig` is read from a YAML file, then overridden by environment
//! variables, then by CLI flags. Every field has a default so an empty file
//! (or no file) is a valid configuration once a base URL is supplied.

use crate::auth::{AuthConfig, Session};
use crate::catalog::DEFAULT_FILTER_OPTIONS_TTL;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::query::QueryOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `base_url`
pub const ENV_BASE_URL: &str = "MOTO_CATALOG_BASE_URL";
/// Environment variable supplying a bearer token
pub const ENV_TOKEN: &str = "MOTO_CATALOG_TOKEN";
/// Environment variable overriding `timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "MOTO_CATALOG_TIMEOUT_SECS";

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for talking to the catalog backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `https://api.example.com/v1`
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Fetch pages past the first
    pub infinite_scroll: bool,

    /// How long filter options stay cached
    pub filter_options_ttl_secs: u64,

    /// User agent override
    pub user_agent: Option<String>,

    /// Authentication
    pub auth: AuthConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
            infinite_scroll: true,
            filter_options_ttl_secs: DEFAULT_FILTER_OPTIONS_TTL.as_secs(),
            user_agent: None,
            auth: AuthConfig::None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = Some(url);
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.auth = AuthConfig::bearer(token);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::config(format!("{ENV_TIMEOUT_SECS} must be a whole number, got '{raw}'"))
            })?;
        }
        Ok(())
    }

    /// Check the configuration is usable for network calls
    pub fn validate(&self) -> Result<()> {
        let base_url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                Error::config(format!(
                    "base_url is not set (use --base-url, {ENV_BASE_URL} or the config file)"
                ))
            })?;

        let parsed = url::Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }

        Ok(())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Filter options cache lifetime
    pub fn filter_options_ttl(&self) -> Duration {
        Duration::from_secs(self.filter_options_ttl_secs)
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().timeout(self.timeout());
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.trim());
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Session carrying the configured credentials
    pub fn session(&self) -> Session {
        Session::new(self.auth.clone())
    }

    /// Query options derived from this config
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            infinite: self.infinite_scroll,
        }
    }
}
