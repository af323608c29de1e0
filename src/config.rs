//! Client configuration
//!
//! A [`ClientConfig`] can be built in code, read from the environment, or
//! loaded from a YAML/JSON file. Sources compose: a file can be loaded first
//! and environment variables applied on top.
//!
//! ```yaml
//! api_key: sk_test_...
//! environment: test_mode
//! timeout_secs: 30
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 5
//! ```

use crate::auth::{ApiKey, AuthConfig};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::Environment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// API key variable
pub const ENV_API_KEY: &str = "DODO_PAYMENTS_API_KEY";
/// Base URL override variable
pub const ENV_BASE_URL: &str = "DODO_PAYMENTS_BASE_URL";
/// Environment selector variable (`live_mode` | `test_mode`)
pub const ENV_ENVIRONMENT: &str = "DODO_PAYMENTS_ENVIRONMENT";

/// Everything needed to construct a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Secret API key sent as a bearer token
    pub api_key: Option<ApiKey>,

    /// Live or test environment
    pub environment: Environment,

    /// Explicit base URL; overrides `environment`
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Headers added to every request
    pub default_headers: HashMap<String, String>,

    /// Optional client-side rate limit
    pub rate_limit: Option<RateLimiterConfig>,

    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            environment: Environment::default(),
            base_url: None,
            timeout_secs: 60,
            default_headers: HashMap::new(),
            rate_limit: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment variables looked up through `lookup` on top of `self`.
    ///
    /// Empty values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(ApiKey::new(key.trim()));
        }
        if let Some(env) = get(ENV_ENVIRONMENT) {
            self.environment = env.parse()?;
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = Some(url.trim().to_string());
        }
        Ok(self)
    }

    /// Load from a file: `.json` is read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!("Loading client config from {}", path.display());
        let config: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Base URL actually used: the override, or the environment's
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Bearer auth when a non-empty key is set
    pub fn auth_config(&self) -> AuthConfig {
        match &self.api_key {
            Some(key) if !key.is_empty() => AuthConfig::bearer(key.clone()),
            _ => AuthConfig::None,
        }
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.resolved_base_url())
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(limit) = self.rate_limit {
            builder = builder.rate_limit(limit);
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder.build()
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }

        if let Some(raw) = &self.base_url {
            let url = Url::parse(raw)
                .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::invalid_value(
                    "base_url",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
        }

        if self.api_key.as_ref().is_some_and(ApiKey::is_empty) {
            return Err(Error::invalid_value("api_key", "must not be empty"));
        }

        if let Some(limit) = &self.rate_limit {
            if limit.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "rate_limit.requests_per_second",
                    "must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Fail unless an API key is configured
    pub fn require_api_key(&self) -> Result<&ApiKey> {
        self.api_key
            .as_ref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::missing_field(ENV_API_KEY))
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Select live or test mode
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Override the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Enable client-side rate limiting
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
