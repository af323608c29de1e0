//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Dodo Payments API key.
///
/// `Debug` and `Display` never reveal more than the last four characters.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw secret, for building the header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Check if the key is blank
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn redacted(&self) -> String {
        let len = self.0.chars().count();
        if len <= 8 {
            return "****".to_string();
        }
        let tail: String = self.0.chars().skip(len - 4).collect();
        format!("****{tail}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication (only useful against mock servers)
    #[default]
    None,

    /// Bearer token authentication
    Bearer {
        /// The API key sent as the bearer token
        token: ApiKey,
    },
}

impl AuthConfig {
    /// Bearer auth from a key
    pub fn bearer(token: impl Into<ApiKey>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }
}
