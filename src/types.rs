//! Common types used throughout the client
//!
//! Shared type aliases, the HTTP method enum and the API environment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl Method {
    /// Upper-case verb as it appears on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Live base URL
pub const LIVE_BASE_URL: &str = "https://live.dodopayments.com";

/// Test base URL
pub const TEST_BASE_URL: &str = "https://test.dodopayments.com";

/// Which Dodo Payments environment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Real money
    #[default]
    LiveMode,
    /// Sandbox
    TestMode,
}

impl Environment {
    /// Base URL for this environment
    pub const fn base_url(self) -> &'static str {
        match self {
            Environment::LiveMode => LIVE_BASE_URL,
            Environment::TestMode => TEST_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live_mode" | "live" => Ok(Environment::LiveMode),
            "test_mode" | "test" => Ok(Environment::TestMode),
            other => Err(crate::error::Error::invalid_value(
                "environment",
                format!("expected live_mode or test_mode, got '{other}'"),
            )),
        }
    }
}
