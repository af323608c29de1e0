//! Error types for the Dodo Payments client
//!
//! Every fallible operation in the crate returns `Result<T, Error>`. Callers
//! that want to treat all SDK failures uniformly match on [`Error`]; callers
//! that care about a specific HTTP outcome inspect [`Error::kind`] or the
//! boxed [`ApiError`].

use crate::http::RequestDescriptor;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("{0}")]
    Api(Box<ApiError>),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("No next page: the current page is the last one")]
    NoNextPage,

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid parameters error
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Wrap an API error
    pub fn api(error: ApiError) -> Self {
        Self::Api(Box::new(error))
    }

    /// The API error kind, if this is a status-mapped error
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api(e) => Some(e.kind),
            _ => None,
        }
    }

    /// The HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            Error::Connection(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a transport-level timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Connection(e) if e.is_timeout())
    }

    /// Check if retrying the same request may succeed.
    ///
    /// The client never retries on its own; this is a hint for callers that
    /// wrap invocations in their own policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Connection(_) => true,
            Error::Api(e) => matches!(
                e.kind,
                ApiErrorKind::RateLimit | ApiErrorKind::InternalServer
            ),
            _ => false,
        }
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// API Errors
// ============================================================================

/// Classification of a non-2xx response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401
    Authentication,
    /// 403
    PermissionDenied,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 422
    UnprocessableEntity,
    /// 429
    RateLimit,
    /// Registered server error statuses (500-511)
    InternalServer,
    /// Any other non-2xx status
    ApiStatus,
}

impl ApiErrorKind {
    /// Map an HTTP status code to an error kind
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::RateLimit,
            500..=511 => Self::InternalServer,
            _ => Self::ApiStatus,
        }
    }

    /// Human-readable prefix used in error messages
    pub const fn description(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::Authentication => "Authentication failed",
            Self::PermissionDenied => "Permission denied",
            Self::NotFound => "Not found",
            Self::Conflict => "Conflict",
            Self::UnprocessableEntity => "Unprocessable entity",
            Self::RateLimit => "Rate limit exceeded",
            Self::InternalServer => "Internal server error",
            Self::ApiStatus => "API error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A non-2xx response together with the request that produced it
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error classification derived from `status`
    pub kind: ApiErrorKind,
    /// HTTP status code
    pub status: u16,
    /// The request as issued
    pub request: RequestDescriptor,
    /// Fully resolved URL (base + path + query)
    pub url: String,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded JSON error body, when the body was JSON
    pub body: Option<Value>,
    /// Raw response body
    pub raw_body: String,
}

impl ApiError {
    /// Build an API error from a response's parts
    pub fn new(
        status: u16,
        request: RequestDescriptor,
        url: impl Into<String>,
        headers: HeaderMap,
        raw_body: impl Into<String>,
    ) -> Self {
        let raw_body = raw_body.into();
        let body = serde_json::from_str(&raw_body).ok();
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            request,
            url: url.into(),
            headers,
            body,
            raw_body,
        }
    }

    /// Best-effort error message from the response body
    pub fn message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.get("message").or_else(|| b.get("error")))
            .and_then(Value::as_str)
            .or_else(|| {
                let trimmed = self.raw_body.trim();
                (!trimmed.is_empty() && self.body.is_none()).then_some(trimmed)
            })
    }

    /// Server-side error code, when the body carries one
    pub fn code(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.get("code"))
            .and_then(Value::as_str)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HTTP {}) {} {}",
            self.kind, self.status, self.request.method, self.url
        )?;
        if let Some(message) = self.message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Method;
    use test_case::test_case;

    fn api_error(status: u16, body: &str) -> ApiError {
        ApiError::new(
            status,
            RequestDescriptor::new(Method::GET, "/payments/pay_1"),
            "https://test.dodopayments.com/payments/pay_1",
            HeaderMap::new(),
            body,
        )
    }

    #[test_case(400, ApiErrorKind::BadRequest ; "bad request")]
    #[test_case(401, ApiErrorKind::Authentication ; "authentication")]
    #[test_case(403, ApiErrorKind::PermissionDenied ; "permission denied")]
    #[test_case(404, ApiErrorKind::NotFound ; "not found")]
    #[test_case(409, ApiErrorKind::Conflict ; "conflict")]
    #[test_case(422, ApiErrorKind::UnprocessableEntity ; "unprocessable")]
    #[test_case(429, ApiErrorKind::RateLimit ; "rate limit")]
    #[test_case(500, ApiErrorKind::InternalServer ; "internal")]
    #[test_case(503, ApiErrorKind::InternalServer ; "unavailable")]
    #[test_case(599, ApiErrorKind::ApiStatus ; "unregistered 5xx")]
    #[test_case(418, ApiErrorKind::ApiStatus ; "teapot")]
    #[test_case(302, ApiErrorKind::ApiStatus ; "redirect")]
    fn test_status_mapping(status: u16, expected: ApiErrorKind) {
        assert_eq!(ApiErrorKind::from_status(status), expected);
    }

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::api(api_error(404, r#"{"code":"NOT_FOUND","message":"Payment not found"}"#));
        assert_eq!(
            err.to_string(),
            "Not found (HTTP 404) GET https://test.dodopayments.com/payments/pay_1: Payment not found"
        );
    }

    #[test]
    fn test_api_error_body_decoding() {
        let err = api_error(422, r#"{"code":"INVALID_REQUEST","message":"bad amount"}"#);
        assert_eq!(err.code(), Some("INVALID_REQUEST"));
        assert_eq!(err.message(), Some("bad amount"));

        let err = api_error(502, "upstream unavailable");
        assert!(err.body.is_none());
        assert_eq!(err.message(), Some("upstream unavailable"));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_kind_and_status_accessors() {
        let err = Error::api(api_error(429, ""));
        assert_eq!(err.kind(), Some(ApiErrorKind::RateLimit));
        assert_eq!(err.status(), Some(429));
        assert!(err.is_retryable());

        let err = Error::api(api_error(400, ""));
        assert!(!err.is_retryable());

        assert_eq!(Error::NoNextPage.kind(), None);
        assert!(!Error::NoNextPage.is_retryable());
    }
}
