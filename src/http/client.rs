//! HTTP client
//!
//! Performs exactly one request/response cycle per call:
//! - resolves base URL + path + query
//! - applies default headers and bearer auth
//! - maps non-2xx responses to typed API errors
//! - decodes JSON bodies, or hands back raw bytes for other content types
//!
//! There is no retry loop. Callers decide what to do with a failure.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::request::RequestDescriptor;
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{ApiError, Error, Result};
use crate::types::LIVE_BASE_URL;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: LIVE_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            rate_limit: None,
            default_headers: HashMap::new(),
            user_agent: format!("dodopayments-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client bound to one base URL and one set of credentials
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: HttpClientConfig,
    authenticator: Authenticator,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client without credentials
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Self::with_auth(config, AuthConfig::None)
    }

    /// Create a client with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut defaults = HeaderMap::new();
        defaults.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (key, value) in &config.default_headers {
            defaults.insert(header_name(key)?, header_value(key, value)?);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(defaults)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            base_url,
            config,
            authenticator: Authenticator::new(auth_config),
            rate_limiter,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// The configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Resolve the full URL for a descriptor, query included
    pub fn build_url(&self, request: &RequestDescriptor) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = request.path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send a request and return the successful response.
    ///
    /// Non-2xx statuses become `Error::Api`; transport failures become
    /// `Error::Connection`.
    pub async fn send(&self, request: &RequestDescriptor) -> Result<Response> {
        request.validate()?;
        let url = self.build_url(request)?;

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self
            .client
            .request(request.method.into(), url.clone())
            .headers(request_headers(request)?);

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        req = self.authenticator.apply(req);

        debug!("Sending {} {}", request.method, url);
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            debug!("{} {} -> {}", request.method, url, status.as_u16());
            return Ok(response);
        }

        let headers = response.headers().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "Failed to read error body of {} {}: {}",
                    request.method, url, e
                );
                String::new()
            }
        };
        warn!(
            "Request failed with {}: {} {}",
            status.as_u16(),
            request.method,
            url
        );
        Err(Error::api(ApiError::new(
            status.as_u16(),
            request.clone(),
            url.as_str(),
            headers,
            body,
        )))
    }

    /// Send a request and decode the JSON response body
    pub async fn send_json<T: DeserializeOwned>(&self, request: &RequestDescriptor) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        decode_json(request, &bytes)
    }

    /// Send a request and return the raw body (PDFs and other non-JSON content)
    pub async fn send_raw(&self, request: &RequestDescriptor) -> Result<Bytes> {
        let response = self.send(request).await?;
        Ok(response.bytes().await?)
    }

    /// Send a request whose success response carries no meaningful body
    pub async fn send_empty(&self, request: &RequestDescriptor) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .field("has_authenticator", &self.authenticator.is_configured())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Decode a JSON body, naming the endpoint on failure
fn decode_json<T: DeserializeOwned>(
    request: &RequestDescriptor,
    bytes: &[u8],
) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        Error::decode(format!("{} {}: {e}", request.method, request.path))
    })
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_value(
            "base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

fn header_name(key: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(key.as_bytes())
        .map_err(|_| Error::invalid_params(format!("invalid header name '{key}'")))
}

fn header_value(key: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::invalid_params(format!("invalid value for header '{key}'")))
}

fn request_headers(request: &RequestDescriptor) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (key, values) in &request.headers {
        let name = header_name(key)?;
        for value in values.iter() {
            headers.append(name.clone(), header_value(key, value)?);
        }
    }
    Ok(headers)
}
