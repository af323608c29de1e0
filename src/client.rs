//! Client facade
//!
//! [`DodoPayments`] owns one [`HttpClient`] and hands out service handles
//! that share it.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::resources::{
    Customers, Disputes, Invoices, LicenseKeys, Licenses, Meters, Payments, Payouts, Refunds,
    Subscriptions, UsageEvents, Webhooks,
};
use std::sync::Arc;
use tracing::debug;

/// Dodo Payments API client.
///
/// Cloning is cheap; clones share the connection pool and rate limiter.
///
/// ```ignore
/// use dodopayments::{ClientConfig, DodoPayments, Environment};
///
/// let client = DodoPayments::new(
///     ClientConfig::builder()
///         .api_key("sk_test_...")
///         .environment(Environment::TestMode)
///         .build()?,
/// )?;
/// let payment = client.payments().retrieve("pay_123").await?;
/// ```
#[derive(Debug, Clone)]
pub struct DodoPayments {
    http: Arc<HttpClient>,
}

impl DodoPayments {
    /// Build a client from an explicit config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_auth(config.http_config(), config.auth_config())?;
        debug!("Created Dodo Payments client for {}", http.base_url());
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Build a client from `DODO_PAYMENTS_*` variables; the API key is required
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        config.require_api_key()?;
        Self::new(config)
    }

    /// Wrap an existing HTTP client
    pub fn with_http(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// The underlying HTTP client, for calls this crate does not wrap
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    pub fn payments(&self) -> Payments {
        Payments::new(Arc::clone(&self.http))
    }

    pub fn subscriptions(&self) -> Subscriptions {
        Subscriptions::new(Arc::clone(&self.http))
    }

    pub fn invoices(&self) -> Invoices {
        Invoices::new(Arc::clone(&self.http))
    }

    /// Customers; wallets via [`Customers::wallets`]
    pub fn customers(&self) -> Customers {
        Customers::new(Arc::clone(&self.http))
    }

    pub fn refunds(&self) -> Refunds {
        Refunds::new(Arc::clone(&self.http))
    }

    pub fn disputes(&self) -> Disputes {
        Disputes::new(Arc::clone(&self.http))
    }

    pub fn payouts(&self) -> Payouts {
        Payouts::new(Arc::clone(&self.http))
    }

    pub fn licenses(&self) -> Licenses {
        Licenses::new(Arc::clone(&self.http))
    }

    pub fn license_keys(&self) -> LicenseKeys {
        LicenseKeys::new(Arc::clone(&self.http))
    }

    pub fn webhooks(&self) -> Webhooks {
        Webhooks::new(Arc::clone(&self.http))
    }

    pub fn meters(&self) -> Meters {
        Meters::new(Arc::clone(&self.http))
    }

    pub fn usage_events(&self) -> UsageEvents {
        UsageEvents::new(Arc::clone(&self.http))
    }
}
