//! Webhook delivery types

use super::{WEBHOOK_ID, WEBHOOK_SIGNATURE, WEBHOOK_TIMESTAMP};
use crate::error::{Error, Result};
use crate::models::{Dispute, LicenseKey, Payment, Refund, Subscription, WebhookEventType};
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Envelope of every delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub business_id: String,
    pub data: WebhookData,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
}

impl WebhookPayload {
    /// True when the `data` variant belongs to the event's namespace
    /// (`payment.*` carries a payment, and so on). Unknown data never matches.
    pub fn is_consistent(&self) -> bool {
        self.data
            .namespace()
            .is_some_and(|ns| ns == self.event_type.namespace())
    }
}

/// Resource carried by a delivery, tagged by `payload_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "payload_type")]
pub enum WebhookData {
    Payment(Box<Payment>),
    Subscription(Box<Subscription>),
    Refund(Refund),
    Dispute(Dispute),
    LicenseKey(LicenseKey),
    /// A payload type this client does not know
    #[serde(other)]
    Unknown,
}

impl WebhookData {
    /// Event namespace matching this variant
    pub fn namespace(&self) -> Option<&'static str> {
        match self {
            Self::Payment(_) => Some("payment"),
            Self::Subscription(_) => Some("subscription"),
            Self::Refund(_) => Some("refund"),
            Self::Dispute(_) => Some("dispute"),
            Self::LicenseKey(_) => Some("license_key"),
            Self::Unknown => None,
        }
    }

    pub fn as_payment(&self) -> Option<&Payment> {
        match self {
            Self::Payment(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_subscription(&self) -> Option<&Subscription> {
        match self {
            Self::Subscription(s) => Some(s),
            _ => None,
        }
    }
}

/// Identifying headers of a delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookHeaders {
    pub id: String,
    pub signature: String,
    pub timestamp: String,
}

impl WebhookHeaders {
    /// Extract the three webhook headers; any missing one is an error
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        Ok(Self {
            id: required(headers, WEBHOOK_ID)?,
            signature: required(headers, WEBHOOK_SIGNATURE)?,
            timestamp: required(headers, WEBHOOK_TIMESTAMP)?,
        })
    }

    /// Send time, if the timestamp header is valid unix seconds
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Individual `version,signature` entries of the signature header
    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.signature.split_whitespace()
    }
}

fn required(headers: &HeaderMap, name: &str) -> Result<String> {
    let value = headers
        .get(name)
        .ok_or_else(|| Error::invalid_params(format!("missing header '{name}'")))?;
    value
        .to_str()
        .map(str::to_string)
        .map_err(|_| Error::invalid_params(format!("header '{name}' is not valid ASCII")))
}
