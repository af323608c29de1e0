//! Webhook receipt
//!
//! Types for decoding deliveries sent to a webhook endpoint. A delivery is a
//! JSON envelope whose `data` object is discriminated by `payload_type`,
//! plus three headers identifying the message.
//!
//! Signatures are not verified here; `WebhookHeaders` only extracts the
//! values so a verifier can be applied by the caller.

mod types;

pub use types::{WebhookData, WebhookHeaders, WebhookPayload};

use crate::error::{Error, Result};
use tracing::debug;

/// Header carrying the unique message id
pub const WEBHOOK_ID: &str = "webhook-id";
/// Header carrying the signature list
pub const WEBHOOK_SIGNATURE: &str = "webhook-signature";
/// Header carrying the send time in unix seconds
pub const WEBHOOK_TIMESTAMP: &str = "webhook-timestamp";

/// Decode a delivery body
pub fn parse_payload(body: &[u8]) -> Result<WebhookPayload> {
    let payload: WebhookPayload = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("webhook payload: {e}")))?;
    debug!(
        "Received webhook {} for business {}",
        payload.event_type, payload.business_id
    );
    Ok(payload)
}

#[cfg(test)]
mod tests;
