//! Webhook endpoint models (management API, not delivery payloads)

use super::common::Metadata;
use super::enums::WebhookEventType;
use crate::codec::{FieldMap, Omittable, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: Option<bool>,
    /// Empty means every event type is delivered
    #[serde(default)]
    pub filter_types: Option<Vec<WebhookEventType>>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub rate_limit: Option<u32>,
}

/// Body of `POST /webhooks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateWebhookParams {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_types: Vec<WebhookEventType>,
    /// Extra headers sent with every delivery
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<u32>,
}

impl CreateWebhookParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Only deliver this event type (may be called repeatedly)
    #[must_use]
    pub fn filter(mut self, event_type: impl Into<WebhookEventType>) -> Self {
        self.filter_types.push(event_type.into());
        self
    }
}

impl Params for CreateWebhookParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("filterTypes", "filter_types"),
        ("idempotencyKey", "idempotency_key"),
        ("rateLimit", "rate_limit"),
    ]);
}

/// Body of `PATCH /webhooks/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateWebhookParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub description: Omittable<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub disabled: Omittable<bool>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub filter_types: Omittable<Vec<WebhookEventType>>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub metadata: Omittable<Metadata>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub rate_limit: Omittable<u32>,
}

impl Params for UpdateWebhookParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("filterTypes", "filter_types"),
        ("rateLimit", "rate_limit"),
    ]);
}

/// Query of `GET /webhooks` (cursor paginated)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWebhooksParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterator: Option<String>,
}

impl Params for ListWebhooksParams {}

/// Signing secret of an endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSecret {
    pub secret: String,
}

impl std::fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSecret").finish_non_exhaustive()
    }
}
