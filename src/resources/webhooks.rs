//! Webhook endpoint management

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    CreateWebhookParams, ListWebhooksParams, UpdateWebhookParams, WebhookEndpoint, WebhookSecret,
};
use crate::pagination::{CursorPage, Page};
use crate::types::Method;
use std::sync::Arc;

const WEBHOOKS: &str = "/webhooks";
const WEBHOOK: &str = "/webhooks/%1$s";
const SECRET: &str = "/webhooks/%1$s/secret";

/// `/webhooks` endpoints
#[derive(Debug, Clone)]
pub struct Webhooks {
    http: Arc<HttpClient>,
}

impl Webhooks {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn create(&self, params: &CreateWebhookParams) -> Result<WebhookEndpoint> {
        let request = endpoint(Method::POST, WEBHOOKS, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn retrieve(&self, webhook_id: &str) -> Result<WebhookEndpoint> {
        let request = endpoint(Method::GET, WEBHOOK, &[webhook_id])?;
        self.http.send_json(&request).await
    }

    pub async fn update(
        &self,
        webhook_id: &str,
        params: &UpdateWebhookParams,
    ) -> Result<WebhookEndpoint> {
        let request = endpoint(Method::PATCH, WEBHOOK, &[webhook_id])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<()> {
        let request = endpoint(Method::DELETE, WEBHOOK, &[webhook_id])?;
        self.http.send_empty(&request).await
    }

    /// First page of endpoints (cursor paginated)
    pub async fn list(&self, params: &ListWebhooksParams) -> Result<CursorPage<WebhookEndpoint>> {
        let request = endpoint(Method::GET, WEBHOOKS, &[])?.query_params(params)?;
        CursorPage::fetch(Arc::clone(&self.http), request).await
    }

    /// Signing secret used for deliveries to this endpoint
    pub async fn secret(&self, webhook_id: &str) -> Result<WebhookSecret> {
        let request = endpoint(Method::GET, SECRET, &[webhook_id])?;
        self.http.send_json(&request).await
    }
}
