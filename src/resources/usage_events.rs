//! Usage event ingestion

use super::endpoint;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models::{IngestEventsParams, IngestEventsResponse, ListEventsParams, UsageEvent};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;
use tracing::debug;

const INGEST: &str = "/events/ingest";
const EVENTS: &str = "/events";
const EVENT: &str = "/events/%1$s";

#[derive(Debug, Clone)]
pub struct UsageEvents {
    http: Arc<HttpClient>,
}

impl UsageEvents {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Send a batch of events
    pub async fn ingest(&self, params: &IngestEventsParams) -> Result<IngestEventsResponse> {
        if params.events.is_empty() {
            return Err(Error::invalid_params("ingest needs at least one event"));
        }
        debug!("Ingesting {} usage events", params.events.len());
        let request = endpoint(Method::POST, INGEST, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn retrieve(&self, event_id: &str) -> Result<UsageEvent> {
        let request = endpoint(Method::GET, EVENT, &[event_id])?;
        self.http.send_json(&request).await
    }

    pub async fn list(&self, params: &ListEventsParams) -> Result<OffsetPage<UsageEvent>> {
        let request = endpoint(Method::GET, EVENTS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }
}
