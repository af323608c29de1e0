//! Disputes service

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Dispute, ListDisputesParams};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const DISPUTES: &str = "/disputes";
const DISPUTE: &str = "/disputes/%1$s";

#[derive(Debug, Clone)]
pub struct Disputes {
    http: Arc<HttpClient>,
}

impl Disputes {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn retrieve(&self, dispute_id: &str) -> Result<Dispute> {
        let request = endpoint(Method::GET, DISPUTE, &[dispute_id])?;
        self.http.send_json(&request).await
    }

    pub async fn list(&self, params: &ListDisputesParams) -> Result<OffsetPage<Dispute>> {
        let request = endpoint(Method::GET, DISPUTES, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }
}
