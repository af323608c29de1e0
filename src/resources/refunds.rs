//! Refunds service

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{CreateRefundParams, ListRefundsParams, Refund};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const REFUNDS: &str = "/refunds";
const REFUND: &str = "/refunds/%1$s";

/// `/refunds` endpoints
#[derive(Debug, Clone)]
pub struct Refunds {
    http: Arc<HttpClient>,
}

impl Refunds {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Refund a payment, fully or by item
    pub async fn create(&self, params: &CreateRefundParams) -> Result<Refund> {
        let request = endpoint(Method::POST, REFUNDS, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn retrieve(&self, refund_id: &str) -> Result<Refund> {
        let request = endpoint(Method::GET, REFUND, &[refund_id])?;
        self.http.send_json(&request).await
    }

    pub async fn list(&self, params: &ListRefundsParams) -> Result<OffsetPage<Refund>> {
        let request = endpoint(Method::GET, REFUNDS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }
}
