//! Payouts service

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ListPayoutsParams, Payout};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const PAYOUTS: &str = "/payouts";

#[derive(Debug, Clone)]
pub struct Payouts {
    http: Arc<HttpClient>,
}

impl Payouts {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self, params: &ListPayoutsParams) -> Result<OffsetPage<Payout>> {
        let request = endpoint(Method::GET, PAYOUTS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }
}
