//! Payments service

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    CreatePaymentParams, CreatePaymentResponse, ListPaymentsParams, Payment, PaymentLineItems,
    PaymentListItem,
};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const PAYMENTS: &str = "/payments";
const PAYMENT: &str = "/payments/%1$s";
const LINE_ITEMS: &str = "/payments/%1$s/line-items";

/// `/payments` endpoints
#[derive(Debug, Clone)]
pub struct Payments {
    http: Arc<HttpClient>,
}

impl Payments {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Create a one-time payment
    pub async fn create(&self, params: &CreatePaymentParams) -> Result<CreatePaymentResponse> {
        let request = endpoint(Method::POST, PAYMENTS, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn retrieve(&self, payment_id: &str) -> Result<Payment> {
        let request = endpoint(Method::GET, PAYMENT, &[payment_id])?;
        self.http.send_json(&request).await
    }

    /// First page of payments matching `params`
    pub async fn list(&self, params: &ListPaymentsParams) -> Result<OffsetPage<PaymentListItem>> {
        let request = endpoint(Method::GET, PAYMENTS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }

    /// Itemized breakdown of a payment
    pub async fn line_items(&self, payment_id: &str) -> Result<PaymentLineItems> {
        let request = endpoint(Method::GET, LINE_ITEMS, &[payment_id])?;
        self.http.send_json(&request).await
    }
}
