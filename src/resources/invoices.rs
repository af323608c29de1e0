//! Invoice PDF downloads

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::Method;
use bytes::Bytes;
use std::sync::Arc;

const PAYMENT_INVOICE: &str = "/invoices/payments/%1$s";
const REFUND_INVOICE: &str = "/invoices/refunds/%1$s";

const PDF: &str = "application/pdf";

/// `/invoices` endpoints; bodies are PDF documents, not JSON
#[derive(Debug, Clone)]
pub struct Invoices {
    http: Arc<HttpClient>,
}

impl Invoices {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Invoice PDF for a payment
    pub async fn payment(&self, payment_id: &str) -> Result<Bytes> {
        self.download(PAYMENT_INVOICE, payment_id).await
    }

    /// Credit note PDF for a refund
    pub async fn refund(&self, refund_id: &str) -> Result<Bytes> {
        self.download(REFUND_INVOICE, refund_id).await
    }

    async fn download(&self, template: &str, id: &str) -> Result<Bytes> {
        let request = endpoint(Method::GET, template, &[id])?.header("Accept", PDF);
        self.http.send_raw(&request).await
    }
}
