//! Customers and customer wallets

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    CreateCustomerParams, CreateLedgerEntryParams, Customer, CustomerPortalSession,
    CustomerWallet, CustomerWallets, LedgerEntry, ListCustomersParams, ListLedgerEntriesParams,
    UpdateCustomerParams,
};
use crate::pagination::{CursorPage, OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const CUSTOMERS: &str = "/customers";
const CUSTOMER: &str = "/customers/%1$s";
const PORTAL_SESSION: &str = "/customers/%1$s/customer-portal/session";
const WALLETS: &str = "/customers/%1$s/wallets";
const LEDGER_ENTRIES: &str = "/customers/%1$s/wallets/ledger-entries";

/// `/customers` endpoints
#[derive(Debug, Clone)]
pub struct Customers {
    http: Arc<HttpClient>,
}

impl Customers {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn create(&self, params: &CreateCustomerParams) -> Result<Customer> {
        let request = endpoint(Method::POST, CUSTOMERS, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn retrieve(&self, customer_id: &str) -> Result<Customer> {
        let request = endpoint(Method::GET, CUSTOMER, &[customer_id])?;
        self.http.send_json(&request).await
    }

    pub async fn update(
        &self,
        customer_id: &str,
        params: &UpdateCustomerParams,
    ) -> Result<Customer> {
        let request = endpoint(Method::PATCH, CUSTOMER, &[customer_id])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn list(&self, params: &ListCustomersParams) -> Result<OffsetPage<Customer>> {
        let request = endpoint(Method::GET, CUSTOMERS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }

    /// Create a customer portal session; `send_email` mails the link to the customer
    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        send_email: Option<bool>,
    ) -> Result<CustomerPortalSession> {
        let mut request = endpoint(Method::POST, PORTAL_SESSION, &[customer_id])?;
        if let Some(send_email) = send_email {
            request = request.query("send_email", send_email);
        }
        self.http.send_json(&request).await
    }

    /// Wallet endpoints nested under a customer
    pub fn wallets(&self) -> Wallets {
        Wallets {
            http: Arc::clone(&self.http),
        }
    }
}

/// `/customers/{id}/wallets` endpoints
#[derive(Debug, Clone)]
pub struct Wallets {
    http: Arc<HttpClient>,
}

impl Wallets {
    /// Balances of every currency wallet of a customer
    pub async fn list(&self, customer_id: &str) -> Result<CustomerWallets> {
        let request = endpoint(Method::GET, WALLETS, &[customer_id])?;
        self.http.send_json(&request).await
    }

    /// First page of ledger entries (cursor paginated)
    pub async fn ledger_entries(
        &self,
        customer_id: &str,
        params: &ListLedgerEntriesParams,
    ) -> Result<CursorPage<LedgerEntry>> {
        let request = endpoint(Method::GET, LEDGER_ENTRIES, &[customer_id])?.query_params(params)?;
        CursorPage::fetch(Arc::clone(&self.http), request).await
    }

    /// Credit or debit a wallet; returns the updated wallet
    pub async fn create_ledger_entry(
        &self,
        customer_id: &str,
        params: &CreateLedgerEntryParams,
    ) -> Result<CustomerWallet> {
        let request = endpoint(Method::POST, LEDGER_ENTRIES, &[customer_id])?.json_params(params)?;
        self.http.send_json(&request).await
    }
}
