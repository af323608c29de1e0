//! Customer and wallet models

use super::enums::{Currency, LedgerEntryType, LedgerEventType};
use crate::codec::{FieldMap, Omittable, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub business_id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Body of `POST /customers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerParams {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub phone_number: Omittable<String>,
}

impl CreateCustomerParams {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            phone_number: Omittable::Omitted,
        }
    }

    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Omittable::Value(phone_number.into());
        self
    }
}

impl Params for CreateCustomerParams {
    const FIELDS: FieldMap = FieldMap::new(&[("phoneNumber", "phone_number")]);
}

/// Body of `PATCH /customers/{id}`.
///
/// Setting `phone_number` to `Null` removes the stored number; leaving it
/// `Omitted` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomerParams {
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub name: Omittable<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub phone_number: Omittable<String>,
}

impl Params for UpdateCustomerParams {
    const FIELDS: FieldMap = FieldMap::new(&[("phoneNumber", "phone_number")]);
}

/// Query of `GET /customers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCustomersParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Params for ListCustomersParams {
    const FIELDS: FieldMap =
        FieldMap::new(&[("pageNumber", "page_number"), ("pageSize", "page_size")]);
}

/// Response of `POST /customers/{id}/customer-portal/session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPortalSession {
    pub link: String,
}

// ============================================================================
// Wallets
// ============================================================================

/// Balance of one currency wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerWallet {
    pub customer_id: String,
    pub currency: Currency,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response of `GET /customers/{id}/wallets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerWallets {
    pub items: Vec<CustomerWallet>,
    /// Sum of all wallets converted to USD, smallest unit
    pub total_balance_usd: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub business_id: String,
    pub customer_id: String,
    pub currency: Currency,
    pub amount: i64,
    pub before_balance: i64,
    pub after_balance: i64,
    pub event_type: LedgerEventType,
    pub is_credit: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub reference_object_id: Option<String>,
}

/// Body of `POST /customers/{id}/wallets/ledger-entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLedgerEntryParams {
    pub amount: i64,
    pub currency: Currency,
    pub entry_type: LedgerEntryType,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub idempotency_key: Omittable<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub reason: Omittable<String>,
}

impl Params for CreateLedgerEntryParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("entryType", "entry_type"),
        ("idempotencyKey", "idempotency_key"),
    ]);
}

/// Query of `GET /customers/{id}/wallets/ledger-entries` (cursor paginated)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLedgerEntriesParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Resume token from a previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterator: Option<String>,
}

impl Params for ListLedgerEntriesParams {}
