//! Payout models

use super::enums::{Currency, PayoutStatus};
use crate::codec::{FieldMap, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A settlement to the merchant's bank account. All amounts are in the
/// smallest currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub payout_id: String,
    pub business_id: String,
    pub amount: i64,
    pub currency: Currency,
    pub status: PayoutStatus,
    pub fee: i64,
    pub chargebacks: i64,
    pub refunds: i64,
    pub tax: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payout_document_url: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Query of `GET /payouts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPayoutsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
}

impl Params for ListPayoutsParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("pageNumber", "page_number"),
        ("pageSize", "page_size"),
        ("createdAtGte", "created_at_gte"),
        ("createdAtLte", "created_at_lte"),
    ]);
}
