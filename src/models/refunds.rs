//! Refund models

use super::common::CustomerLimitedDetails;
use super::enums::{Currency, RefundStatus};
use crate::codec::{FieldMap, Omittable, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub refund_id: String,
    pub payment_id: String,
    pub business_id: String,
    pub status: RefundStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub is_partial: bool,
    #[serde(default)]
    pub customer: Option<CustomerLimitedDetails>,
}

/// Partial refund of one line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundItem {
    pub item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
}

/// Body of `POST /refunds`. Without `items` the whole payment is refunded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRefundParams {
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub reason: Omittable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RefundItem>>,
}

impl CreateRefundParams {
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            reason: Omittable::Omitted,
            items: None,
        }
    }

    #[must_use]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Omittable::Value(reason.into());
        self
    }

    #[must_use]
    pub fn item(mut self, item: RefundItem) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item);
        self
    }
}

impl Params for CreateRefundParams {
    const FIELDS: FieldMap = FieldMap::new(&[("paymentId", "payment_id")]);
}

/// Query of `GET /refunds`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRefundsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RefundStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
}

impl Params for ListRefundsParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("pageNumber", "page_number"),
        ("pageSize", "page_size"),
        ("customerId", "customer_id"),
        ("createdAtGte", "created_at_gte"),
        ("createdAtLte", "created_at_lte"),
    ]);
}
