//! Dispute models

use super::enums::{Currency, DisputeStage, DisputeStatus};
use crate::codec::{FieldMap, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub dispute_id: String,
    pub payment_id: String,
    pub business_id: String,
    /// Disputed amount as a decimal string
    pub amount: String,
    pub currency: Currency,
    pub dispute_status: DisputeStatus,
    pub dispute_stage: DisputeStage,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Query of `GET /disputes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDisputesParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_status: Option<DisputeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_stage: Option<DisputeStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
}

impl Params for ListDisputesParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("pageNumber", "page_number"),
        ("pageSize", "page_size"),
        ("customerId", "customer_id"),
        ("disputeStatus", "dispute_status"),
        ("disputeStage", "dispute_stage"),
        ("createdAtGte", "created_at_gte"),
        ("createdAtLte", "created_at_lte"),
    ]);
}
