//! Usage meter and usage event models

use super::common::MetadataValue;
use super::enums::{AggregationType, Conjunction, FilterOperator};
use crate::codec::{FieldMap, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How events are rolled up into a meter reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterAggregation {
    #[serde(rename = "type")]
    pub kind: AggregationType,
    /// Metadata key to aggregate; required for everything except `count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Right-hand side of a filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// `metadata[key] <operator> value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub key: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

/// One clause of a meter filter.
///
/// Variants are tried in declaration order and the first one whose shape
/// fits wins, so a clause carrying `key`/`operator`/`value` is always a
/// condition even if it also had stray nested-filter keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterClause {
    /// A direct condition
    Condition(FilterCondition),
    /// A nested group of clauses
    Nested(MeterFilter),
}

impl From<FilterCondition> for FilterClause {
    fn from(condition: FilterCondition) -> Self {
        Self::Condition(condition)
    }
}

impl From<MeterFilter> for FilterClause {
    fn from(filter: MeterFilter) -> Self {
        Self::Nested(filter)
    }
}

/// Event filter of a meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterFilter {
    pub clauses: Vec<FilterClause>,
    pub conjunction: Conjunction,
}

impl MeterFilter {
    /// All clauses must match
    pub fn all(clauses: Vec<FilterClause>) -> Self {
        Self {
            clauses,
            conjunction: Conjunction::And,
        }
    }

    /// Any clause may match
    pub fn any(clauses: Vec<FilterClause>) -> Self {
        Self {
            clauses,
            conjunction: Conjunction::Or,
        }
    }

    /// Nesting depth; a filter of plain conditions has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .clauses
            .iter()
            .map(|c| match c {
                FilterClause::Condition(_) => 0,
                FilterClause::Nested(inner) => inner.depth(),
            })
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub event_name: String,
    pub measurement_unit: String,
    pub aggregation: MeterAggregation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub filter: Option<MeterFilter>,
}

/// Body of `POST /meters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMeterParams {
    pub name: String,
    pub event_name: String,
    pub measurement_unit: String,
    pub aggregation: MeterAggregation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<MeterFilter>,
}

impl Params for CreateMeterParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("eventName", "event_name"),
        ("measurementUnit", "measurement_unit"),
    ]);
}

/// Query of `GET /meters`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetersParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl Params for ListMetersParams {
    const FIELDS: FieldMap =
        FieldMap::new(&[("pageNumber", "page_number"), ("pageSize", "page_size")]);
}

// ============================================================================
// Usage Events
// ============================================================================

/// A usage event as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub event_id: String,
    pub business_id: String,
    pub customer_id: String,
    pub event_name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: HashMap<String, MetadataValue>,
}

/// One event to ingest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    /// Caller-chosen ID; re-sending the same ID is a no-op server-side
    pub event_id: String,
    pub customer_id: String,
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, MetadataValue>,
}

/// Body of `POST /events/ingest`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestEventsParams {
    pub events: Vec<EventInput>,
}

impl Params for IngestEventsParams {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestEventsResponse {
    pub ingested_count: u64,
}

/// Query of `GET /events`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEventsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl Params for ListEventsParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("pageNumber", "page_number"),
        ("pageSize", "page_size"),
        ("customerId", "customer_id"),
        ("eventName", "event_name"),
        ("meterId", "meter_id"),
    ]);
}
