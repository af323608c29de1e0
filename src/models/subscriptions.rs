//! Subscription models

use super::common::{BillingAddress, CustomerLimitedDetails, CustomerRequest, Metadata};
use super::enums::{Currency, ProrationBillingMode, SubscriptionStatus, TimeInterval};
use crate::codec::{FieldMap, Omittable, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub subscription_id: String,
    pub product_id: String,
    pub status: SubscriptionStatus,
    pub quantity: u32,
    /// Price per period before tax, smallest currency unit
    pub recurring_pre_tax_amount: i64,
    pub currency: Currency,
    pub customer: CustomerLimitedDetails,
    pub billing: BillingAddress,
    pub created_at: DateTime<Utc>,
    pub next_billing_date: DateTime<Utc>,
    pub previous_billing_date: DateTime<Utc>,
    pub payment_frequency_count: u32,
    pub payment_frequency_interval: TimeInterval,
    pub subscription_period_count: u32,
    pub subscription_period_interval: TimeInterval,
    #[serde(default)]
    pub trial_period_days: u32,
    #[serde(default)]
    pub cancel_at_next_billing_date: bool,
    #[serde(default)]
    pub tax_inclusive: bool,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub discount_id: Option<String>,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Body of `POST /subscriptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionParams {
    pub billing: BillingAddress,
    pub customer: CustomerRequest,
    pub product_id: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub discount_code: Omittable<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub tax_id: Omittable<String>,
}

impl CreateSubscriptionParams {
    pub fn new(
        billing: BillingAddress,
        customer: CustomerRequest,
        product_id: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            billing,
            customer,
            product_id: product_id.into(),
            quantity,
            payment_link: None,
            return_url: None,
            trial_period_days: None,
            metadata: Metadata::new(),
            discount_code: Omittable::Omitted,
            tax_id: Omittable::Omitted,
        }
    }

    #[must_use]
    pub fn payment_link(mut self, enabled: bool) -> Self {
        self.payment_link = Some(enabled);
        self
    }

    #[must_use]
    pub fn trial_period_days(mut self, days: u32) -> Self {
        self.trial_period_days = Some(days);
        self
    }
}

impl Params for CreateSubscriptionParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("productId", "product_id"),
        ("paymentLink", "payment_link"),
        ("returnUrl", "return_url"),
        ("trialPeriodDays", "trial_period_days"),
        ("discountCode", "discount_code"),
        ("taxId", "tax_id"),
    ]);
}

/// Response of `POST /subscriptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionResponse {
    pub subscription_id: String,
    pub payment_id: String,
    pub customer: CustomerLimitedDetails,
    pub recurring_pre_tax_amount: i64,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub payment_link: Option<String>,
    #[serde(default)]
    pub discount_id: Option<String>,
    #[serde(default)]
    pub expires_on: Option<DateTime<Utc>>,
}

/// Body of `PATCH /subscriptions/{id}`.
///
/// Omitted fields are left unchanged; `Null` clears the value server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubscriptionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub cancel_at_next_billing_date: Omittable<bool>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub metadata: Omittable<Metadata>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub tax_id: Omittable<String>,
}

impl Params for UpdateSubscriptionParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("cancelAtNextBillingDate", "cancel_at_next_billing_date"),
        ("taxId", "tax_id"),
    ]);
}

/// Body of `POST /subscriptions/{id}/change-plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePlanParams {
    pub product_id: String,
    pub quantity: u32,
    pub proration_billing_mode: ProrationBillingMode,
}

impl Params for ChangePlanParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("productId", "product_id"),
        ("prorationBillingMode", "proration_billing_mode"),
    ]);
}

/// Body of `POST /subscriptions/{id}/charge` (on-demand subscriptions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeSubscriptionParams {
    /// Amount in the smallest currency unit
    pub product_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_currency_fees_inclusive: Option<bool>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Params for ChargeSubscriptionParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("productPrice", "product_price"),
        ("productCurrency", "product_currency"),
        ("productDescription", "product_description"),
        ("adaptiveCurrencyFeesInclusive", "adaptive_currency_fees_inclusive"),
    ]);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeSubscriptionResponse {
    pub payment_id: String,
}

/// Query of `GET /subscriptions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSubscriptionsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
}

impl Params for ListSubscriptionsParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("pageNumber", "page_number"),
        ("pageSize", "page_size"),
        ("customerId", "customer_id"),
        ("createdAtGte", "created_at_gte"),
        ("createdAtLte", "created_at_lte"),
    ]);
}
