//! Payment models

use super::common::{BillingAddress, CustomerLimitedDetails, CustomerRequest, Metadata};
use super::disputes::Dispute;
use super::enums::{Currency, IntentStatus};
use super::refunds::Refund;
use crate::codec::{FieldMap, Omittable, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product line in a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCartItem {
    pub product_id: String,
    pub quantity: u32,
    /// Pay-what-you-want amount in the smallest currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

impl ProductCartItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            amount: None,
        }
    }
}

/// A payment as returned by `GET /payments/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub business_id: String,
    pub total_amount: i64,
    pub currency: Currency,
    #[serde(default)]
    pub status: Option<IntentStatus>,
    pub customer: CustomerLimitedDetails,
    pub billing: BillingAddress,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub disputes: Vec<Dispute>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
    #[serde(default)]
    pub product_cart: Option<Vec<ProductCartItem>>,
    #[serde(default)]
    pub payment_link: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub settlement_amount: Option<i64>,
    #[serde(default)]
    pub settlement_currency: Option<Currency>,
    #[serde(default)]
    pub tax: Option<i64>,
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub discount_id: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A row of `GET /payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListItem {
    pub payment_id: String,
    pub total_amount: i64,
    pub currency: Currency,
    #[serde(default)]
    pub status: Option<IntentStatus>,
    pub customer: CustomerLimitedDetails,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<String>,
}

/// Body of `POST /payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentParams {
    pub billing: BillingAddress,
    pub customer: CustomerRequest,
    pub product_cart: Vec<ProductCartItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_payment_method_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_saved_payment_methods: Option<bool>,
    /// `Null` explicitly applies no discount
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub discount_code: Omittable<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub tax_id: Omittable<String>,
}

impl CreatePaymentParams {
    pub fn new(billing: BillingAddress, customer: CustomerRequest) -> Self {
        Self {
            billing,
            customer,
            product_cart: Vec::new(),
            payment_link: None,
            return_url: None,
            metadata: Metadata::new(),
            billing_currency: None,
            allowed_payment_method_types: None,
            show_saved_payment_methods: None,
            discount_code: Omittable::Omitted,
            tax_id: Omittable::Omitted,
        }
    }

    /// Add a product to the cart
    #[must_use]
    pub fn product(mut self, product_id: impl Into<String>, quantity: u32) -> Self {
        self.product_cart.push(ProductCartItem::new(product_id, quantity));
        self
    }

    /// Ask for a hosted checkout link
    #[must_use]
    pub fn payment_link(mut self, enabled: bool) -> Self {
        self.payment_link = Some(enabled);
        self
    }

    #[must_use]
    pub fn return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn discount_code(mut self, code: impl Into<Omittable<String>>) -> Self {
        self.discount_code = code.into();
        self
    }
}

impl Params for CreatePaymentParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("productCart", "product_cart"),
        ("paymentLink", "payment_link"),
        ("returnUrl", "return_url"),
        ("billingCurrency", "billing_currency"),
        ("allowedPaymentMethodTypes", "allowed_payment_method_types"),
        ("showSavedPaymentMethods", "show_saved_payment_methods"),
        ("discountCode", "discount_code"),
        ("taxId", "tax_id"),
    ]);
}

/// Response of `POST /payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    pub payment_id: String,
    pub client_secret: String,
    pub customer: CustomerLimitedDetails,
    pub total_amount: i64,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub payment_link: Option<String>,
    #[serde(default)]
    pub product_cart: Option<Vec<ProductCartItem>>,
    #[serde(default)]
    pub discount_id: Option<String>,
    #[serde(default)]
    pub expires_on: Option<DateTime<Utc>>,
}

/// Query of `GET /payments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPaymentsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IntentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<DateTime<Utc>>,
}

impl ListPaymentsParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<IntentStatus>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl Params for ListPaymentsParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("pageNumber", "page_number"),
        ("pageSize", "page_size"),
        ("customerId", "customer_id"),
        ("subscriptionId", "subscription_id"),
        ("createdAtGte", "created_at_gte"),
        ("createdAtLte", "created_at_lte"),
    ]);
}

/// One line of `GET /payments/{id}/line-items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLineItem {
    pub items_id: String,
    pub amount: i64,
    pub refundable_amount: i64,
    #[serde(default)]
    pub tax: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `GET /payments/{id}/line-items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLineItems {
    pub currency: Currency,
    pub items: Vec<PaymentLineItem>,
}
