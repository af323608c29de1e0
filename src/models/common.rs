//! Shapes shared by several resource groups

use super::enums::CountryCode;
use crate::codec::{FieldMap, Omittable, Params};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form string metadata attached to most resources
pub type Metadata = HashMap<String, String>;

/// Billing address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub country: CountryCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

impl BillingAddress {
    /// Address with only a country; the API requires at least that
    pub fn new(country: impl Into<CountryCode>) -> Self {
        Self {
            country: country.into(),
            city: None,
            state: None,
            street: None,
            zipcode: None,
        }
    }

    #[must_use]
    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

/// Customer summary embedded in payments, subscriptions and refunds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerLimitedDetails {
    pub customer_id: String,
    pub email: String,
    pub name: String,
}

/// Customer to bill: an existing one by ID, or a new one by details.
///
/// Decoded untagged in this order; the first shape that fits wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRequest {
    /// Bill an existing customer
    Existing {
        customer_id: String,
    },
    /// Create the customer inline
    New {
        email: String,
        name: String,
        #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
        phone_number: Omittable<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        create_new_customer: Option<bool>,
    },
}

impl CustomerRequest {
    /// Reference an existing customer
    pub fn existing(customer_id: impl Into<String>) -> Self {
        Self::Existing {
            customer_id: customer_id.into(),
        }
    }

    /// Describe a new customer
    pub fn new_customer(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::New {
            email: email.into(),
            name: name.into(),
            phone_number: Omittable::Omitted,
            create_new_customer: None,
        }
    }
}

/// A metadata value on usage events: string, number or boolean.
///
/// Tried in that order when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Plain offset pagination parameters, for list endpoints without filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageParams {
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
}

impl Params for PageParams {
    const FIELDS: FieldMap = FieldMap::new(&[("pageNumber", "page_number"), ("pageSize", "page_size")]);
}
