//! License key models

use super::enums::LicenseKeyStatus;
use crate::codec::{FieldMap, Omittable, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseKey {
    pub id: String,
    pub business_id: String,
    pub customer_id: String,
    pub key: String,
    pub product_id: String,
    pub payment_id: String,
    pub status: LicenseKeyStatus,
    pub instances_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub activations_limit: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subscription_id: Option<String>,
}

/// One activation of a license key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseKeyInstance {
    pub id: String,
    pub business_id: String,
    pub license_key_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivateLicenseParams {
    pub license_key: String,
    /// Label for the new instance, e.g. a machine name
    pub name: String,
}

impl Params for ActivateLicenseParams {
    const FIELDS: FieldMap = FieldMap::new(&[("licenseKey", "license_key")]);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivateLicenseParams {
    pub license_key: String,
    pub license_key_instance_id: String,
}

impl Params for DeactivateLicenseParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("licenseKey", "license_key"),
        ("licenseKeyInstanceId", "license_key_instance_id"),
    ]);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateLicenseParams {
    pub license_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key_instance_id: Option<String>,
}

impl Params for ValidateLicenseParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("licenseKey", "license_key"),
        ("licenseKeyInstanceId", "license_key_instance_id"),
    ]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateLicenseResponse {
    pub valid: bool,
}

/// Body of `PATCH /license_keys/{id}`; `Null` removes a limit or expiry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLicenseKeyParams {
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub activations_limit: Omittable<u32>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub disabled: Omittable<bool>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    pub expires_at: Omittable<DateTime<Utc>>,
}

impl Params for UpdateLicenseKeyParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("activationsLimit", "activations_limit"),
        ("expiresAt", "expires_at"),
    ]);
}

/// Query of `GET /license_keys`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLicenseKeysParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LicenseKeyStatus>,
}

impl Params for ListLicenseKeysParams {
    const FIELDS: FieldMap = FieldMap::new(&[
        ("pageNumber", "page_number"),
        ("pageSize", "page_size"),
        ("customerId", "customer_id"),
        ("productId", "product_id"),
    ]);
}
