//! License activation and license key management

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    ActivateLicenseParams, DeactivateLicenseParams, LicenseKey, LicenseKeyInstance,
    ListLicenseKeysParams, UpdateLicenseKeyParams, ValidateLicenseParams,
    ValidateLicenseResponse,
};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const ACTIVATE: &str = "/licenses/activate";
const DEACTIVATE: &str = "/licenses/deactivate";
const VALIDATE: &str = "/licenses/validate";
const LICENSE_KEYS: &str = "/license_keys";
const LICENSE_KEY: &str = "/license_keys/%1$s";

/// `/licenses` endpoints, called by the licensed software itself
#[derive(Debug, Clone)]
pub struct Licenses {
    http: Arc<HttpClient>,
}

impl Licenses {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Register a new instance against a key
    pub async fn activate(&self, params: &ActivateLicenseParams) -> Result<LicenseKeyInstance> {
        let request = endpoint(Method::POST, ACTIVATE, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn deactivate(&self, params: &DeactivateLicenseParams) -> Result<()> {
        let request = endpoint(Method::POST, DEACTIVATE, &[])?.json_params(params)?;
        self.http.send_empty(&request).await
    }

    pub async fn validate(&self, params: &ValidateLicenseParams) -> Result<ValidateLicenseResponse> {
        let request = endpoint(Method::POST, VALIDATE, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }
}

/// `/license_keys` endpoints
#[derive(Debug, Clone)]
pub struct LicenseKeys {
    http: Arc<HttpClient>,
}

impl LicenseKeys {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn retrieve(&self, license_key_id: &str) -> Result<LicenseKey> {
        let request = endpoint(Method::GET, LICENSE_KEY, &[license_key_id])?;
        self.http.send_json(&request).await
    }

    pub async fn update(
        &self,
        license_key_id: &str,
        params: &UpdateLicenseKeyParams,
    ) -> Result<LicenseKey> {
        let request =
            endpoint(Method::PATCH, LICENSE_KEY, &[license_key_id])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn list(&self, params: &ListLicenseKeysParams) -> Result<OffsetPage<LicenseKey>> {
        let request = endpoint(Method::GET, LICENSE_KEYS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }
}
