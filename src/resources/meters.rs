//! Usage meters

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{CreateMeterParams, ListMetersParams, Meter};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const METERS: &str = "/meters";
const METER: &str = "/meters/%1$s";
const UNARCHIVE: &str = "/meters/%1$s/unarchive";

#[derive(Debug, Clone)]
pub struct Meters {
    http: Arc<HttpClient>,
}

impl Meters {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn create(&self, params: &CreateMeterParams) -> Result<Meter> {
        let request = endpoint(Method::POST, METERS, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn retrieve(&self, meter_id: &str) -> Result<Meter> {
        let request = endpoint(Method::GET, METER, &[meter_id])?;
        self.http.send_json(&request).await
    }

    pub async fn list(&self, params: &ListMetersParams) -> Result<OffsetPage<Meter>> {
        let request = endpoint(Method::GET, METERS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }

    /// Archive a meter; archived meters stop aggregating
    pub async fn archive(&self, meter_id: &str) -> Result<()> {
        let request = endpoint(Method::DELETE, METER, &[meter_id])?;
        self.http.send_empty(&request).await
    }

    pub async fn unarchive(&self, meter_id: &str) -> Result<()> {
        let request = endpoint(Method::POST, UNARCHIVE, &[meter_id])?;
        self.http.send_empty(&request).await
    }
}
