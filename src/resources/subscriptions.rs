//! Subscriptions service

use super::endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    ChangePlanParams, ChargeSubscriptionParams, ChargeSubscriptionResponse,
    CreateSubscriptionParams, CreateSubscriptionResponse, ListSubscriptionsParams, Subscription,
    UpdateSubscriptionParams,
};
use crate::pagination::{OffsetPage, Page};
use crate::types::Method;
use std::sync::Arc;

const SUBSCRIPTIONS: &str = "/subscriptions";
const SUBSCRIPTION: &str = "/subscriptions/%1$s";
const CHANGE_PLAN: &str = "/subscriptions/%1$s/change-plan";
const CHARGE: &str = "/subscriptions/%1$s/charge";

/// `/subscriptions` endpoints
#[derive(Debug, Clone)]
pub struct Subscriptions {
    http: Arc<HttpClient>,
}

impl Subscriptions {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn create(
        &self,
        params: &CreateSubscriptionParams,
    ) -> Result<CreateSubscriptionResponse> {
        let request = endpoint(Method::POST, SUBSCRIPTIONS, &[])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn retrieve(&self, subscription_id: &str) -> Result<Subscription> {
        let request = endpoint(Method::GET, SUBSCRIPTION, &[subscription_id])?;
        self.http.send_json(&request).await
    }

    /// Patch a subscription; omitted fields are left as they are
    pub async fn update(
        &self,
        subscription_id: &str,
        params: &UpdateSubscriptionParams,
    ) -> Result<Subscription> {
        let request =
            endpoint(Method::PATCH, SUBSCRIPTION, &[subscription_id])?.json_params(params)?;
        self.http.send_json(&request).await
    }

    pub async fn list(
        &self,
        params: &ListSubscriptionsParams,
    ) -> Result<OffsetPage<Subscription>> {
        let request = endpoint(Method::GET, SUBSCRIPTIONS, &[])?.query_params(params)?;
        OffsetPage::fetch(Arc::clone(&self.http), request).await
    }

    /// Move a subscription to another product
    pub async fn change_plan(
        &self,
        subscription_id: &str,
        params: &ChangePlanParams,
    ) -> Result<()> {
        let request =
            endpoint(Method::POST, CHANGE_PLAN, &[subscription_id])?.json_params(params)?;
        self.http.send_empty(&request).await
    }

    /// Charge an on-demand subscription
    pub async fn charge(
        &self,
        subscription_id: &str,
        params: &ChargeSubscriptionParams,
    ) -> Result<ChargeSubscriptionResponse> {
        let request = endpoint(Method::POST, CHARGE, &[subscription_id])?.json_params(params)?;
        self.http.send_json(&request).await
    }
}
