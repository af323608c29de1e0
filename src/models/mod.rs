//! Typed request and response models
//!
//! One file per resource group. Response types derive `Deserialize` with
//! `#[serde(default)]` on everything the API may leave out; request types
//! implement [`Params`](crate::codec::Params) and use
//! [`Omittable`](crate::codec::Omittable) where `null` means "clear".

mod common;
mod customers;
mod disputes;
mod enums;
mod licenses;
mod meters;
mod payments;
mod payouts;
mod refunds;
mod subscriptions;
mod webhooks;

pub use common::{
    BillingAddress, CustomerLimitedDetails, CustomerRequest, Metadata, MetadataValue, PageParams,
};
pub use customers::{
    CreateCustomerParams, CreateLedgerEntryParams, Customer, CustomerPortalSession,
    CustomerWallet, CustomerWallets, LedgerEntry, ListCustomersParams, ListLedgerEntriesParams,
    UpdateCustomerParams,
};
pub use disputes::{Dispute, ListDisputesParams};
pub use enums::{
    AggregationType, Conjunction, CountryCode, Currency, DisputeStage, DisputeStatus,
    FilterOperator, IntentStatus, LedgerEntryType, LedgerEventType, LicenseKeyStatus,
    PayoutStatus, ProrationBillingMode, RefundStatus, SubscriptionStatus, TimeInterval,
    WebhookEventType,
};
pub use licenses::{
    ActivateLicenseParams, DeactivateLicenseParams, LicenseKey, LicenseKeyInstance,
    ListLicenseKeysParams, UpdateLicenseKeyParams, ValidateLicenseParams,
    ValidateLicenseResponse,
};
pub use meters::{
    CreateMeterParams, EventInput, FilterClause, FilterCondition, FilterValue,
    IngestEventsParams, IngestEventsResponse, ListEventsParams, ListMetersParams, Meter,
    MeterAggregation, MeterFilter, UsageEvent,
};
pub use payments::{
    CreatePaymentParams, CreatePaymentResponse, ListPaymentsParams, Payment, PaymentLineItem,
    PaymentLineItems, PaymentListItem, ProductCartItem,
};
pub use payouts::{ListPayoutsParams, Payout};
pub use refunds::{CreateRefundParams, ListRefundsParams, Refund, RefundItem};
pub use subscriptions::{
    ChangePlanParams, ChargeSubscriptionParams, ChargeSubscriptionResponse,
    CreateSubscriptionParams, CreateSubscriptionResponse, ListSubscriptionsParams, Subscription,
    UpdateSubscriptionParams,
};
pub use webhooks::{
    CreateWebhookParams, ListWebhooksParams, UpdateWebhookParams, WebhookEndpoint, WebhookSecret,
};
