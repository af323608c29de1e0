//! Resource services
//!
//! One service per resource group. A service is a cheap handle (an
//! `Arc<HttpClient>`); every method is one API call described by a verb, a
//! path template, parameters and a response type.

mod customers;
mod disputes;
mod invoices;
mod licenses;
mod meters;
mod payments;
mod payouts;
mod refunds;
mod subscriptions;
mod usage_events;
mod webhooks;

pub use customers::{Customers, Wallets};
pub use disputes::Disputes;
pub use invoices::Invoices;
pub use licenses::{LicenseKeys, Licenses};
pub use meters::Meters;
pub use payments::Payments;
pub use payouts::Payouts;
pub use refunds::Refunds;
pub use subscriptions::Subscriptions;
pub use usage_events::UsageEvents;
pub use webhooks::Webhooks;

use crate::error::Result;
use crate::http::{expand_path, RequestDescriptor};
use crate::types::Method;

/// Descriptor for `method` on `template` expanded with `args`
pub(crate) fn endpoint(method: Method, template: &str, args: &[&str]) -> Result<RequestDescriptor> {
    Ok(RequestDescriptor::new(method, expand_path(template, args)?))
}

#[cfg(test)]
mod tests;
