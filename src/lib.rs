//! # Dodo Payments
//!
//! Typed async client for the Dodo Payments REST API.
//!
//! ## Features
//!
//! - **Typed models**: requests and responses for payments, subscriptions,
//!   customers, wallets, refunds, disputes, payouts, licenses, webhooks and meters
//! - **Forward-compatible enums**: unknown server values decode instead of failing
//! - **Omitted vs null**: `Omittable<T>` for PATCH-style updates
//! - **Pagination**: offset and cursor pages plus an auto-paging item stream
//! - **Typed errors**: HTTP statuses mapped to error kinds; no hidden retries
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dodopayments::{DodoPayments, Result};
//! use dodopayments::models::ListPaymentsParams;
//! use dodopayments::pagination::Page;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads DODO_PAYMENTS_API_KEY and DODO_PAYMENTS_ENVIRONMENT
//!     let client = DodoPayments::from_env()?;
//!
//!     let page = client.payments().list(&ListPaymentsParams::default()).await?;
//!     for payment in page.items() {
//!         println!("{} {}", payment.payment_id, payment.total_amount);
//!     }
//!     if page.has_next_page() {
//!         let next = page.get_next_page().await?;
//!         println!("{} more", next.items().len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  DodoPayments  →  payments() subscriptions() customers() ... │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┼──────────────┬────────────────┐
//! │   Codec    │      HTTP       │  Pagination  │     Auth       │
//! ├────────────┼─────────────────┼──────────────┼────────────────┤
//! │ Omittable  │ Path templates  │ Offset page  │ Bearer API key │
//! │ FieldMap   │ Status mapping  │ Cursor page  │                │
//! │ api_enum!  │ Rate limit      │ Item stream  │                │
//! └────────────┴─────────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Bearer-token authentication
pub mod auth;

/// Wire codec: omittable fields, field tables, string enums
pub mod codec;

/// HTTP client, request descriptors and rate limiting
pub mod http;

/// Offset and cursor pages
pub mod pagination;

/// Request and response models
pub mod models;

/// Resource services
pub mod resources;

/// Webhook delivery decoding
pub mod webhooks;

/// Client configuration
pub mod config;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::DodoPayments;
pub use codec::Omittable;
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
