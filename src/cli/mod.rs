//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `payments`, `subscriptions`, `customers`, `refunds` - list and show resources
//! - `invoices` - download invoice PDFs
//! - `webhooks` - list and show webhook endpoints
//! - `validate-license` - check a license key
//! - `config` - show the resolved configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
