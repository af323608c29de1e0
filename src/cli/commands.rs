//! CLI commands and argument parsing

use crate::types::Environment;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Dodo Payments command-line client
#[derive(Parser, Debug)]
#[command(name = "dodo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Environment to use (overrides config and DODO_PAYMENTS_ENVIRONMENT)
    #[arg(short, long, global = true, value_parser = parse_environment)]
    pub environment: Option<Environment>,

    /// Base URL override
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Payments
    #[command(subcommand)]
    Payments(PaymentCommands),

    /// Subscriptions
    #[command(subcommand)]
    Subscriptions(SubscriptionCommands),

    /// Customers and wallets
    #[command(subcommand)]
    Customers(CustomerCommands),

    /// Refunds
    #[command(subcommand)]
    Refunds(RefundCommands),

    /// Download invoice PDFs
    #[command(subcommand)]
    Invoices(InvoiceCommands),

    /// Webhook endpoints
    #[command(subcommand)]
    Webhooks(WebhookCommands),

    /// Check a license key
    ValidateLicense {
        /// License key
        key: String,

        /// Instance the key was activated on
        #[arg(long)]
        instance_id: Option<String>,
    },

    /// Show the resolved configuration (API key redacted)
    Config,
}

/// Page selection shared by offset-paginated list commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Zero-based page index
    #[arg(long)]
    pub page_number: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Follow pages until the last one
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum PaymentCommands {
    /// List payments
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Filter by status (e.g. succeeded)
        #[arg(long)]
        status: Option<String>,

        /// Filter by customer
        #[arg(long)]
        customer_id: Option<String>,
    },
    /// Show one payment
    Get { id: String },
    /// Show the line items of a payment
    LineItems { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SubscriptionCommands {
    /// List subscriptions
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Filter by status (e.g. active)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one subscription
    Get { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List customers
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Filter by email
        #[arg(long)]
        email: Option<String>,
    },
    /// Show one customer
    Get { id: String },
    /// Show wallet balances of a customer
    Wallets { id: String },
}

#[derive(Subcommand, Debug)]
pub enum RefundCommands {
    /// List refunds
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one refund
    Get { id: String },
}

#[derive(Subcommand, Debug)]
pub enum InvoiceCommands {
    /// Invoice of a payment
    Payment {
        id: String,

        /// Output file (defaults to <id>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Credit note of a refund
    Refund {
        id: String,

        /// Output file (defaults to <id>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WebhookCommands {
    /// List webhook endpoints
    List {
        /// Endpoints per page
        #[arg(long)]
        limit: Option<u32>,

        /// Follow pages until the last one
        #[arg(long)]
        all: bool,
    },
    /// Show one endpoint
    Get { id: String },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}

fn parse_environment(raw: &str) -> Result<Environment, String> {
    raw.parse().map_err(|e: crate::error::Error| e.to_string())
}
