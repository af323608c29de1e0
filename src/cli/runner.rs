//! CLI runner - executes commands

use crate::cli::commands::{
    Cli, Commands, CustomerCommands, InvoiceCommands, OutputFormat, PageArgs, PaymentCommands,
    RefundCommands, SubscriptionCommands, WebhookCommands,
};
use crate::client::DodoPayments;
use crate::config::ClientConfig;
use crate::models::{
    ListCustomersParams, ListPaymentsParams, ListRefundsParams, ListSubscriptionsParams,
    ListWebhooksParams, ValidateLicenseParams,
};
use crate::pagination::{into_item_stream, Page};
use anyhow::{Context, Result};
use futures::TryStreamExt;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        if matches!(self.cli.command, Commands::Config) {
            return self.show_config(&config);
        }

        config.require_api_key()?;
        let client = DodoPayments::new(config)?;

        match &self.cli.command {
            Commands::Payments(cmd) => self.payments(&client, cmd).await,
            Commands::Subscriptions(cmd) => self.subscriptions(&client, cmd).await,
            Commands::Customers(cmd) => self.customers(&client, cmd).await,
            Commands::Refunds(cmd) => self.refunds(&client, cmd).await,
            Commands::Invoices(cmd) => self.invoices(&client, cmd).await,
            Commands::Webhooks(cmd) => self.webhooks(&client, cmd).await,
            Commands::ValidateLicense { key, instance_id } => {
                let params = ValidateLicenseParams {
                    license_key: key.clone(),
                    license_key_instance_id: instance_id.clone(),
                };
                let result = client.licenses().validate(&params).await?;
                self.output(&result)
            }
            Commands::Config => Ok(()),
        }
    }

    /// Config file, then environment, then command-line flags
    fn load_config(&self) -> Result<ClientConfig> {
        let base = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ClientConfig::default(),
        };
        let mut config = base.with_env(|key| std::env::var(key).ok())?;

        if let Some(environment) = self.cli.environment {
            config.environment = environment;
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url = Some(url.clone());
        }
        config.validate()?;

        if self.cli.verbose {
            info!("Using {}", config.resolved_base_url());
        }
        Ok(config)
    }

    fn show_config(&self, config: &ClientConfig) -> Result<()> {
        self.output(&json!({
            "base_url": config.resolved_base_url(),
            "environment": config.environment,
            "api_key": config.api_key.as_ref().map(ToString::to_string),
            "timeout_secs": config.timeout_secs,
            "rate_limit": config.rate_limit,
        }))
    }

    async fn payments(&self, client: &DodoPayments, cmd: &PaymentCommands) -> Result<()> {
        match cmd {
            PaymentCommands::List {
                page,
                status,
                customer_id,
            } => {
                let params = ListPaymentsParams {
                    page_number: page.page_number,
                    page_size: page.page_size,
                    customer_id: customer_id.clone(),
                    status: status.as_deref().map(Into::into),
                    ..Default::default()
                };
                let first = client.payments().list(&params).await?;
                self.output_pages(first, page).await
            }
            PaymentCommands::Get { id } => self.output(&client.payments().retrieve(id).await?),
            PaymentCommands::LineItems { id } => {
                self.output(&client.payments().line_items(id).await?)
            }
        }
    }

    async fn subscriptions(
        &self,
        client: &DodoPayments,
        cmd: &SubscriptionCommands,
    ) -> Result<()> {
        match cmd {
            SubscriptionCommands::List { page, status } => {
                let params = ListSubscriptionsParams {
                    page_number: page.page_number,
                    page_size: page.page_size,
                    status: status.as_deref().map(Into::into),
                    ..Default::default()
                };
                let first = client.subscriptions().list(&params).await?;
                self.output_pages(first, page).await
            }
            SubscriptionCommands::Get { id } => {
                self.output(&client.subscriptions().retrieve(id).await?)
            }
        }
    }

    async fn customers(&self, client: &DodoPayments, cmd: &CustomerCommands) -> Result<()> {
        match cmd {
            CustomerCommands::List { page, email } => {
                let params = ListCustomersParams {
                    page_number: page.page_number,
                    page_size: page.page_size,
                    email: email.clone(),
                };
                let first = client.customers().list(&params).await?;
                self.output_pages(first, page).await
            }
            CustomerCommands::Get { id } => self.output(&client.customers().retrieve(id).await?),
            CustomerCommands::Wallets { id } => {
                self.output(&client.customers().wallets().list(id).await?)
            }
        }
    }

    async fn refunds(&self, client: &DodoPayments, cmd: &RefundCommands) -> Result<()> {
        match cmd {
            RefundCommands::List { page } => {
                let params = ListRefundsParams {
                    page_number: page.page_number,
                    page_size: page.page_size,
                    ..Default::default()
                };
                let first = client.refunds().list(&params).await?;
                self.output_pages(first, page).await
            }
            RefundCommands::Get { id } => self.output(&client.refunds().retrieve(id).await?),
        }
    }

    async fn invoices(&self, client: &DodoPayments, cmd: &InvoiceCommands) -> Result<()> {
        let (id, output, pdf) = match cmd {
            InvoiceCommands::Payment { id, output } => {
                (id, output, client.invoices().payment(id).await?)
            }
            InvoiceCommands::Refund { id, output } => {
                (id, output, client.invoices().refund(id).await?)
            }
        };
        let path = output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{id}.pdf")));
        write_file(&path, &pdf)?;
        self.output(&json!({"id": id, "path": path, "bytes": pdf.len()}))
    }

    async fn webhooks(&self, client: &DodoPayments, cmd: &WebhookCommands) -> Result<()> {
        match cmd {
            WebhookCommands::List { limit, all } => {
                let params = ListWebhooksParams {
                    limit: *limit,
                    iterator: None,
                };
                let first = client.webhooks().list(&params).await?;
                let page = PageArgs {
                    all: *all,
                    ..Default::default()
                };
                self.output_pages(first, &page).await
            }
            WebhookCommands::Get { id } => self.output(&client.webhooks().retrieve(id).await?),
        }
    }

    /// Print the first page, or every item when `--all` is set
    async fn output_pages<P>(&self, first: P, page: &PageArgs) -> Result<()>
    where
        P: Page + 'static,
        P::Item: Serialize,
    {
        if !page.all {
            let has_more = first.has_next_page();
            self.output(&json!({
                "items": first.items(),
                "has_next_page": has_more,
            }))?;
            return Ok(());
        }

        let items: Vec<P::Item> = into_item_stream(first).try_collect().await?;
        debug!("Fetched {} items across all pages", items.len());
        self.output(&json!({ "items": items }))
    }

    /// Output a value
    fn output<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
