//! Alert stream command implementation.
//!
//! Responsibilities:
//! - Fetch one page of alerts, or follow the cursor across pages with `--all`.
//! - Print each page via the shared formatters as soon as it arrives.
//! - Report the cursor to resume from on stderr.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by the client crate).
//! - Output formatting details (see formatters module).
//!
//! Invariants:
//! - The cursor only advances when the server returns a non-empty `follow`.
//! - Paging stops when `more` is false or `--max-pages` pages were fetched.

use alphasoc_client::{AlertsResponse, AlphaSocClient, Transport};
use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::formatters::{OutputFormat, format_page};

#[derive(Debug, Args)]
pub struct AlertsArgs {
    /// Cursor returned by a previous call; empty starts from the oldest retained alert
    #[arg(long, default_value = "")]
    pub follow: String,

    /// Keep fetching while the server reports more alerts
    #[arg(long)]
    pub all: bool,

    /// Upper bound on pages fetched with --all
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: u64,
}

pub async fn run(
    config: alphasoc_config::Config,
    args: AlertsArgs,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    let follow = fetch_pages(&client, &args, cancel, |page| {
        print!("{}", format_page(page, format)?);
        Ok(())
    })
    .await?;

    eprintln!("follow: {follow}");
    Ok(())
}

/// Fetch pages starting at `args.follow`, handing each to `on_page`.
///
/// Returns the cursor to resume from.
pub(crate) async fn fetch_pages<T, F>(
    client: &AlphaSocClient<T>,
    args: &AlertsArgs,
    cancel: &CancellationToken,
    mut on_page: F,
) -> Result<String>
where
    T: Transport,
    F: FnMut(&AlertsResponse) -> Result<()>,
{
    let mut follow = args.follow.clone();
    let mut pages: u64 = 0;

    loop {
        let page = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Cancelled.into()),
            res = client.alerts(&follow) => res.context("Failed to fetch alerts")?,
        };
        pages += 1;
        info!(page = pages, alerts = page.alerts.len(), more = page.more, "Fetched alerts page");

        on_page(&page)?;

        if !page.follow.is_empty() {
            follow = page.follow;
        }

        if !args.all || !page.more {
            break;
        }
        if pages >= args.max_pages {
            warn!("Stopping after {pages} pages; more alerts are available");
            break;
        }
    }

    Ok(follow)
}
