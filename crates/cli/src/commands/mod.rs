//! CLI command implementations.

pub mod alerts;

use alphasoc_client::AlphaSocClient;
use alphasoc_config::Config;
use anyhow::{Context, Result};

/// Build the HTTP-backed client from a resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<AlphaSocClient> {
    AlphaSocClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build AlphaSOC client")
}
