//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not validate configuration (see `alphasoc_config::ConfigLoader`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::alerts::AlertsArgs;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "alphasoc")]
#[command(about = "AlphaSOC CLI - Read the AlphaSOC alert stream from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  alphasoc alerts\n  alphasoc alerts --follow 4-1709287200-2b6f\n  alphasoc -o ndjson alerts --all --max-pages 20\n"
)]
pub struct Cli {
    /// API host (e.g., https://api.alphasoc.net)
    #[arg(long, global = true, env = "ALPHASOC_HOST")]
    pub host: Option<String>,

    /// API key
    #[arg(short = 'k', long, global = true, env = "ALPHASOC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API version path segment
    #[arg(long, global = true, env = "ALPHASOC_API_VERSION")]
    pub api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "ALPHASOC_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited requests
    #[arg(long, global = true, env = "ALPHASOC_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "ALPHASOC_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "ALPHASOC_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch alerts from the alert stream
    Alerts(AlertsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_alerts_with_follow() {
        let cli = Cli::try_parse_from([
            "alphasoc",
            "--host",
            "http://localhost:8080",
            "-o",
            "json",
            "alerts",
            "--follow",
            "abc",
        ])
        .unwrap();

        assert_eq!(cli.host.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.output, OutputFormat::Json);
        let Commands::Alerts(args) = cli.command;
        assert_eq!(args.follow, "abc");
        assert!(!args.all);
    }
}
