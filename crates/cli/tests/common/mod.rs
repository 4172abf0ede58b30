//! Shared test utilities for alphasoc CLI integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: no `.env`, no host env vars, and an empty
//!   config file instead of the user's default one.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// A hermetic `alphasoc` command plus the config file it points at.
///
/// The temp file must outlive the command run.
pub fn alphasoc_cmd() -> (Command, NamedTempFile) {
    let mut config = NamedTempFile::new().expect("create temp config");
    config.write_all(b"{}").expect("write temp config");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("alphasoc");
    cmd.env("DOTENV_DISABLED", "1")
        .env("ALPHASOC_CONFIG_PATH", config.path())
        .env("ALPHASOC_API_KEY", "test-key")
        .env_remove("ALPHASOC_HOST")
        .env_remove("ALPHASOC_API_VERSION")
        .env_remove("ALPHASOC_TIMEOUT")
        .env_remove("ALPHASOC_MAX_RETRIES")
        .env_remove("ALPHASOC_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    (cmd, config)
}

/// Hermetic command aimed at `host` with retries disabled.
#[allow(dead_code)]
pub fn alphasoc_cmd_with_host(host: &str) -> (Command, NamedTempFile) {
    let (mut cmd, config) = alphasoc_cmd();
    cmd.env("ALPHASOC_HOST", host)
        .env("ALPHASOC_MAX_RETRIES", "0");
    (cmd, config)
}
