//! Config file loading.
//!
//! Responsibilities:
//! - Read the JSON config file from an explicit path or the default location.
//! - Apply file values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - File values only fill fields that are still unset, so env vars and
//!   builder overrides always win regardless of call order.
//! - A missing file at the default location is not an error; a missing file
//!   at an explicitly configured path is.

use secrecy::SecretString;
use std::path::Path;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::path::default_config_path;
use crate::types::ConfigFile;

/// Read and parse a config file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the config file (if any) to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => (
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
            false,
        ),
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No config file at default location");
        return Ok(());
    }

    let file = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    apply_config_file(loader, file);
    Ok(())
}

fn apply_config_file(loader: &mut ConfigLoader, file: ConfigFile) {
    if loader.host().is_none() {
        loader.set_host(file.host);
    }
    if loader.api_version().is_none() {
        loader.set_api_version(file.api_version);
    }
    if !loader.has_api_key() {
        loader.set_api_key(file.api_key.map(|k| SecretString::new(k.into())));
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout.map(Duration::from_secs));
    }
    if loader.max_retries().is_none() {
        loader.set_max_retries(file.max_retries);
    }
    if loader.skip_verify().is_none() {
        loader.set_skip_verify(file.skip_verify);
    }
}
