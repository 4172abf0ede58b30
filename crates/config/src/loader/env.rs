//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ALPHASOC_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_KEY, ENV_API_VERSION, ENV_CONFIG_PATH, ENV_HOST, ENV_MAX_RETRIES, ENV_SKIP_VERIFY,
    ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Values found here override anything loaded from the config file.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none(ENV_HOST) {
        loader.set_host(Some(host));
    }
    if let Some(version) = env_var_or_none(ENV_API_VERSION) {
        loader.set_api_version(Some(version));
    }
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(secs) = parse_env::<u64>(ENV_TIMEOUT, "must be a number of seconds")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = parse_env::<usize>(ENV_MAX_RETRIES, "must be a non-negative integer")? {
        loader.set_max_retries(Some(retries));
    }
    if let Some(skip) = parse_env::<bool>(ENV_SKIP_VERIFY, "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }

    // Only if not already set via CLI
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(std::path::PathBuf::from(path)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        temp_env::with_vars(
            [
                ("ALPHASOC_TEST_EMPTY", Some("")),
                ("ALPHASOC_TEST_SPACES", Some("   ")),
                ("ALPHASOC_TEST_PADDED", Some("  value  ")),
            ],
            || {
                assert_eq!(env_var_or_none("ALPHASOC_TEST_EMPTY"), None);
                assert_eq!(env_var_or_none("ALPHASOC_TEST_SPACES"), None);
                assert_eq!(
                    env_var_or_none("ALPHASOC_TEST_PADDED"),
                    Some("value".to_string())
                );
                assert_eq!(env_var_or_none("ALPHASOC_TEST_UNSET_VARIABLE"), None);
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_skip_verify_names_variable() {
        temp_env::with_var(ENV_SKIP_VERIFY, Some("maybe"), || {
            let mut loader = ConfigLoader::new();
            let err = apply_env(&mut loader).unwrap_err();
            match err {
                ConfigError::InvalidValue { var, .. } => assert_eq!(var, ENV_SKIP_VERIFY),
                other => panic!("unexpected error: {other:?}"),
            }
        });
    }
}
