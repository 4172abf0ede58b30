//! Configuration types for the AlphaSOC client.
//!
//! Responsibilities:
//! - Define connection settings (host, API version, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection settings and the API key.
//! - Define the on-disk `ConfigFile` shape.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API key is always a `SecretString` and never appears in `Debug` output.
//! - Duration fields are serialized as seconds (integers).

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_HOST, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the AlphaSOC API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// API host including scheme, e.g. `https://api.alphasoc.net`.
    pub host: String,
    /// API version path segment, e.g. `v1`.
    pub api_version: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// API key. `None` means no credential was configured anywhere.
    pub api_key: Option<SecretString>,
}

impl Config {
    /// Create a config pointing at `host` with the given API key and defaults otherwise.
    pub fn with_api_key(host: String, api_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                host,
                ..ConnectionConfig::default()
            },
            api_key: Some(api_key),
        }
    }
}

/// On-disk configuration file (`config.json`).
///
/// Every field is optional; absent fields fall through to environment
/// variables or defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub api_version: Option<String>,
    pub api_key: Option<String>,
    /// Timeout in seconds.
    pub timeout: Option<u64>,
    pub max_retries: Option<usize>,
    pub skip_verify: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_connection_targets_public_api() {
        let conn = ConnectionConfig::default();
        assert_eq!(conn.host, "https://api.alphasoc.net");
        assert_eq!(conn.api_version, "v1");
        assert_eq!(conn.timeout, Duration::from_secs(30));
        assert_eq!(conn.max_retries, 3);
        assert!(!conn.skip_verify);
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let config = Config::with_api_key(
            "https://api.alphasoc.net".to_string(),
            SecretString::new("super-secret-key".to_string().into()),
        );

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-key"));
        assert_eq!(
            config.api_key.as_ref().map(|k| k.expose_secret()),
            Some("super-secret-key")
        );
    }

    #[test]
    fn test_connection_timeout_serialized_as_seconds() {
        let conn = ConnectionConfig::default();
        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(json["timeout"], 30);

        let back: ConnectionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, conn);
    }

    #[test]
    fn test_config_file_all_fields_optional() {
        let file: ConfigFile = serde_json::from_str("{}").unwrap();
        assert!(file.host.is_none());
        assert!(file.api_key.is_none());

        let file: ConfigFile =
            serde_json::from_str(r#"{"host":"https://example.net","timeout":5}"#).unwrap();
        assert_eq!(file.host.as_deref(), Some("https://example.net"));
        assert_eq!(file.timeout, Some(5));
    }
}
