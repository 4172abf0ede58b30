//! Client builder for constructing [`AlphaSocClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the API host
//! - Configuring the underlying HTTP transport (timeouts, TLS verification, retries)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`AlphaSocClient`] methods)
//!
//! # Invariants
//! - The host is always normalized to have no trailing slashes
//! - The API key is optional here; its absence surfaces as
//!   `ClientError::MissingApiKey` when an API method is called

use std::time::Duration;

use alphasoc_config::{
    Config,
    constants::{
        DEFAULT_API_VERSION, DEFAULT_HOST, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES,
        DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES,
    },
};
use secrecy::{ExposeSecret, SecretString};

use crate::client::AlphaSocClient;
use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};

/// Builder for creating a new [`AlphaSocClient`].
///
/// # Example
///
/// ```rust,ignore
/// use alphasoc_client::AlphaSocClient;
///
/// let client = AlphaSocClient::builder()
///     .api_key("my-key".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct AlphaSocClientBuilder {
    host: String,
    api_version: String,
    api_key: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for AlphaSocClientBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl AlphaSocClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host, including scheme. Trailing slashes are removed.
    pub fn host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    /// Set the API version path segment (default `v1`).
    pub fn api_version(mut self, version: String) -> Self {
        self.api_version = version;
        self
    }

    /// Set the API key. An empty key counts as no key.
    pub fn api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited (HTTP 429) requests.
    ///
    /// Values above `MAX_MAX_RETRIES` are clamped.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries.min(MAX_MAX_RETRIES);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.host = config.connection.host.clone();
        self.api_version = config.connection.api_version.clone();
        self.api_key = config.api_key.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries.min(MAX_MAX_RETRIES);
        self
    }

    /// Remove trailing slashes so paths join cleanly.
    fn normalize_host(host: &str) -> String {
        host.trim().trim_end_matches('/').to_string()
    }

    fn validated_host(&self) -> Result<String> {
        let host = Self::normalize_host(&self.host);
        if host.is_empty() {
            return Err(ClientError::InvalidUrl("host is required".to_string()));
        }
        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "host must start with http:// or https://, got: {host}"
            )));
        }
        Ok(host)
    }

    fn effective_api_key(&self) -> Option<SecretString> {
        self.api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    /// Build the client with the reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the host is empty or not http(s).
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<AlphaSocClient> {
        let host = self.validated_host()?;
        let api_version = self.api_version.trim().trim_matches('/');
        let api_version = if api_version.is_empty() {
            DEFAULT_API_VERSION
        } else {
            api_version
        };

        let transport = HttpTransport::new(
            &host,
            api_version,
            self.timeout,
            self.max_retries,
            self.skip_verify,
            DEFAULT_MAX_REDIRECTS,
        )?;

        Ok(AlphaSocClient {
            transport,
            api_key: self.effective_api_key(),
        })
    }

    /// Build the client around a caller-supplied transport.
    ///
    /// Host, version, timeout and retry settings are ignored; they belong to
    /// the transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> AlphaSocClient<T> {
        AlphaSocClient {
            transport,
            api_key: self.effective_api_key(),
        }
    }
}
