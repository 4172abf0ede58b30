//! Authenticated transport for AlphaSOC API requests.
//!
//! # What this module handles:
//! - The [`Transport`] seam the client depends on
//! - [`HttpTransport`], the reqwest-backed implementation
//!
//! # What this module does NOT handle:
//! - Response decoding (see [`crate::endpoints`])
//! - Deciding whether a credential is present (see [`crate::client`])
//!
//! # Invariants
//! - URLs are `<host>/<api_version>/<path>`.
//! - The API key is sent as the HTTP basic auth username with an empty password.
//! - Response bodies are read to completion before returning.

use std::future::Future;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("alphasoc-rs/", env!("CARGO_PKG_VERSION"));

/// Performs authenticated GET requests against the API.
///
/// Implementations own credential attachment, connection management and any
/// transport-level retry policy.
pub trait Transport: Send + Sync {
    /// GET `path` with `query`, returning the raw response body on success.
    fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        api_key: &SecretString,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    api_root: String,
    max_retries: usize,
}

impl HttpTransport {
    /// Create a transport for `host` (already normalized, no trailing slash).
    pub fn new(
        host: &str,
        api_version: &str,
        timeout: Duration,
        max_retries: usize,
        skip_verify: bool,
        max_redirects: usize,
    ) -> Result<Self> {
        let mut http_builder = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(max_redirects));

        if skip_verify {
            if host.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        Ok(Self {
            http: http_builder.build()?,
            api_root: format!("{}/{}", host, api_version),
            max_retries,
        })
    }

    /// Versioned API root, e.g. `https://api.alphasoc.net/v1`.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        api_key: &SecretString,
    ) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!(url = %url, params = query.len(), "GET");

        let builder = self
            .http
            .get(&url)
            .basic_auth(api_key.expose_secret(), Some(""))
            .query(query);

        let response = send_request_with_retry(builder, self.max_retries).await?;
        let body = response.bytes().await.map_err(ClientError::from)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(host: &str) -> HttpTransport {
        HttpTransport::new(host, "v1", Duration::from_secs(5), 0, false, 5).unwrap()
    }

    #[test]
    fn test_url_joins_version_and_path() {
        let t = transport("https://api.alphasoc.net");
        assert_eq!(t.api_root(), "https://api.alphasoc.net/v1");
        assert_eq!(t.url("alerts"), "https://api.alphasoc.net/v1/alerts");
        assert_eq!(t.url("/alerts"), "https://api.alphasoc.net/v1/alerts");
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("alphasoc-rs/"));
        assert!(USER_AGENT.len() > "alphasoc-rs/".len());
    }

    #[test]
    fn test_skip_verify_with_http_host() {
        // Only logs a warning.
        let result = HttpTransport::new(
            "http://localhost:8080",
            "v1",
            Duration::from_secs(5),
            0,
            true,
            5,
        );
        assert!(result.is_ok());
    }
}
