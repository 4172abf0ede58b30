//! Main AlphaSOC API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `alerts`: Alert stream methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::transport`])
//! - Response decoding (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - The client holds no mutable state; every call is independent.
//! - A missing API key is reported by API methods, not by `build()`.

pub mod builder;

mod alerts;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};

/// AlphaSOC API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use alphasoc_client::AlphaSocClient;
///
/// let client = AlphaSocClient::builder()
///     .api_key("my-key".to_string())
///     .build()?;
///
/// let page = client.alerts("").await?;
/// ```
///
/// Tests and embedders can supply their own [`Transport`] via
/// [`builder::AlphaSocClientBuilder::build_with_transport`].
#[derive(Debug)]
pub struct AlphaSocClient<T = HttpTransport> {
    pub(crate) transport: T,
    pub(crate) api_key: Option<SecretString>,
}

impl AlphaSocClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AlphaSocClientBuilder {
        builder::AlphaSocClientBuilder::new()
    }
}

impl<T: Transport> AlphaSocClient<T> {
    /// Create a client directly from a transport and an optional API key.
    pub fn with_transport(transport: T, api_key: Option<SecretString>) -> Self {
        Self {
            transport,
            api_key,
        }
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.require_api_key().is_ok()
    }

    /// The configured API key, or `MissingApiKey` when it is absent or blank.
    pub(crate) fn require_api_key(&self) -> Result<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingApiKey)
    }
}
