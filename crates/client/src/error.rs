//! Error types for the AlphaSOC client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during AlphaSOC client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No API key configured. Raised before any network I/O.
    #[error("API key is not configured")]
    MissingApiKey,

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from AlphaSOC.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body does not match the expected envelope.
    #[error("Invalid response format: {0}")]
    Decode(#[from] serde_json::Error),

    /// A typed alert payload does not match its declared event type.
    #[error("Invalid {event_type} event payload in alert #{index}: {source}")]
    EventDecode {
        index: usize,
        event_type: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Check if an HTTP status code is retryable by the transport.
    ///
    /// Only 429 (Too Many Requests) is retried; everything else fails immediately.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429
    }

    /// Check if this error indicates a missing or rejected credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::ApiError { status: 401 | 403, .. }
        )
    }

    /// Check if this error is a decoding failure of the response body.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::EventDecode { .. })
    }
}
