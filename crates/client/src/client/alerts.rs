//! Alert-related API methods for [`AlphaSocClient`].
//!
//! # What this module handles:
//! - Fetching one page of the alert stream
//!
//! # What this module does NOT handle:
//! - Following the stream across pages (callers loop on `follow`/`more`)

use crate::client::AlphaSocClient;
use crate::endpoints::{ALERTS_PATH, alerts_query, decode_alerts_response};
use crate::error::Result;
use crate::models::AlertsResponse;
use crate::transport::Transport;

impl<T: Transport> AlphaSocClient<T> {
    /// Fetch one page of alerts.
    ///
    /// # Arguments
    /// * `follow` - Cursor returned as `follow` by the previous call, or `""`
    ///   to start from the beginning of the stream.
    ///
    /// # Returns
    /// The decoded page. Alerts with `eventType` `"dns"` or `"ip"` have their
    /// typed view populated; other event types are left undecoded.
    ///
    /// # Errors
    /// - `ClientError::MissingApiKey` without any network call if no key is set
    /// - transport errors, unchanged
    /// - `ClientError::Decode` / `ClientError::EventDecode` if any part of the
    ///   page fails to decode; no partial page is returned
    pub async fn alerts(&self, follow: &str) -> Result<AlertsResponse> {
        let api_key = self.require_api_key()?;
        let query = alerts_query(follow);
        let body = self.transport.get(ALERTS_PATH, &query, api_key).await?;
        decode_alerts_response(&body)
    }
}
