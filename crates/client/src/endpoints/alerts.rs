//! Alert endpoint for the AlphaSOC alerts API.
//!
//! # What this module handles:
//! - Query construction for `GET /alerts`
//! - Decoding a response body into a fully resolved [`AlertsResponse`]
//!
//! # What this module does NOT handle:
//! - Sending the request (see [`crate::transport`])
//! - Credential checks (see [`crate::client::alerts`])
//!
//! # Invariants
//! - An empty cursor omits the `follow` parameter entirely.
//! - Decoding is all-or-nothing: one bad `dns`/`ip` payload fails the page.

use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::AlertsResponse;

/// Resource path of the alerts endpoint, relative to the versioned API root.
pub const ALERTS_PATH: &str = "alerts";

/// Build the query parameters for an alerts request.
pub fn alerts_query(follow: &str) -> Vec<(String, String)> {
    if follow.is_empty() {
        Vec::new()
    } else {
        vec![("follow".to_string(), follow.to_string())]
    }
}

/// Decode an alerts response body and resolve every alert's typed event.
pub fn decode_alerts_response(body: &[u8]) -> Result<AlertsResponse> {
    let mut resp: AlertsResponse = serde_json::from_slice(body)?;

    for (index, alert) in resp.alerts.iter_mut().enumerate() {
        alert
            .decode_event()
            .map_err(|source| ClientError::EventDecode {
                index,
                event_type: alert.event_type.clone(),
                source,
            })?;
    }

    debug!(
        alerts = resp.alerts.len(),
        threats = resp.threats.len(),
        more = resp.more,
        "Decoded alerts page"
    );

    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_query_omits_empty_follow() {
        assert!(alerts_query("").is_empty());
    }

    #[test]
    fn test_alerts_query_passes_follow_verbatim() {
        let query = alerts_query("  opaque/+==token ");
        assert_eq!(
            query,
            vec![("follow".to_string(), "  opaque/+==token ".to_string())]
        );
    }

    #[test]
    fn test_decode_truncated_body() {
        let err = decode_alerts_response(br#"{"follow":"abc","more":tr"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_decode_wrong_envelope_type() {
        let err = decode_alerts_response(br#"{"follow":"abc","alerts":{}}"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));

        let err = decode_alerts_response(b"[]").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_decode_reports_failing_alert() {
        let body = br#"{
            "follow": "abc",
            "more": false,
            "alerts": [
                {"eventType": "dns", "event": {"query": "ok.example"}},
                {"eventType": "ip", "event": {"srcPort": "eighty"}}
            ]
        }"#;

        match decode_alerts_response(body).unwrap_err() {
            ClientError::EventDecode {
                index, event_type, ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(event_type, "ip");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
