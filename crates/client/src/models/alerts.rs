//! Alert models for the AlphaSOC alerts API.
//!
//! # What this module handles:
//! - Deserialization of one page of the `/alerts` stream
//! - Resolving each alert's typed event view from its raw payload
//! - Threat metadata lookup for alerts
//!
//! # What this module does NOT handle:
//! - HTTP calls (see [`crate::endpoints::alerts`])
//! - Following the stream across pages (callers sequence calls with `follow`)
//!
//! # Invariants
//! - `follow` is opaque and never parsed.
//! - Absent or `null` `alerts`/`threats` decode as empty.
//! - `Alert::event` always holds the payload exactly as received.
//! - Threat ids on an alert are references only; a dangling id is not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::events::{AlertEvent, DnsEntry, IpEntry};
use crate::serde_helpers::{null_as_default, present};

/// One page of the alert stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertsResponse {
    /// Cursor to pass on the next call to continue the stream.
    #[serde(default, deserialize_with = "null_as_default")]
    pub follow: String,
    /// Whether more pages are available beyond this one.
    #[serde(default)]
    pub more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Alerts in server order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub alerts: Vec<Alert>,
    /// Threat metadata keyed by threat id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub threats: HashMap<String, Threat>,
}

impl AlertsResponse {
    /// Look up threat metadata by id.
    pub fn threat_for(&self, id: &str) -> Option<&Threat> {
        self.threats.get(id)
    }

    /// Threats referenced by `alert` that this page describes, in the alert's order.
    ///
    /// Ids without an entry in [`AlertsResponse::threats`] are skipped.
    pub fn threats_of<'a>(
        &'a self,
        alert: &'a Alert,
    ) -> impl Iterator<Item = (&'a str, &'a Threat)> + 'a {
        alert
            .threats
            .iter()
            .filter_map(|id| self.threat_for(id).map(|t| (id.as_str(), t)))
    }

    /// Highest severity among the threats referenced by `alert`, if any resolve.
    pub fn max_severity(&self, alert: &Alert) -> Option<i64> {
        self.threats_of(alert).map(|(_, t)| t.severity).max()
    }
}

/// A single finding from the analytics engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    /// Discriminator selecting the shape of `event`.
    #[serde(rename = "eventType", default, deserialize_with = "null_as_default")]
    pub event_type: String,
    /// Raw event payload as received; `None` when the field is absent.
    /// An explicit `null` is kept as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub event: Option<serde_json::Value>,
    /// Typed view of `event`, filled by [`Alert::decode_event`].
    #[serde(skip)]
    pub decoded: AlertEvent,
    /// Ids into [`AlertsResponse::threats`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub threats: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wisdom: Wisdom,
}

impl Alert {
    /// Decode `event` into [`Alert::decoded`] according to `event_type`.
    ///
    /// On error `decoded` is left untouched. A `dns` or `ip` alert without an
    /// `event` field fails; an explicit `null` decodes to an empty entry.
    pub fn decode_event(&mut self) -> Result<(), serde_json::Error> {
        self.decoded = match &self.event {
            Some(event) => AlertEvent::decode(&self.event_type, event)?,
            None if AlertEvent::is_known_type(&self.event_type) => {
                return Err(serde::de::Error::missing_field("event"));
            }
            None => AlertEvent::Unknown,
        };
        Ok(())
    }

    /// DNS view, present only for `eventType == "dns"`.
    pub fn dns(&self) -> Option<&DnsEntry> {
        match &self.decoded {
            AlertEvent::Dns(entry) => Some(entry),
            _ => None,
        }
    }

    /// IP view, present only for `eventType == "ip"`.
    pub fn ip(&self) -> Option<&IpEntry> {
        match &self.decoded {
            AlertEvent::Ip(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Auxiliary classifier output attached to an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wisdom {
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<String>,
}

/// Descriptive metadata for a threat id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Threat {
    /// Human-readable name.
    pub title: String,
    pub severity: i64,
    /// `true` for policy violations, `false` for security risks.
    pub policy: bool,
}
