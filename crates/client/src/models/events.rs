//! Typed alert event payloads.
//!
//! # What this module handles:
//! - DNS and IP event shapes as documented by the AlphaSOC events API
//! - Dispatching a raw `event` payload on its `eventType` discriminator
//!
//! # What this module does NOT handle:
//! - The surrounding alert envelope (see [`crate::models::alerts`])
//!
//! # Invariants
//! - Every wire field is optional; an absent field is `None`, but a field of
//!   the wrong JSON type fails decoding.
//! - Unknown fields are ignored.
//! - Unrecognized discriminators never fail; they yield [`AlertEvent::Unknown`].

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Discriminator value for DNS events.
pub const EVENT_TYPE_DNS: &str = "dns";
/// Discriminator value for IP events.
pub const EVENT_TYPE_IP: &str = "ip";

/// A DNS query flagged by the analytics engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsEntry {
    /// Time the query was observed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<DateTime<Utc>>,
    /// Client that issued the query.
    #[serde(rename = "srcIP", default, skip_serializing_if = "Option::is_none")]
    pub src_ip: Option<IpAddr>,
    /// Queried domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Query type, e.g. `A` or `TXT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qtype: Option<String>,
}

/// An IP flow flagged by the analytics engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<DateTime<Utc>>,
    #[serde(rename = "srcIP", default, skip_serializing_if = "Option::is_none")]
    pub src_ip: Option<IpAddr>,
    #[serde(rename = "srcPort", default, skip_serializing_if = "Option::is_none")]
    pub src_port: Option<u16>,
    #[serde(rename = "destIP", default, skip_serializing_if = "Option::is_none")]
    pub dest_ip: Option<IpAddr>,
    #[serde(rename = "destPort", default, skip_serializing_if = "Option::is_none")]
    pub dest_port: Option<u16>,
    /// Transport protocol, e.g. `tcp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proto: Option<String>,
    #[serde(rename = "bytesIn", default, skip_serializing_if = "Option::is_none")]
    pub bytes_in: Option<u64>,
    #[serde(rename = "bytesOut", default, skip_serializing_if = "Option::is_none")]
    pub bytes_out: Option<u64>,
    /// JA3 TLS client fingerprint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ja3: Option<String>,
}

/// Decoded view of an alert's `event` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AlertEvent {
    /// The discriminator is not one this client knows how to decode.
    #[default]
    Unknown,
    Dns(DnsEntry),
    Ip(IpEntry),
}

impl AlertEvent {
    /// Decode `event` according to `event_type`.
    ///
    /// `"dns"` and `"ip"` are decoded into their typed shapes; any other
    /// discriminator returns [`AlertEvent::Unknown`] without inspecting the payload.
    pub fn decode(event_type: &str, event: &serde_json::Value) -> Result<Self, serde_json::Error> {
        match event_type {
            EVENT_TYPE_DNS => decode_payload(event).map(Self::Dns),
            EVENT_TYPE_IP => decode_payload(event).map(Self::Ip),
            _ => Ok(Self::Unknown),
        }
    }

    /// Whether `event_type` names a payload shape this client decodes.
    pub fn is_known_type(event_type: &str) -> bool {
        matches!(event_type, EVENT_TYPE_DNS | EVENT_TYPE_IP)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A `null` payload decodes to an empty entry.
fn decode_payload<T>(event: &serde_json::Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if event.is_null() {
        return Ok(T::default());
    }
    T::deserialize(event)
}
