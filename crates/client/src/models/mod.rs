//! Data models for AlphaSOC API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod alerts;
pub mod common;
pub mod events;

pub use alerts::{Alert, AlertsResponse, Threat, Wisdom};
pub use common::ApiErrorResponse;
pub use events::{AlertEvent, DnsEntry, EVENT_TYPE_DNS, EVENT_TYPE_IP, IpEntry};
