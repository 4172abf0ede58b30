//! AlphaSOC API client.
//!
//! This crate provides a type-safe client for the AlphaSOC security
//! analytics API. It fetches pages of the alert stream and decodes each
//! alert's event payload according to its `eventType`.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod transport;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::AlphaSocClient;
pub use client::builder::AlphaSocClientBuilder;
pub use error::{ClientError, Result};
pub use models::{Alert, AlertEvent, AlertsResponse, DnsEntry, IpEntry, Threat, Wisdom};
pub use transport::{HttpTransport, Transport};
