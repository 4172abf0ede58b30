//! Low-level endpoint helpers for the AlphaSOC API.
//!
//! This module provides request construction, response decoding and the
//! HTTP retry helper. High-level methods live on [`crate::AlphaSocClient`].

mod alerts;
mod request;

pub use alerts::{ALERTS_PATH, alerts_query, decode_alerts_response};
pub use request::send_request_with_retry;
