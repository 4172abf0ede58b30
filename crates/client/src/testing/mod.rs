//! Testing utilities for AlphaSOC client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use alphasoc_client::testing::{RecordingTransport, load_fixture_str};
//!
//! let transport = RecordingTransport::with_body(load_fixture_str("alerts/mixed_page.json"));
//! ```

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};
use crate::transport::Transport;

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path_rel: &str) -> serde_json::Value {
    serde_json::from_str(&load_fixture_str(fixture_path_rel)).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim.
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_fixture_str(fixture_path_rel: &str) -> String {
    let full_path = fixture_path(fixture_path_rel);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// One request observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub api_key: String,
}

enum CannedResponse {
    Body(Vec<u8>),
    Error(Box<dyn Fn() -> ClientError + Send + Sync>),
}

/// In-memory [`Transport`] that returns a canned response and records every call.
pub struct RecordingTransport {
    response: CannedResponse,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    /// Respond to every call with `body`.
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: CannedResponse::Body(body.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with the error produced by `make_error`.
    pub fn with_error<F>(make_error: F) -> Self
    where
        F: Fn() -> ClientError + Send + Sync + 'static,
    {
        Self {
            response: CannedResponse::Error(Box::new(make_error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls observed so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }
}

impl Transport for RecordingTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        api_key: &SecretString,
    ) -> Result<Vec<u8>> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(RecordedCall {
                path: path.to_string(),
                query: query.to_vec(),
                api_key: api_key.expose_secret().to_string(),
            });

        match &self.response {
            CannedResponse::Body(body) => Ok(body.clone()),
            CannedResponse::Error(make_error) => Err(make_error()),
        }
    }
}
