//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use alphasoc_client::testing::{RecordingTransport, load_fixture, load_fixture_str};

#[allow(unused_imports)]
pub use alphasoc_client::{AlphaSocClient, ClientError, HttpTransport};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used throughout the tests.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-key";

/// Client over a fake transport answering every call with `fixture`.
#[allow(dead_code)]
pub fn fake_client(fixture: &str) -> AlphaSocClient<RecordingTransport> {
    AlphaSocClient::builder()
        .api_key(TEST_API_KEY.to_string())
        .build_with_transport(RecordingTransport::with_body(load_fixture_str(fixture)))
}

/// Real HTTP client pointed at a wiremock server.
#[allow(dead_code)]
pub fn http_client(server: &MockServer, max_retries: usize) -> AlphaSocClient {
    AlphaSocClient::builder()
        .host(server.uri())
        .api_key(TEST_API_KEY.to_string())
        .timeout(Duration::from_secs(5))
        .max_retries(max_retries)
        .build()
        .expect("client should build")
}
