//! Shared response shapes.

use serde::Deserialize;

/// Error body returned by the API on non-success responses.
///
/// Example: `{"message": "invalid API key"}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
}
