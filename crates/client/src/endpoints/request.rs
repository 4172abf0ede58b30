//! Retry helper for HTTP requests with exponential backoff.
//!
//! This module retries requests that fail with HTTP 429 (Too Many Requests),
//! sleeping `2^attempt` seconds between attempts, and converts any other
//! non-success status into [`ClientError::ApiError`].

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorResponse;

/// Sends an HTTP request, retrying HTTP 429 responses up to `max_retries` times.
///
/// # Errors
///
/// - `ClientError::MaxRetriesExceeded` when every attempt was rate limited.
/// - `ClientError::ApiError` for any other non-success status.
/// - `ClientError::HttpError` for transport failures, propagated as-is.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 0 => {
                debug!("Request builder cannot be cloned, single attempt only");
                return check_status(builder.send().await?).await;
            }
            None => return Err(ClientError::MaxRetriesExceeded(attempt)),
        };

        let response = attempt_builder.send().await?;

        if !ClientError::is_retryable_status(response.status().as_u16()) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = backoff_secs(attempt);
            debug!(
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_secs = backoff_secs,
                "Rate limited (HTTP 429), retrying with exponential backoff"
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
        }
    }

    debug!(
        attempts = max_retries + 1,
        "Max retries exhausted for rate-limited request"
    );
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Seconds to wait before retry number `attempt + 1`: `2^attempt`, saturating.
fn backoff_secs(attempt: usize) -> u64 {
    2u64.saturating_pow(u32::try_from(attempt).unwrap_or(u32::MAX))
}

/// Pass successful responses through; turn everything else into an API error.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(err) => err.message,
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
