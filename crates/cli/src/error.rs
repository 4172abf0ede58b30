//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use alphasoc_client::ClientError;

/// Structured exit codes for the alphasoc CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Missing or rejected API key.
    ///
    /// Scripts should supply or rotate the key.
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The server answered with a body that does not match the alert schema.
    DecodeError = 4,

    /// HTTP 429 persisted after all retries.
    RateLimited = 7,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::MissingApiKey => ExitCode::AuthenticationFailed,
            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,
            ClientError::MaxRetriesExceeded(_) => ExitCode::RateLimited,

            ClientError::Decode(_) | ClientError::EventDecode { .. } => ExitCode::DecodeError,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else if e.is_decode() {
                    ExitCode::DecodeError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::InvalidUrl(_) | ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://api.alphasoc.net/v1/alerts".to_string(),
            message: "nope".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::DecodeError.as_i32(), 4);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_auth_errors() {
        assert_eq!(
            ExitCode::from(&ClientError::MissingApiKey),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_rate_limit_errors() {
        assert_eq!(ExitCode::from(&api_error(429)), ExitCode::RateLimited);
        assert_eq!(
            ExitCode::from(&ClientError::MaxRetriesExceeded(3)),
            ExitCode::RateLimited
        );
    }

    #[test]
    fn test_decode_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ExitCode::from(&ClientError::Decode(err)), ExitCode::DecodeError);
    }

    #[test]
    fn test_other_api_errors_are_general() {
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
        assert_eq!(
            ExitCode::from(&ClientError::InvalidUrl("x".to_string())),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_exit_code_ext_walks_chain() {
        let err = anyhow::Error::from(ClientError::MissingApiKey);
        assert_eq!(err.exit_code(), ExitCode::AuthenticationFailed);

        let wrapped: anyhow::Result<()> = Err(api_error(429)).context("fetching alerts");
        assert_eq!(wrapped.unwrap_err().exit_code(), ExitCode::RateLimited);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(plain.exit_code(), ExitCode::GeneralError);
    }
}
