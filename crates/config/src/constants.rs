//! Centralized constants for the AlphaSOC client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// API Defaults
// =============================================================================

/// Default AlphaSOC API host.
pub const DEFAULT_HOST: &str = "https://api.alphasoc.net";

/// Default AlphaSOC API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for configured retries.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_HOST: &str = "ALPHASOC_HOST";
pub const ENV_API_VERSION: &str = "ALPHASOC_API_VERSION";
pub const ENV_API_KEY: &str = "ALPHASOC_API_KEY";
pub const ENV_TIMEOUT: &str = "ALPHASOC_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "ALPHASOC_MAX_RETRIES";
pub const ENV_SKIP_VERIFY: &str = "ALPHASOC_SKIP_VERIFY";
pub const ENV_CONFIG_PATH: &str = "ALPHASOC_CONFIG_PATH";
