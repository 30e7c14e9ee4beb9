//! Configuration for the PANTHER client
//!
//! Service address, request timeout and pacing delay. Passed into the client
//! explicitly so tests can point it at a mock server.

use crate::error::{CliError, Result};
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Public PANTHER service address.
pub const DEFAULT_BASE_URL: &str = "https://pantherdb.org";

/// Default timeout for API requests in seconds.
/// Enrichment over large gene lists can take minutes server-side.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 300;

/// Default pause before each lookup call, in seconds.
pub const DEFAULT_REQUEST_DELAY_SECS: u64 = 1;

/// Largest gene list the enrichment endpoint accepts.
pub const MAX_GENE_INPUT: usize = 100_000;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL, without trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Pause inserted before each lookup call
    pub request_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            request_delay: Duration::from_secs(DEFAULT_REQUEST_DELAY_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a config for the given base URL with default timings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Load config from environment variables
    ///
    /// - `PANTHER_BASE_URL`: service address
    /// - `PANTHER_API_TIMEOUT_SECS`: per-request timeout
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PANTHER_BASE_URL") {
            config = config.with_base_url(url);
        }

        if let Ok(raw) = std::env::var("PANTHER_API_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CliError::config(format!(
                    "PANTHER_API_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the base URL; a trailing slash is dropped
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the pacing delay
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
