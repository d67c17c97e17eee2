//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls timeouts, request behaviour, and which
//! hosts the providers actually talk to. The defaults are tuned for
//! reliable, polite scraping of the institute sites.

use crate::error::SearchError;

/// Configuration for a legal search operation.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Random delay range in milliseconds `(min, max)` inserted between
    /// the primary search and the cross-border resolution pass.
    /// Prevents rate limiting by spreading requests over time.
    pub request_delay_ms: (u64, u64),
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Whether to resolve cross-border citations against the other
    /// country's institute after the primary search.
    pub resolve_secondary: bool,
    /// Override for the AustLII base URL. `None` uses the production
    /// site; set this to point at a mirror or a test server.
    pub austlii_base: Option<String>,
    /// Override for the NZLII base URL.
    pub nzlii_base: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            request_delay_ms: (100, 400),
            user_agent: None,
            resolve_secondary: true,
            austlii_base: None,
            nzlii_base: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `request_delay_ms.0` must be <= `request_delay_ms.1`
    /// - base URL overrides, when set, must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.request_delay_ms.0 > self.request_delay_ms.1 {
            return Err(SearchError::Config(
                "request_delay_ms min must be <= max".into(),
            ));
        }
        for (name, base) in [
            ("austlii_base", &self.austlii_base),
            ("nzlii_base", &self.nzlii_base),
        ] {
            if let Some(url) = base {
                if url.trim().is_empty() {
                    return Err(SearchError::Config(format!("{name} must not be empty")));
                }
            }
        }
        Ok(())
    }
}
