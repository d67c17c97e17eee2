//! Error types for the lii-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Queries and fetched document text never
//! appear in error messages.

/// Errors that can occur during legal search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to a legal information institute failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a results page or document HTML.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration or options.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for lii-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
