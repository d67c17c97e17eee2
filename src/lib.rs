//! # lii-search
//!
//! Embedded case-law and legislation search over the Australasian legal
//! information institutes (AustLII and NZLII).
//!
//! This crate provides legal research search by querying the institutes'
//! public SINO search engine directly — no API keys, no external
//! services, no user setup required. It compiles into a host binary as
//! a library dependency.
//!
//! ## Design
//!
//! - Scrapes AustLII and NZLII results pages using CSS selectors
//! - Classifies each query once (party-v-party, in-re matter, neutral
//!   citation, quoted phrase, topic) and derives the results ordering
//!   from the classification
//! - Boosts named-authority results so the cited case outranks cases
//!   that merely mention it
//! - Resolves cross-border citations against the other institute, at
//!   most five lookups in flight, and merges on neutral citation with
//!   the authoritative copy preferred
//! - Graceful degradation: resolution failures drop silently; the
//!   primary result list always survives
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — this is a library, not a server
//! - Search queries are logged only at trace level
//! - Document fetches accept http/https URLs only
//! - Randomised User-Agent and a polite request delay keep load on the
//!   non-commercial institutes low

pub mod citation;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod jurisdiction;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod query;
pub mod types;

pub use citation::NeutralCitation;
pub use config::SearchConfig;
pub use content::fetch_document;
pub use error::{Result, SearchError};
pub use provider::LiiProvider;
pub use providers::{AustliiProvider, NzliiProvider};
pub use query::QueryKind;
pub use types::{
    DocumentContent, DocumentType, Provider, SearchMethod, SearchOptions, SearchResult, SortBy,
    SortMode,
};

/// Search Australasian case law and legislation.
///
/// Classifies the query, searches the primary institute (NZLII when
/// `options.jurisdiction` is `"nz"`, AustLII otherwise), boosts
/// named-authority matches, resolves cross-border citations against the
/// other institute, and returns up to `options.limit` merged results.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an empty query or invalid
/// options/configuration, and [`SearchError::Http`] /
/// [`SearchError::Parse`] when the primary institute cannot be searched.
/// Cross-border resolution failures never fail the search; they only
/// reduce enrichment.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lii_search::Result<()> {
/// let options = lii_search::SearchOptions::default();
/// let config = lii_search::SearchConfig::default();
/// let results = lii_search::search("Mabo v Queensland", &options, &config).await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    options: &SearchOptions,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::Config("query must not be empty".into()));
    }
    options.validate()?;
    config.validate()?;
    orchestrator::search::orchestrate_search(query, options, config).await
}

/// Search with default options and configuration.
///
/// Convenience wrapper around [`search`]: case law, all jurisdictions,
/// twenty results, automatic ordering.
///
/// # Errors
///
/// Same as [`search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lii_search::Result<()> {
/// let results = lii_search::search_default("[1992] HCA 23").await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_default(query: &str) -> Result<Vec<SearchResult>> {
    search(query, &SearchOptions::default(), &SearchConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_rejects_empty_query() {
        let result = search("", &SearchOptions::default(), &SearchConfig::default()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("query"));
    }

    #[tokio::test]
    async fn search_rejects_whitespace_query() {
        let result = search("   \n\t ", &SearchOptions::default(), &SearchConfig::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn search_rejects_zero_limit() {
        let options = SearchOptions {
            limit: 0,
            ..Default::default()
        };
        let result = search("negligence", &options, &SearchConfig::default()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("limit"));
    }

    #[tokio::test]
    async fn search_rejects_unknown_jurisdiction() {
        let options = SearchOptions {
            jurisdiction: Some("uk".into()),
            ..Default::default()
        };
        let result = search("negligence", &options, &SearchConfig::default()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("jurisdiction"));
    }

    #[tokio::test]
    async fn search_rejects_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("negligence", &SearchOptions::default(), &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }
}
