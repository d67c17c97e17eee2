//! Trait definition for pluggable legal information institute backends.
//!
//! Each institute (AustLII, NZLII) implements [`LiiProvider`] to provide
//! a uniform interface for searching and for resolving a neutral
//! citation straight to its document.

use crate::citation::NeutralCitation;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{Provider, SearchOptions, SearchResult, SortMode};

/// One hit as lifted from a results page, before normalization.
///
/// The parser extracts only what the markup gives it; everything
/// derived (citations, jurisdiction, canonical URL) is the
/// normalizer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Anchor text of the hit.
    pub title: String,
    /// The `href` exactly as it appears in the markup. May be absolute,
    /// protocol-relative, or path-relative.
    pub href: String,
    /// Database line or snippet accompanying the hit, if any.
    pub summary: Option<String>,
}

/// A pluggable institute backend.
///
/// Implementors scrape a specific institute's search interface and
/// extract structured [`SearchResult`] values. Each provider handles
/// its own:
///
/// - Search URL construction with query encoding and path masks
/// - HTTP request with appropriate headers
/// - Results-page parsing via CSS selectors
/// - Document path construction for citation resolution
///
/// All implementations must be `Send + Sync` for concurrent resolution.
pub trait LiiProvider: Send + Sync {
    /// Perform a search and return normalized results.
    ///
    /// # Arguments
    ///
    /// * `query` — The search query (the implementation handles encoding).
    /// * `options` — Document type, jurisdiction, method, and offset.
    /// * `sort` — The resolved sort mode, forwarded as the engine's
    ///   results ordering.
    /// * `config` — Timeouts and request behaviour.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails or the results
    /// page cannot be parsed.
    fn search(
        &self,
        query: &str,
        options: &SearchOptions,
        sort: SortMode,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Resolve a neutral citation directly to its document on this
    /// institute, without a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the court is not one this institute
    /// holds, the document does not exist, or the page cannot be
    /// fetched.
    fn resolve_citation(
        &self,
        citation: &NeutralCitation,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<SearchResult, SearchError>> + Send;

    /// Returns which [`Provider`] variant this implementation represents.
    fn provider(&self) -> Provider;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentType;

    /// A mock provider for testing trait bounds and async execution.
    struct MockProvider {
        provider: Provider,
        results: Vec<SearchResult>,
    }

    impl MockProvider {
        fn new(provider: Provider, results: Vec<SearchResult>) -> Self {
            Self { provider, results }
        }

        fn failing(provider: Provider) -> Self {
            Self {
                provider,
                results: vec![],
            }
        }
    }

    impl LiiProvider for MockProvider {
        async fn search(
            &self,
            _query: &str,
            _options: &SearchOptions,
            _sort: SortMode,
            _config: &SearchConfig,
        ) -> Result<Vec<SearchResult>, SearchError> {
            if self.results.is_empty() {
                return Err(SearchError::Parse("mock provider failure".into()));
            }
            Ok(self.results.clone())
        }

        async fn resolve_citation(
            &self,
            citation: &NeutralCitation,
            _config: &SearchConfig,
        ) -> Result<SearchResult, SearchError> {
            self.results
                .iter()
                .find(|r| r.neutral_citation.as_deref() == Some(citation.to_string().as_str()))
                .cloned()
                .ok_or_else(|| SearchError::Http("404".into()))
        }

        fn provider(&self) -> Provider {
            self.provider
        }
    }

    fn make_result(citation: &str) -> SearchResult {
        SearchResult {
            title: format!("Some Case {citation}"),
            neutral_citation: Some(citation.into()),
            reported_citation: None,
            url: "https://www.austlii.edu.au/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html".into(),
            source: Provider::Austlii,
            summary: None,
            jurisdiction: Some("cth".into()),
            year: Some("1992".into()),
            doc_type: DocumentType::Case,
        }
    }

    #[test]
    fn mock_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockProvider>();
    }

    #[tokio::test]
    async fn mock_provider_returns_results() {
        let provider = MockProvider::new(Provider::Austlii, vec![make_result("[1992] HCA 23")]);
        let config = SearchConfig::default();
        let options = SearchOptions::default();

        let results = provider
            .search("mabo", &options, SortMode::Relevance, &config)
            .await
            .expect("should succeed");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].neutral_citation.as_deref(), Some("[1992] HCA 23"));
    }

    #[tokio::test]
    async fn mock_provider_propagates_errors() {
        let provider = MockProvider::failing(Provider::Nzlii);
        let config = SearchConfig::default();
        let options = SearchOptions::default();

        let result = provider
            .search("mabo", &options, SortMode::Date, &config)
            .await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("mock provider failure"));
    }

    #[tokio::test]
    async fn mock_resolution_finds_matching_citation() {
        let provider = MockProvider::new(Provider::Austlii, vec![make_result("[1992] HCA 23")]);
        let config = SearchConfig::default();
        let citation = NeutralCitation {
            year: "1992".into(),
            court: "HCA".into(),
            number: "23".into(),
        };

        let resolved = provider
            .resolve_citation(&citation, &config)
            .await
            .expect("should resolve");
        assert_eq!(resolved.neutral_citation.as_deref(), Some("[1992] HCA 23"));
    }

    #[test]
    fn provider_returns_correct_variant() {
        let provider = MockProvider::new(Provider::Nzlii, vec![]);
        assert_eq!(provider.provider(), Provider::Nzlii);
    }
}
