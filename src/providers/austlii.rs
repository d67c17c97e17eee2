//! AustLII provider — the primary source for Australian case law and
//! legislation.
//!
//! Talks to the SINO search CGI at `/cgi-bin/sinosrch.cgi` and the
//! document viewer at `/cgi-bin/viewdoc/au/...`. AustLII also mirrors
//! some NZ material, but NZ citations are resolved against NZLII where
//! the authoritative copies live.

use crate::citation::{self, NeutralCitation};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::jurisdiction;
use crate::orchestrator::normalize::normalize_record;
use crate::provider::LiiProvider;
use crate::types::{DocumentType, Provider, SearchOptions, SearchResult, SortMode};

use super::sino;

/// AustLII search and document scraper.
pub struct AustliiProvider {
    base_url: String,
}

impl AustliiProvider {
    /// Create a provider pointed at the production site.
    pub fn new() -> Self {
        Self {
            base_url: Provider::Austlii.base_url().to_string(),
        }
    }

    /// Override the base URL (mirror or test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn from_config(config: &SearchConfig) -> Self {
        match &config.austlii_base {
            Some(base) => Self::new().with_base_url(base.clone()),
            None => Self::new(),
        }
    }

    /// Build the viewer path for an Australian citation, e.g.
    /// `[1992] HCA 23` → `/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] for courts AustLII does not hold.
    fn document_path(citation: &NeutralCitation) -> Result<String, SearchError> {
        match jurisdiction::jurisdiction_for_court(&citation.court) {
            Some(code) if code != jurisdiction::NZ => Ok(format!(
                "/cgi-bin/viewdoc/au/cases/{code}/{}/{}/{}.html",
                citation.court, citation.year, citation.number
            )),
            Some(_) => Err(SearchError::Parse(format!(
                "court {} is not held by AustLII",
                citation.court
            ))),
            None => Err(SearchError::Parse(format!(
                "unknown court code: {}",
                citation.court
            ))),
        }
    }
}

impl Default for AustliiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LiiProvider for AustliiProvider {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
        sort: SortMode,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "AustLII search");

        let client = http::build_client(config)?;

        let mask = sino::search_mask(Provider::Austlii, options);
        let offset = options.offset.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("method", options.method.sino_value()),
            ("query", query),
            ("meta", "/au"),
            ("mask_path", &mask),
            ("results-order", sort.sino_order()),
        ];
        if options.offset > 0 {
            params.push(("offset", &offset));
        }

        let response = client
            .get(format!("{}/cgi-bin/sinosrch.cgi", self.base_url))
            .query(&params)
            .header("Accept-Language", "en-AU,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("AustLII request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("AustLII HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("AustLII response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "AustLII response received");

        let records = sino::parse_results_page(&html)?;
        let results: Vec<SearchResult> = records
            .iter()
            .filter_map(|record| normalize_record(record, Provider::Austlii, options))
            .collect();

        tracing::debug!(count = results.len(), "AustLII results normalized");
        Ok(results)
    }

    async fn resolve_citation(
        &self,
        citation: &NeutralCitation,
        config: &SearchConfig,
    ) -> Result<SearchResult, SearchError> {
        let path = Self::document_path(citation)?;
        let url = format!("{}{path}", self.base_url);
        tracing::trace!(%citation, "AustLII citation resolution");

        let client = http::build_client(config)?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("AustLII request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("AustLII HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("AustLII response read failed: {e}")))?;

        let title = sino::extract_page_title(&html)?;
        let reported_citation = citation::extract_reported_citation(&title);

        Ok(SearchResult {
            title,
            neutral_citation: Some(citation.to_string()),
            reported_citation,
            url,
            source: Provider::Austlii,
            summary: None,
            jurisdiction: jurisdiction::jurisdiction_for_court(&citation.court)
                .map(str::to_string),
            year: Some(citation.year.clone()),
            doc_type: DocumentType::Case,
        })
    }

    fn provider(&self) -> Provider {
        Provider::Austlii
    }
}
