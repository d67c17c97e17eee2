//! NZLII provider — authoritative source for New Zealand decisions.
//!
//! Runs the same SINO search software as AustLII but lays documents out
//! without a sub-jurisdiction segment: `/nz/cases/NZSC/2015/100.html`.
//! The orchestrator calls this provider directly for `nz` searches and
//! as the resolution target for NZ citations surfacing in AustLII
//! results.

use crate::citation::{self, NeutralCitation};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::jurisdiction;
use crate::orchestrator::normalize::normalize_record;
use crate::provider::LiiProvider;
use crate::types::{DocumentType, Provider, SearchOptions, SearchResult, SortMode};

use super::sino;

/// NZLII search and document scraper.
pub struct NzliiProvider {
    base_url: String,
}

impl NzliiProvider {
    /// Create a provider pointed at the production site.
    pub fn new() -> Self {
        Self {
            base_url: Provider::Nzlii.base_url().to_string(),
        }
    }

    /// Override the base URL (mirror or test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn from_config(config: &SearchConfig) -> Self {
        match &config.nzlii_base {
            Some(base) => Self::new().with_base_url(base.clone()),
            None => Self::new(),
        }
    }

    /// Build the document path for a NZ citation, e.g. `[2015] NZSC 100`
    /// → `/nz/cases/NZSC/2015/100.html`. No sub-jurisdiction segment.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] for courts NZLII does not hold.
    fn document_path(citation: &NeutralCitation) -> Result<String, SearchError> {
        match jurisdiction::jurisdiction_for_court(&citation.court) {
            Some(jurisdiction::NZ) => Ok(format!(
                "/nz/cases/{}/{}/{}.html",
                citation.court, citation.year, citation.number
            )),
            Some(_) => Err(SearchError::Parse(format!(
                "court {} is not held by NZLII",
                citation.court
            ))),
            None => Err(SearchError::Parse(format!(
                "unknown court code: {}",
                citation.court
            ))),
        }
    }
}

impl Default for NzliiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LiiProvider for NzliiProvider {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
        sort: SortMode,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "NZLII search");

        let client = http::build_client(config)?;

        let mask = sino::search_mask(Provider::Nzlii, options);
        let offset = options.offset.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("method", options.method.sino_value()),
            ("query", query),
            ("meta", "/nz"),
            ("mask_path", &mask),
            ("results-order", sort.sino_order()),
        ];
        if options.offset > 0 {
            params.push(("offset", &offset));
        }

        let response = client
            .get(format!("{}/cgi-bin/sinosrch.cgi", self.base_url))
            .query(&params)
            .header("Accept-Language", "en-NZ,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("NZLII request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("NZLII HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("NZLII response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "NZLII response received");

        let records = sino::parse_results_page(&html)?;
        let results: Vec<SearchResult> = records
            .iter()
            .filter_map(|record| normalize_record(record, Provider::Nzlii, options))
            .collect();

        tracing::debug!(count = results.len(), "NZLII results normalized");
        Ok(results)
    }

    async fn resolve_citation(
        &self,
        citation: &NeutralCitation,
        config: &SearchConfig,
    ) -> Result<SearchResult, SearchError> {
        let path = Self::document_path(citation)?;
        let url = format!("{}{path}", self.base_url);
        tracing::trace!(%citation, "NZLII citation resolution");

        let client = http::build_client(config)?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("NZLII request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("NZLII HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("NZLII response read failed: {e}")))?;

        let title = sino::extract_page_title(&html)?;
        let reported_citation = citation::extract_reported_citation(&title);

        Ok(SearchResult {
            title,
            neutral_citation: Some(citation.to_string()),
            reported_citation,
            url,
            source: Provider::Nzlii,
            summary: None,
            jurisdiction: Some(jurisdiction::NZ.to_string()),
            year: Some(citation.year.clone()),
            doc_type: DocumentType::Case,
        })
    }

    fn provider(&self) -> Provider {
        Provider::Nzlii
    }
}
