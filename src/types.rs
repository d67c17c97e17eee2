//! Core types for legal search results, providers, and search options.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SearchError};
use crate::jurisdiction;

/// A single search result returned from a legal information institute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The document title as it appears on the results page.
    pub title: String,
    /// Canonical neutral citation (`[YYYY] COURT NUM`) when the title
    /// carries one. Absent for legislation and most secondary material.
    pub neutral_citation: Option<String>,
    /// Traditional report-series citation (e.g. `(1992) 175 CLR 1`)
    /// when one appears in the title or summary.
    pub reported_citation: Option<String>,
    /// Fully-qualified document URL with viewer decoration stripped.
    pub url: String,
    /// Which institute served this record.
    pub source: Provider,
    /// Snippet or database line accompanying the hit, if any.
    pub summary: Option<String>,
    /// Jurisdiction code derived from the document path (e.g. `nsw`, `nz`).
    pub jurisdiction: Option<String>,
    /// Decision year taken from the neutral citation.
    pub year: Option<String>,
    /// Whether this record is case law or legislation.
    pub doc_type: DocumentType,
}

/// Legal information institutes that lii-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Australasian Legal Information Institute — primary source for
    /// Australian case law and legislation, mirrors some NZ material.
    Austlii,
    /// New Zealand Legal Information Institute — authoritative for NZ
    /// decisions, runs the same search software as AustLII.
    Nzlii,
}

impl Provider {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Austlii => "AustLII",
            Self::Nzlii => "NZLII",
        }
    }

    /// Returns the production base URL for this provider.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Austlii => "https://www.austlii.edu.au",
            Self::Nzlii => "https://www.nzlii.org",
        }
    }

    /// Returns the country segment this provider is authoritative for
    /// (`au` or `nz`), as used in document paths and search masks.
    pub fn country(&self) -> &'static str {
        match self {
            Self::Austlii => "au",
            Self::Nzlii => "nz",
        }
    }

    /// Returns the other provider. Used to pick the cross-border
    /// institute for citation resolution.
    pub fn other(&self) -> Provider {
        match self {
            Self::Austlii => Self::Nzlii,
            Self::Nzlii => Self::Austlii,
        }
    }

    /// Returns all available provider variants.
    pub fn all() -> &'static [Provider] {
        &[Self::Austlii, Self::Nzlii]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The class of document a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Judicial decisions.
    Case,
    /// Acts and regulations.
    Legislation,
}

impl DocumentType {
    /// Returns the path segment institutes use for this document class.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Case => "cases",
            Self::Legislation => "legis",
        }
    }
}

/// Search method passed through to the institute's search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMethod {
    /// Let the engine pick based on query shape.
    Auto,
    /// Boolean connector search over full text.
    Boolean,
    /// Match against document titles only.
    Title,
}

impl SearchMethod {
    /// Returns the value the search CGI expects for its `method` parameter.
    pub fn sino_value(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Boolean => "boolean",
            Self::Title => "title",
        }
    }
}

impl Default for SearchMethod {
    fn default() -> Self {
        Self::Auto
    }
}

/// Caller-facing sort preference. `Auto` defers to query classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Decide from the query: named authorities sort by relevance,
    /// everything else by date.
    Auto,
    /// Force relevance ordering.
    Relevance,
    /// Force reverse-chronological ordering.
    Date,
}

impl Default for SortBy {
    fn default() -> Self {
        Self::Auto
    }
}

/// The concrete ordering a search executes with, after `SortBy::Auto`
/// has been resolved against the query classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Best match first.
    Relevance,
    /// Most recent first.
    Date,
}

impl SortMode {
    /// Returns the value the search CGI expects for its `results-order`
    /// parameter.
    pub fn sino_order(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Date => "date",
        }
    }
}

/// Options controlling a single search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Case law or legislation.
    pub doc_type: DocumentType,
    /// Jurisdiction code to restrict the search to (e.g. `cth`, `nsw`,
    /// `nz`). `None` searches the whole country database.
    pub jurisdiction: Option<String>,
    /// Maximum results to return, applied after ranking and merging.
    pub limit: usize,
    /// Sort preference.
    pub sort_by: SortBy,
    /// Search method forwarded to the institute.
    pub method: SearchMethod,
    /// Result offset for pagination, forwarded to the institute.
    pub offset: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            doc_type: DocumentType::Case,
            jurisdiction: None,
            limit: 20,
            sort_by: SortBy::Auto,
            method: SearchMethod::Auto,
            offset: 0,
        }
    }
}

impl SearchOptions {
    /// Validates these options, returning an error describing the first
    /// problem found.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `limit` is zero or the
    /// jurisdiction code is not one this crate knows how to mask.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(SearchError::Config("limit must be > 0".into()));
        }
        if let Some(code) = &self.jurisdiction {
            if !jurisdiction::is_known_code(code) {
                return Err(SearchError::Config(format!(
                    "unknown jurisdiction code: {code}"
                )));
            }
        }
        Ok(())
    }
}

/// Extracted readable text from a fetched legal document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContent {
    /// The URL that was fetched.
    pub url: String,
    /// The document title extracted from HTML.
    pub title: String,
    /// Cleaned judgment or statute text with viewer chrome stripped.
    pub text: String,
    /// Number of words in the extracted text.
    pub word_count: usize,
}
