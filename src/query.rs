//! Query classification and sort-mode selection.
//!
//! Legal queries fall into a handful of shapes with very different
//! intent: a party-vs-party name or a citation is a lookup for one
//! specific authority, while a bare topic phrase is doctrinal research.
//! Classification is purely lexical and runs exactly once per search;
//! the orchestrator threads the resulting [`QueryKind`] through sort
//! selection and relevance boosting rather than re-deriving it.

use regex::Regex;
use std::sync::OnceLock;

use crate::citation;
use crate::types::{DocumentType, SearchOptions, SortBy, SortMode};

static PARTY_PATTERN: OnceLock<Regex> = OnceLock::new();
static MATTER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `<word> v <word>` with an optional period after the `v`.
fn party_pattern() -> &'static Regex {
    PARTY_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(\w+)\s+v\.?\s+(\w+)").expect("party pattern is valid")
    })
}

/// `re <word>` or `in re <word>` at a word boundary.
fn matter_pattern() -> &'static Regex {
    MATTER_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(?:in\s+re|re)\s+\w+").expect("matter pattern is valid")
    })
}

/// The shape of a query, computed once per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// Party-vs-party case name. The captured tokens feed the
    /// relevance booster's party scoring.
    PartyCase {
        /// Token before the `v`.
        first: String,
        /// Token after the `v`.
        second: String,
    },
    /// `Re` / `In re` matter name.
    Matter,
    /// A neutral citation, carried verbatim as matched.
    Citation(String),
    /// The query contains a quoted phrase.
    QuotedPhrase,
    /// Anything else — doctrinal or topical research.
    Topic,
}

impl QueryKind {
    /// Whether the query names a specific authority rather than a
    /// topic. Named-authority searches sort by relevance so the exact
    /// document surfaces regardless of its age.
    pub fn is_named_authority(&self) -> bool {
        !matches!(self, Self::Topic)
    }
}

/// Classifies a query by its lexical shape.
///
/// Checks run in a fixed order and the first hit wins. The party check
/// runs before the citation check so a query carrying both (`Mabo v
/// Queensland [1992] HCA 23`) keeps its party tokens for boosting.
/// Empty input falls through to [`QueryKind::Topic`].
pub fn classify_query(query: &str) -> QueryKind {
    if let Some(captures) = party_pattern().captures(query) {
        return QueryKind::PartyCase {
            first: captures[1].to_string(),
            second: captures[2].to_string(),
        };
    }
    if matter_pattern().is_match(query) {
        return QueryKind::Matter;
    }
    if let Some(cited) = citation::extract_neutral_citation(query) {
        return QueryKind::Citation(cited);
    }
    if query.contains('"') {
        return QueryKind::QuotedPhrase;
    }
    QueryKind::Topic
}

/// Resolves the effective sort mode for a search.
///
/// An explicit caller preference always wins. Under [`SortBy::Auto`],
/// case-law searches for a named authority sort by relevance and
/// everything else by date. Legislation never takes the named-authority
/// path — statute titles do not follow case-naming conventions, so a
/// party-shaped match there is noise.
pub fn select_sort_mode(kind: &QueryKind, options: &SearchOptions) -> SortMode {
    match options.sort_by {
        SortBy::Relevance => SortMode::Relevance,
        SortBy::Date => SortMode::Date,
        SortBy::Auto => {
            if options.doc_type == DocumentType::Case && kind.is_named_authority() {
                SortMode::Relevance
            } else {
                SortMode::Date
            }
        }
    }
}
