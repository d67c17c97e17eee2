//! Core search orchestrator: classify, search, boost, resolve, merge.
//!
//! One search call runs the whole pipeline: the query is classified
//! once, the primary institute is searched, named-authority results are
//! relevance-boosted, cross-border citations are resolved against the
//! other institute with bounded concurrency, and the lists are merged
//! on neutral citation with the authoritative copies preferred.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};

use crate::citation::{self, NeutralCitation};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::jurisdiction;
use crate::provider::LiiProvider;
use crate::providers::{AustliiProvider, NzliiProvider};
use crate::query::{classify_query, select_sort_mode};
use crate::types::{DocumentType, Provider, SearchOptions, SearchResult, SortMode};

use super::boost::boost_by_relevance;
use super::merge::merge_results;

/// How many citation resolutions may be in flight at once. The
/// institutes are non-commercial sites; five keeps the burst polite.
const RESOLVE_CONCURRENCY: usize = 5;

/// Orchestrate a search against the primary institute with cross-border
/// enrichment.
///
/// # Pipeline
///
/// 1. Classify the query once; derive the effective sort mode
/// 2. Search the primary provider (NZLII for `nz` searches, AustLII
///    otherwise), forwarding the sort mode as the results ordering
/// 3. Boost by relevance when the mode is relevance and the query names
///    an authority
/// 4. Resolve citations belonging to the other country against the
///    secondary provider, at most [`RESOLVE_CONCURRENCY`] at a time;
///    failures are logged and dropped, never fatal
/// 5. Merge on neutral citation, preferring the secondary's
///    authoritative copies over mirrored ones
/// 6. Truncate to `options.limit`
///
/// # Errors
///
/// Returns an error only when the primary search itself fails; the
/// resolution pass degrades to fewer enriched results.
pub async fn orchestrate_search(
    query: &str,
    options: &SearchOptions,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    // 1. Classify once; the kind drives sort selection and boosting.
    let kind = classify_query(query);
    let sort = select_sort_mode(&kind, options);
    tracing::debug!(
        ?sort,
        named_authority = kind.is_named_authority(),
        "query classified"
    );

    // 2. Primary search.
    let primary = primary_provider(options);
    let mut results = search_provider(primary, query, options, sort, config).await?;
    tracing::debug!(provider = %primary, count = results.len(), "primary search complete");

    // 3. Relevance boost for named authorities.
    if sort == SortMode::Relevance && kind.is_named_authority() {
        results = boost_by_relevance(results, query, &kind);
    }

    // 4. Cross-border resolution.
    let secondary = primary.other();
    let resolved = if config.resolve_secondary {
        resolve_cross_border(&results, secondary, config).await
    } else {
        Vec::new()
    };

    // 5. Merge, preferring the authoritative resolved copies.
    let mut merged = merge_results(results, resolved, secondary);

    // 6. Truncate to the requested limit.
    merged.truncate(options.limit);
    Ok(merged)
}

/// NZ-restricted searches go straight to NZLII; everything else starts
/// at AustLII.
fn primary_provider(options: &SearchOptions) -> Provider {
    match options.jurisdiction.as_deref() {
        Some(code) if code == jurisdiction::NZ => Provider::Nzlii,
        _ => Provider::Austlii,
    }
}

/// Query one institute, dispatching to the concrete implementation.
async fn search_provider(
    provider: Provider,
    query: &str,
    options: &SearchOptions,
    sort: SortMode,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    match provider {
        Provider::Austlii => {
            AustliiProvider::from_config(config)
                .search(query, options, sort, config)
                .await
        }
        Provider::Nzlii => {
            NzliiProvider::from_config(config)
                .search(query, options, sort, config)
                .await
        }
    }
}

/// Resolve one citation on one institute.
async fn resolve_on(
    provider: Provider,
    citation: &NeutralCitation,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    match provider {
        Provider::Austlii => {
            AustliiProvider::from_config(config)
                .resolve_citation(citation, config)
                .await
        }
        Provider::Nzlii => {
            NzliiProvider::from_config(config)
                .resolve_citation(citation, config)
                .await
        }
    }
}

/// Pick the citations worth resolving against the secondary institute:
/// case-law results whose court belongs to the secondary's country,
/// each citation once.
fn resolution_targets(results: &[SearchResult], secondary: Provider) -> Vec<NeutralCitation> {
    let mut seen = HashSet::new();
    results
        .iter()
        .filter(|r| r.doc_type == DocumentType::Case)
        .filter_map(|r| r.neutral_citation.as_deref())
        .filter_map(citation::parse_neutral_citation)
        .filter(|c| jurisdiction::country_for_court(&c.court) == Some(secondary.country()))
        .filter(|c| seen.insert(c.to_string()))
        .collect()
}

/// Fetch authoritative copies for cross-border citations. Each failure
/// is an omission, not an error — a missing document or a slow mirror
/// must never sink the primary results.
async fn resolve_cross_border(
    results: &[SearchResult],
    secondary: Provider,
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let targets = resolution_targets(results, secondary);
    if targets.is_empty() {
        return Vec::new();
    }
    tracing::debug!(count = targets.len(), provider = %secondary, "resolving cross-border citations");

    http::polite_delay(config).await;

    let outcomes = stream::iter(targets)
        .map(|citation| async move {
            let outcome = resolve_on(secondary, &citation, config).await;
            (citation, outcome)
        })
        .buffered(RESOLVE_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

    let mut resolved = Vec::new();
    for (citation, outcome) in outcomes {
        match outcome {
            Ok(result) => resolved.push(result),
            Err(err) => {
                tracing::warn!(%citation, error = %err, "cross-border resolution failed");
            }
        }
    }
    resolved
}
