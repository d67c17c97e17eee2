//! Relevance boosting for named-authority queries.
//!
//! When a query names a specific authority (party names, a matter, a
//! citation, a quoted phrase), the provider's own ordering is often
//! beaten by a simple title match: the user wants *that* case, not the
//! most recent mention of it. Scoring compares normalized title text
//! against the normalized query:
//!
//! - +10 per query content word (length > 2) found in the title
//! - +50 if the whole query is a substring of the title
//! - +30 if the title starts with the query's first three words and
//!   that prefix is longer than 5 characters
//! - +100 if both party tokens appear in the title, +20 if exactly one
//!   does (party-vs-party queries only)
//!
//! The sort is stable and descending, so ties keep the provider's
//! relative order, and the list length never changes.

use crate::query::QueryKind;
use crate::types::SearchResult;

/// Reorder `results` by descending boost score for the given query.
///
/// Applied by the orchestrator only when the sort mode is relevance and
/// the query names an authority. Reorders only — never filters.
pub fn boost_by_relevance(
    results: Vec<SearchResult>,
    query: &str,
    kind: &QueryKind,
) -> Vec<SearchResult> {
    let mut scored: Vec<(i64, SearchResult)> = results
        .into_iter()
        .map(|result| (relevance_score(&result, query, kind), result))
        .collect();
    scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
    scored.into_iter().map(|(_, result)| result).collect()
}

/// Calculate the boost score for one result against a query.
pub fn relevance_score(result: &SearchResult, query: &str, kind: &QueryKind) -> i64 {
    let title = normalize_text(&result.title);
    let query = normalize_text(query);
    if query.is_empty() {
        return 0;
    }

    let mut score = 0;

    for word in query.split_whitespace().filter(|w| w.len() > 2) {
        if title.contains(word) {
            score += 10;
        }
    }

    if title.contains(query.as_str()) {
        score += 50;
    }

    let prefix = query
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");
    if prefix.len() > 5 && title.starts_with(&prefix) {
        score += 30;
    }

    if let QueryKind::PartyCase { first, second } = kind {
        let first_hit = title.contains(&normalize_text(first));
        let second_hit = title.contains(&normalize_text(second));
        score += match (first_hit, second_hit) {
            (true, true) => 100,
            (true, false) | (false, true) => 20,
            (false, false) => 0,
        };
    }

    score
}

/// Lowercase, replace punctuation with spaces, collapse whitespace.
/// Titles and queries are compared only in this form so `Mabo v.
/// Queensland` and `mabo v queensland` agree.
fn normalize_text(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            replaced.extend(ch.to_lowercase());
        } else {
            replaced.push(' ');
        }
    }
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
