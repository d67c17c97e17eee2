//! Integration tests for the search pipeline.
//!
//! These tests exercise the classify → boost → merge → truncate
//! pipeline using synthetic results (no network calls). Live institute
//! tests are marked `#[ignore]` for manual/periodic validation.

use lii_search::orchestrator::boost::boost_by_relevance;
use lii_search::orchestrator::merge::{deduplicate_results, merge_results};
use lii_search::orchestrator::normalize::normalize_record;
use lii_search::provider::RawRecord;
use lii_search::query::{classify_query, select_sort_mode};
use lii_search::types::{DocumentType, Provider, SearchOptions, SearchResult, SortMode};
use lii_search::{SearchConfig, SortBy};

fn make_result(title: &str, citation: Option<&str>, source: Provider) -> SearchResult {
    let url = match source {
        Provider::Austlii => "https://www.austlii.edu.au/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html",
        Provider::Nzlii => "https://www.nzlii.org/nz/cases/NZSC/2015/100.html",
    };
    SearchResult {
        title: title.to_string(),
        neutral_citation: citation.map(Into::into),
        reported_citation: None,
        url: url.to_string(),
        source,
        summary: None,
        jurisdiction: None,
        year: None,
        doc_type: DocumentType::Case,
    }
}

/// Simulate the orchestrator pipeline without network calls: the
/// primary list stands in for normalized institute results and the
/// resolved list for cross-border enrichment.
fn run_pipeline(
    primary: Vec<SearchResult>,
    resolved: Vec<SearchResult>,
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let kind = classify_query(query);
    let sort = select_sort_mode(&kind, options);

    let boosted = if sort == SortMode::Relevance && kind.is_named_authority() {
        boost_by_relevance(primary, query, &kind)
    } else {
        primary
    };

    let mut merged = merge_results(boosted, resolved, Provider::Nzlii);
    merged.truncate(options.limit);
    merged
}

// ── Relevance boosting ─────────────────────────────────────────────────

#[test]
fn named_case_query_puts_the_case_first() {
    let results = vec![
        make_result("Other Case v Someone [2025] HCA 1", Some("[2025] HCA 1"), Provider::Austlii),
        make_result(
            "Donoghue v Stevenson [1932] UKHL 100",
            Some("[1932] UKHL 100"),
            Provider::Austlii,
        ),
        make_result("Another Case [2024] FCA 99", Some("[2024] FCA 99"), Provider::Austlii),
    ];

    let out = run_pipeline(results, vec![], "Donoghue v Stevenson", &SearchOptions::default());

    assert_eq!(out.len(), 3);
    assert!(out[0].title.starts_with("Donoghue v Stevenson"));
}

#[test]
fn boost_on_empty_list_returns_empty() {
    let kind = classify_query("Donoghue v Stevenson");
    let out = boost_by_relevance(vec![], "Donoghue v Stevenson", &kind);
    assert!(out.is_empty());
}

#[test]
fn boost_preserves_list_length() {
    let results: Vec<SearchResult> = (0..8)
        .map(|i| make_result(&format!("Case number {i}"), None, Provider::Austlii))
        .collect();
    let kind = classify_query("Smith v Jones");
    let out = boost_by_relevance(results, "Smith v Jones", &kind);
    assert_eq!(out.len(), 8);
}

#[test]
fn topic_query_leaves_order_untouched() {
    let results = vec![
        make_result("Recent negligence appeal", None, Provider::Austlii),
        make_result("Older duty of care decision", None, Provider::Austlii),
    ];

    let out = run_pipeline(
        results.clone(),
        vec![],
        "negligence duty of care",
        &SearchOptions::default(),
    );

    assert_eq!(out, results);
}

// ── Deduplication and merging ──────────────────────────────────────────

#[test]
fn citation_collision_keeps_preferred_provider() {
    let results = vec![
        make_result("Lee v Lee (AustLII mirror)", Some("[2023] HCA 1"), Provider::Austlii),
        make_result("Lee v Lee", Some("[2023] HCA 1"), Provider::Nzlii),
    ];

    let out = deduplicate_results(results, Provider::Nzlii);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].source, Provider::Nzlii);
    assert_eq!(out[0].title, "Lee v Lee");
}

#[test]
fn uncited_results_never_deduplicated() {
    let results = vec![
        make_result("Practice note", None, Provider::Austlii),
        make_result("Practice note", None, Provider::Austlii),
    ];

    let out = deduplicate_results(results, Provider::Nzlii);
    assert_eq!(out.len(), 2);
}

#[test]
fn same_source_duplicates_keep_first() {
    let results = vec![
        make_result("First listing", Some("[2023] HCA 1"), Provider::Austlii),
        make_result("Second listing", Some("[2023] HCA 1"), Provider::Austlii),
    ];

    let out = deduplicate_results(results, Provider::Nzlii);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "First listing");
}

#[test]
fn merge_equals_dedup_of_concatenation() {
    let list_a = vec![
        make_result("AU hit one", Some("[2015] NZSC 100"), Provider::Austlii),
        make_result("AU hit two", None, Provider::Austlii),
    ];
    let list_b = vec![make_result(
        "Authoritative copy",
        Some("[2015] NZSC 100"),
        Provider::Nzlii,
    )];

    let merged = merge_results(list_a.clone(), list_b.clone(), Provider::Nzlii);

    let mut concatenated = list_b;
    concatenated.extend(list_a);
    let deduped = deduplicate_results(concatenated, Provider::Nzlii);

    assert_eq!(merged, deduped);
}

#[test]
fn merge_with_empty_enrichment_is_plain_dedup() {
    let list_a = vec![
        make_result("One", Some("[2023] HCA 1"), Provider::Austlii),
        make_result("One again", Some("[2023] HCA 1"), Provider::Austlii),
        make_result("Two", None, Provider::Austlii),
    ];

    let merged = merge_results(list_a.clone(), vec![], Provider::Nzlii);
    assert_eq!(merged, deduplicate_results(list_a, Provider::Nzlii));
}

#[test]
fn dedup_is_idempotent() {
    let results = vec![
        make_result("One", Some("[2023] HCA 1"), Provider::Austlii),
        make_result("One mirror", Some("[2023] HCA 1"), Provider::Nzlii),
        make_result("Two", None, Provider::Austlii),
    ];

    let once = deduplicate_results(results, Provider::Nzlii);
    let twice = deduplicate_results(once.clone(), Provider::Nzlii);
    assert_eq!(once, twice);
}

#[test]
fn incomplete_enrichment_is_not_an_error() {
    // Three cross-border candidates were requested but only one came
    // back; the other two keep their mirrored entries.
    let primary = vec![
        make_result("NZ case one (mirror)", Some("[2015] NZSC 100"), Provider::Austlii),
        make_result("NZ case two (mirror)", Some("[2019] NZHC 5"), Provider::Austlii),
        make_result("AU case", Some("[1992] HCA 23"), Provider::Austlii),
    ];
    let resolved = vec![make_result(
        "NZ case one",
        Some("[2015] NZSC 100"),
        Provider::Nzlii,
    )];

    let out = merge_results(primary, resolved, Provider::Nzlii);

    assert_eq!(out.len(), 3);
    assert!(out.iter().any(|r| r.source == Provider::Nzlii));
    assert!(out
        .iter()
        .any(|r| r.neutral_citation.as_deref() == Some("[2019] NZHC 5")
            && r.source == Provider::Austlii));
}

// ── Normalization end-to-end ───────────────────────────────────────────

#[test]
fn mabo_record_normalizes_citations_year_and_jurisdiction() {
    let raw = RawRecord {
        title: "Mabo v Queensland (No 2) [1992] HCA 23".to_string(),
        href: "/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html".to_string(),
        summary: Some("Landmark native title decision, reported at (1992) 175 CLR 1.".to_string()),
    };

    let result = normalize_record(&raw, Provider::Austlii, &SearchOptions::default())
        .expect("record should normalize");

    assert_eq!(result.neutral_citation.as_deref(), Some("[1992] HCA 23"));
    assert_eq!(result.reported_citation.as_deref(), Some("(1992) 175 CLR 1"));
    assert_eq!(result.year.as_deref(), Some("1992"));
    assert_eq!(result.jurisdiction.as_deref(), Some("cth"));
    assert_eq!(
        result.url,
        "https://www.austlii.edu.au/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html"
    );
}

// ── Pipeline composition ───────────────────────────────────────────────

#[test]
fn enriched_named_case_leads_merged_output() {
    let primary = vec![
        make_result("Commentary citing Lange", Some("[2024] FCA 99"), Provider::Austlii),
        make_result(
            "Lange v Atkinson [1997] NZCA 206 (mirror)",
            Some("[1997] NZCA 206"),
            Provider::Austlii,
        ),
    ];
    let resolved = vec![make_result(
        "Lange v Atkinson [1997] NZCA 206",
        Some("[1997] NZCA 206"),
        Provider::Nzlii,
    )];

    let out = run_pipeline(primary, resolved, "Lange v Atkinson", &SearchOptions::default());

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].source, Provider::Nzlii);
    assert_eq!(out[0].neutral_citation.as_deref(), Some("[1997] NZCA 206"));
    let citations: Vec<_> = out.iter().filter_map(|r| r.neutral_citation.as_deref()).collect();
    assert_eq!(citations.len(), 2);
    assert_ne!(citations[0], citations[1]);
}

#[test]
fn limit_truncates_after_merging() {
    let primary: Vec<SearchResult> = (0..10)
        .map(|i| make_result(&format!("Case {i}"), None, Provider::Austlii))
        .collect();
    let options = SearchOptions {
        limit: 4,
        sort_by: SortBy::Date,
        ..Default::default()
    };

    let out = run_pipeline(primary, vec![], "negligence", &options);
    assert_eq!(out.len(), 4);
}

#[test]
fn empty_candidate_list_flows_through() {
    let out = run_pipeline(vec![], vec![], "Smith v Jones", &SearchOptions::default());
    assert!(out.is_empty());
}

// ── Live institute tests (require network) ─────────────────────────────
// Run with: cargo test --test search_pipeline live_ -- --ignored

#[tokio::test]
#[ignore]
async fn live_search_finds_mabo() {
    let options = SearchOptions::default();
    let config = SearchConfig::default();

    match lii_search::search("Mabo v Queensland", &options, &config).await {
        Ok(results) => {
            assert!(!results.is_empty(), "live search should return results");
            for r in &results {
                assert!(!r.title.is_empty(), "result title should not be empty");
                assert!(r.url.starts_with("http"), "result URL should be absolute");
            }
        }
        Err(e) => {
            // Network failures are acceptable in CI; just log.
            eprintln!("Live search failed (acceptable in CI): {e}");
        }
    }
}

#[tokio::test]
#[ignore]
async fn live_fetch_known_judgment() {
    let config = SearchConfig::default();
    let url = "https://www.austlii.edu.au/cgi-bin/viewdoc/au/cases/cth/HCA/1992/23.html";

    match lii_search::fetch_document(url, &config).await {
        Ok(page) => {
            assert!(page.word_count > 100, "judgment should have body text");
            assert!(
                page.title.contains("Mabo"),
                "expected Mabo in title, got {}",
                page.title
            );
        }
        Err(e) => {
            eprintln!("Live document fetch failed (acceptable in CI): {e}");
        }
    }
}
