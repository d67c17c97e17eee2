//! Raw-record normalization: one scraped hit in, one clean result out.
//!
//! Results pages hand back anchor text and hrefs decorated with search
//! echo parameters, mixed in with links to journal commentary and
//! citator pages. Normalization resolves each href to an absolute
//! document URL, strips the decoration, drops non-primary material,
//! and derives citations, jurisdiction, and year from the title.

use url::Url;

use crate::citation;
use crate::jurisdiction;
use crate::provider::RawRecord;
use crate::types::{DocumentType, Provider, SearchOptions, SearchResult};

/// Search echo parameters the SINO engine appends to hit links. These
/// only re-trigger term highlighting when followed and never change
/// which document is served.
const DECORATION_PARAMS: &[&str] = &[
    "query",
    "stem",
    "synonyms",
    "nocontext",
    "context",
    "mask_path",
    "mask_world",
];

/// Normalize one raw hit into a [`SearchResult`].
///
/// Returns `None` when the record should be dropped: blank title,
/// unresolvable href, a secondary-source path (journals, LawCite), or a
/// path inconsistent with the requested document type. Drops are
/// ordinary scraping noise, not errors.
pub fn normalize_record(
    raw: &RawRecord,
    provider: Provider,
    options: &SearchOptions,
) -> Option<SearchResult> {
    let title = raw.title.trim();
    if title.is_empty() {
        tracing::trace!("dropping record with blank title");
        return None;
    }

    let url = canonicalize_url(&raw.href, provider)?;
    let path = url.path().to_string();

    if is_secondary_source(&path) {
        tracing::trace!(path, "dropping secondary-source record");
        return None;
    }
    if !matches_doc_type(&path, options.doc_type) {
        tracing::trace!(path, "dropping record inconsistent with requested type");
        return None;
    }

    let parsed_citation = citation::parse_neutral_citation(title);
    let (neutral_citation, year) = match &parsed_citation {
        Some(c) => (Some(c.to_string()), Some(c.year.clone())),
        None => (None, None),
    };

    let summary = raw
        .summary
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let reported_citation = citation::extract_reported_citation(title)
        .or_else(|| summary.as_deref().and_then(citation::extract_reported_citation));

    Some(SearchResult {
        title: title.to_string(),
        neutral_citation,
        reported_citation,
        url: url.to_string(),
        source: provider,
        summary,
        jurisdiction: jurisdiction::jurisdiction_for_path(&path).map(str::to_string),
        year,
        doc_type: options.doc_type,
    })
}

/// Resolve an href to an absolute URL on the provider's host and strip
/// search decoration and the fragment. Parameters outside the
/// decoration list are kept in their original order — they can be part
/// of the document address.
///
/// Returns `None` for blank, bare-relative, or unparseable hrefs.
fn canonicalize_url(href: &str, provider: Provider) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let absolute = if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if let Some(rest) = href.strip_prefix("//") {
        format!("https://{rest}")
    } else if href.starts_with('/') {
        format!("{}{href}", provider.base_url())
    } else {
        tracing::trace!(href, "dropping bare-relative href");
        return None;
    };

    let Ok(mut parsed) = Url::parse(&absolute) else {
        tracing::trace!(href, "dropping unparseable href");
        return None;
    };

    parsed.set_fragment(None);

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| {
            let k = key.to_lowercase();
            !DECORATION_PARAMS.contains(&k.as_str())
        })
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        let qs: String = kept
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        parsed.set_query(Some(&qs));
    }

    Some(parsed)
}

/// Journal articles and LawCite citator entries are secondary material;
/// a case or legislation search should only surface primary documents.
fn is_secondary_source(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.contains("/journals/") || lower.contains("lawcite")
}

/// A case search must only yield `/cases/` paths and a legislation
/// search only `/legis/` paths.
fn matches_doc_type(path: &str, doc_type: DocumentType) -> bool {
    path.contains(&format!("/{}/", doc_type.path_segment()))
}
