//! Shared parsing for the SINO search software that powers both
//! institutes.
//!
//! AustLII and NZLII run the same search engine, so their results pages
//! share one shape: an ordered list of hits, each an anchor followed by
//! a small database/date line. Parsing is shared here; the providers
//! differ only in hosts, masks, and document path layout.

use scraper::{Html, Selector};

use crate::error::SearchError;
use crate::jurisdiction;
use crate::provider::RawRecord;
use crate::types::{Provider, SearchOptions};

/// Parse a SINO results page into raw records.
///
/// Hits live in `ol.results > li`; the first anchor carries title and
/// href, and an optional `<small>` block carries the database line.
/// Entries missing an anchor or title are skipped.
pub(crate) fn parse_results_page(html: &str) -> Result<Vec<RawRecord>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse("ol.results > li")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse("a")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let summary_sel = Selector::parse("small")
        .map_err(|e| SearchError::Parse(format!("invalid summary selector: {e:?}")))?;

    let mut records = Vec::new();

    for element in document.select(&result_sel) {
        let title_el = match element.select(&title_sel).next() {
            Some(el) => el,
            None => continue,
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let href = match title_el.value().attr("href") {
            Some(h) => h.to_string(),
            None => continue,
        };

        let summary = element
            .select(&summary_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());

        records.push(RawRecord {
            title,
            href,
            summary,
        });
    }

    tracing::debug!(count = records.len(), "results page parsed");
    Ok(records)
}

/// Extract the `<title>` text of a document page.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] when the page has no usable title —
/// the document viewer always titles real documents, so a blank title
/// means we were served an error page.
pub(crate) fn extract_page_title(html: &str) -> Result<String, SearchError> {
    let document = Html::parse_document(html);
    let title_sel = Selector::parse("title")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;

    document
        .select(&title_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SearchError::Parse("document page has no title".into()))
}

/// Build the `mask_path` restricting a search to the right slice of the
/// provider's collection. An explicit jurisdiction wins; otherwise the
/// mask covers the provider's whole country for the requested type.
pub(crate) fn search_mask(provider: Provider, options: &SearchOptions) -> String {
    options
        .jurisdiction
        .as_deref()
        .and_then(|code| jurisdiction::mask_path(code, options.doc_type))
        .unwrap_or_else(|| {
            format!("{}/{}", provider.country(), options.doc_type.path_segment())
        })
}
