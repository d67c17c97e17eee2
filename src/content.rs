//! Document text extraction — fetches a case or legislation page and
//! returns readable text.
//!
//! Institute document pages range from modern layouts (judgment wrapped
//! in `<article class="the-document">`) to plain 1990s HTML with
//! everything in `<body>`. Extraction strips non-content elements,
//! walks a selector priority list, and normalizes whitespace. HTML
//! only; PDF-only documents are out of scope.

use scraper::{Html, Selector};
use url::Url;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::types::DocumentContent;

/// Ceiling on extracted text length. Long judgments are truncated with
/// a visible marker rather than returned whole.
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Fetch a document URL and extract its readable text.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] for an unusable URL,
/// [`SearchError::Http`] if the request fails or returns an error
/// status, and [`SearchError::Parse`] if the page has no extractable
/// content.
pub async fn fetch_document(url: &str, config: &SearchConfig) -> Result<DocumentContent> {
    let parsed = Url::parse(url)
        .map_err(|e| SearchError::Parse(format!("invalid document URL: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SearchError::Parse(format!(
            "document URL must be http or https, got {}",
            parsed.scheme()
        )));
    }

    tracing::trace!(url, "fetching document");
    let client = http::build_client(config)?;
    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("document request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("document fetch returned error status: {e}")))?;
    let html = response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("failed to read document body: {e}")))?;

    extract_content(&html, url)
}

/// Extract readable text from raw document HTML.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if no extractable content is found.
pub fn extract_content(html: &str, url: &str) -> Result<DocumentContent> {
    extract_content_with_limit(html, url, DEFAULT_MAX_CHARS)
}

/// Extract readable text with a custom character ceiling.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if no extractable content is found.
pub fn extract_content_with_limit(
    html: &str,
    url: &str,
    max_chars: usize,
) -> Result<DocumentContent> {
    let cleaned = strip_boilerplate_tags(html);
    let document = Html::parse_document(&cleaned);

    let title = extract_title(&document);
    let raw_text = extract_main_text(&document);

    let text = normalize_whitespace(&raw_text);
    if text.is_empty() {
        return Err(SearchError::Parse("no extractable content found".into()));
    }

    let text = truncate_to_limit(&text, max_chars);
    let word_count = text.split_whitespace().count();

    Ok(DocumentContent {
        url: url.to_owned(),
        title,
        text,
        word_count,
    })
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Walk content-specific selectors in priority order, falling back to
/// `<body>`. `article.the-document` is the judgment wrapper on current
/// AustLII page layouts.
fn extract_main_text(document: &Html) -> String {
    let content_selectors = ["article.the-document", "article", "main", "body"];

    for selector_str in &content_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text: String = element.text().collect::<Vec<_>>().join(" ");
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return trimmed.to_owned();
            }
        }
    }

    String::new()
}

/// Remove boilerplate elements and their content before parsing. The
/// DOM text walk would otherwise surface script bodies and navigation
/// chrome as document text.
fn strip_boilerplate_tags(html: &str) -> String {
    let tags = [
        "script", "style", "nav", "footer", "header", "aside", "noscript", "svg", "iframe",
    ];

    let mut result = html.to_owned();
    for tag in &tags {
        result = strip_tag(&result, tag);
    }
    result
}

/// Remove every instance of one tag, case-insensitively, including its
/// content. Unclosed tags lose only the opening tag itself.
fn strip_tag(html: &str, tag: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with the original.
    let lower = html.to_ascii_lowercase();
    let open_tag = format!("<{tag}");
    let close_tag = format!("</{tag}>");

    let mut result = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(offset) = lower[pos..].find(&open_tag) {
        let start = pos + offset;
        let after_open = start + open_tag.len();

        // `<nav` must not swallow `<navigate ...>`.
        if lower
            .as_bytes()
            .get(after_open)
            .is_some_and(|&byte| !is_tag_name_end(byte))
        {
            result.push_str(&html[pos..after_open]);
            pos = after_open;
            continue;
        }

        result.push_str(&html[pos..start]);
        pos = match lower[start..].find(&close_tag) {
            Some(close) => start + close + close_tag.len(),
            None => match lower[start..].find('>') {
                Some(end) => start + end + 1,
                None => html.len(),
            },
        };
    }
    result.push_str(&html[pos..]);
    result
}

fn is_tag_name_end(byte: u8) -> bool {
    matches!(byte, b' ' | b'>' | b'/' | b'\n' | b'\r' | b'\t')
}

/// Collapse runs of spaces to one and runs of blank lines to one blank
/// line, trimming each line.
fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;
    let mut newline_count: u32 = 0;

    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            newline_count += 1;
            prev_was_space = false;
            if newline_count <= 2 {
                result.push('\n');
            }
        } else if ch.is_whitespace() {
            newline_count = 0;
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            newline_count = 0;
            prev_was_space = false;
            result.push(ch);
        }
    }

    result
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

/// Truncate to `max_chars`, backing up to a char boundary, and append a
/// truncation marker.
fn truncate_to_limit(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        return text.to_owned();
    }

    let mut end = max_chars;
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }

    let mut truncated = text[..end].to_owned();
    truncated.push_str("\n\n[Document truncated]");
    truncated
}
