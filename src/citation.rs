//! Citation extraction for Australasian legal references.
//!
//! Two citation families matter here. Neutral citations identify a
//! decision by court and sequence number (`[1992] HCA 23`) and map
//! directly onto institute document paths. Reported citations identify
//! the same decision in a printed report series (`(1992) 175 CLR 1`,
//! `[2024] 1 NZLR 456`) and cannot be resolved to a path without a
//! search. Extraction is lexical: scanning is left to right and the
//! first match wins, so a title carrying both families yields one of
//! each.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static REPORTED_PATTERN: OnceLock<Regex> = OnceLock::new();
static NEUTRAL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Reported form: bracketed year, volume number, reporter code, page.
/// The volume digit is what separates `[2024] 1 NZLR 456` from a
/// neutral citation.
fn reported_pattern() -> &'static Regex {
    REPORTED_PATTERN.get_or_init(|| {
        Regex::new(r"(?:\(\d{4}\)|\[\d{4}\])\s+\d+\s+[A-Z]{2,6}\s+\d+")
            .expect("reported citation pattern is valid")
    })
}

/// Neutral form: square-bracketed year, court code of one or two
/// capitalised tokens, sequence number. Court codes start uppercase but
/// may continue mixed-case (`NZEnvC`, `FamCA`).
fn neutral_pattern() -> &'static Regex {
    NEUTRAL_PATTERN.get_or_init(|| {
        Regex::new(r"\[(\d{4})\]\s+([A-Z][A-Za-z]{1,9}(?:\s+[A-Z][A-Za-z]{0,9})?)\s+(\d+)")
            .expect("neutral citation pattern is valid")
    })
}

/// A parsed neutral citation, the key that both deduplication and
/// cross-border resolution work from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeutralCitation {
    /// Decision year, four digits.
    pub year: String,
    /// Court code, e.g. `HCA` or `NZSC`.
    pub court: String,
    /// Sequence number within the court's year.
    pub number: String,
}

impl fmt::Display for NeutralCitation {
    /// Canonical single-space form, `[YYYY] COURT NUM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.year, self.court, self.number)
    }
}

/// Returns the first reported citation in `text`, verbatim as matched.
pub fn extract_reported_citation(text: &str) -> Option<String> {
    reported_pattern()
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Returns the first neutral citation in `text`, verbatim as matched.
pub fn extract_neutral_citation(text: &str) -> Option<String> {
    neutral_pattern().find(text).map(|m| m.as_str().to_string())
}

/// Parses the first neutral citation in `text` into its components.
/// Court codes of two tokens are collapsed to single spaces so the
/// canonical rendering is stable regardless of source whitespace.
pub fn parse_neutral_citation(text: &str) -> Option<NeutralCitation> {
    let captures = neutral_pattern().captures(text)?;
    let court = captures[2].split_whitespace().collect::<Vec<_>>().join(" ");
    Some(NeutralCitation {
        year: captures[1].to_string(),
        court,
        number: captures[3].to_string(),
    })
}
