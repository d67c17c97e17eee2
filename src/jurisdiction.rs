//! Jurisdiction codes, search masks, and court-code mapping.
//!
//! Australian documents live under `au/{cases|legis}/{code}` paths and
//! New Zealand documents under `nz/{cases|legis}` with no sub-jurisdiction.
//! Court codes embed the jurisdiction (`NSWSC` is a NSW court, `NZCA`
//! a NZ one), which lets a neutral citation be turned back into a
//! document path without another search.

use crate::types::DocumentType;

/// Australian jurisdiction codes as they appear in document paths.
pub const AU_JURISDICTIONS: &[&str] = &[
    "cth", "nsw", "vic", "qld", "sa", "wa", "tas", "nt", "act",
];

/// New Zealand's country code — its institute has no sub-jurisdictions.
pub const NZ: &str = "nz";

/// Federal courts whose codes carry no state prefix.
const FEDERAL_COURTS: &[&str] = &["HCA", "FCA", "FCAFC", "FamCA", "FCCA"];

/// Court-code prefixes mapped to jurisdiction codes. Longer prefixes
/// listed first; first match wins.
const COURT_PREFIXES: &[(&str, &str)] = &[
    ("NSW", "nsw"),
    ("ACT", "act"),
    ("TAS", "tas"),
    ("NZ", NZ),
    ("NT", "nt"),
    ("WA", "wa"),
    ("SA", "sa"),
    ("Q", "qld"),
    ("V", "vic"),
];

/// Returns `true` if `code` is a jurisdiction this crate can search.
pub fn is_known_code(code: &str) -> bool {
    code == NZ || AU_JURISDICTIONS.contains(&code)
}

/// Builds the path-prefix mask restricting a search to one jurisdiction's
/// documents of the given type, e.g. `au/cases/nsw` or `nz/legis`.
///
/// Returns `None` for unknown codes.
pub fn mask_path(code: &str, doc_type: DocumentType) -> Option<String> {
    let segment = doc_type.path_segment();
    if code == NZ {
        return Some(format!("nz/{segment}"));
    }
    AU_JURISDICTIONS
        .iter()
        .find(|known| **known == code)
        .map(|known| format!("au/{segment}/{known}"))
}

/// Maps a neutral-citation court code to its jurisdiction code, e.g.
/// `HCA` → `cth`, `NSWCA` → `nsw`, `NZHC` → `nz`.
///
/// Returns `None` for courts outside Australia and New Zealand.
pub fn jurisdiction_for_court(court: &str) -> Option<&'static str> {
    if FEDERAL_COURTS.contains(&court) {
        return Some("cth");
    }
    COURT_PREFIXES
        .iter()
        .find(|(prefix, _)| court.starts_with(prefix))
        .map(|(_, code)| *code)
}

/// Maps a court code to the country (`au` or `nz`) whose institute is
/// authoritative for it.
pub fn country_for_court(court: &str) -> Option<&'static str> {
    jurisdiction_for_court(court).map(|code| if code == NZ { "nz" } else { "au" })
}

/// Extracts the jurisdiction code from a document path.
///
/// Looks for an `au/{cases|legis}/{code}` run or an `nz` country
/// segment. NZ paths never carry a sub-jurisdiction, so the code for
/// any NZ document is just `nz`.
pub fn jurisdiction_for_path(path: &str) -> Option<&'static str> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "nz" => return Some(NZ),
            "au" => {
                let kind = *segments.get(i + 1)?;
                let code = *segments.get(i + 2)?;
                if kind != "cases" && kind != "legis" {
                    return None;
                }
                return AU_JURISDICTIONS.iter().find(|known| **known == code).copied();
            }
            _ => {}
        }
    }
    None
}
