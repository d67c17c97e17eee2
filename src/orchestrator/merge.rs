//! Cross-source reconciliation by neutral citation.
//!
//! AustLII mirrors many NZ decisions and NZLII holds the authoritative
//! copies, so the same case routinely appears in both providers'
//! output. The neutral citation is the stable cross-provider key: two
//! records citing `[2015] NZSC 100` are the same decision regardless of
//! host. Reconciliation walks the combined list once, keeping an arena
//! of output entries and a citation → arena-index map, so a
//! preferred-provider duplicate replaces its counterpart in place
//! without disturbing first-seen order.

use std::collections::HashMap;

use crate::types::{Provider, SearchResult};

/// Deduplicate `results` on neutral citation.
///
/// Records without a neutral citation are never considered duplicates
/// and always survive. For records sharing a citation, the first seen
/// claims the position; a later record from `preferred` replaces a
/// non-preferred holder in place, otherwise the first seen wins.
pub fn deduplicate_results(results: Vec<SearchResult>, preferred: Provider) -> Vec<SearchResult> {
    let mut arena: Vec<SearchResult> = Vec::with_capacity(results.len());
    let mut index_by_citation: HashMap<String, usize> = HashMap::new();

    for result in results {
        let Some(key) = result.neutral_citation.clone() else {
            arena.push(result);
            continue;
        };
        match index_by_citation.get(&key) {
            None => {
                index_by_citation.insert(key, arena.len());
                arena.push(result);
            }
            Some(&held) => {
                if result.source == preferred && arena[held].source != preferred {
                    arena[held] = result;
                }
            }
        }
    }

    arena
}

/// Merge a base result list with an enrichment list, preferring
/// `preferred` on citation collisions.
///
/// Equivalent to concatenating `enriched` ahead of `base` and
/// deduplicating: enriched entries lead the output, and a base entry
/// sharing a citation with an enriched one is absorbed into it.
pub fn merge_results(
    base: Vec<SearchResult>,
    enriched: Vec<SearchResult>,
    preferred: Provider,
) -> Vec<SearchResult> {
    let mut combined = enriched;
    combined.extend(base);
    deduplicate_results(combined, preferred)
}
