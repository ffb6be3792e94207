//! Pattern matching of a single (already-split) command part against the
//! check catalog.

use crate::catalog::{Catalog, Check};

/// One rule firing against one command part. Carries the part text so later
/// pipeline stages (predicate evaluation) can re-derive regex captures
/// without re-splitting the original command.
#[derive(Debug, Clone)]
pub struct MatchHit<'c> {
    pub check: &'c Check,
    pub part: String,
}

/// Evaluates every check in `catalog` against `part`, returning every check
/// whose pattern matched. Order follows the catalog's stable iteration order;
/// a rule contributes at most one entry even if its pattern could match more
/// than once within `part`.
#[must_use]
pub fn match_one<'c>(part: &str, catalog: &'c Catalog) -> Vec<MatchHit<'c>> {
    catalog
        .all()
        .iter()
        .filter(|check| check.is_match(part))
        .map(|check| MatchHit { check, part: part.to_string() })
        .collect()
}
