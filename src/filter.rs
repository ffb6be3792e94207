//! Filter Pipeline (C4): severity allow-list, runtime predicates, and
//! deny-list marking, applied to a raw match set in that order.

use crate::catalog::{Check, Predicate};
use crate::matcher::MatchHit;
use crate::options::ValidationOptions;
use crate::resolver::PathResolver;

/// Result of filtering: the surviving checks, plus whether any survivor is
/// on the caller's deny-list.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome<'c> {
    pub kept: Vec<&'c Check>,
    pub should_deny: bool,
}

/// Applies severity filtering, predicate evaluation, and deny-list marking,
/// in that order.
///
/// Predicates run against `resolver`; a predicate that fails to resolve (no
/// such capture, or the resolver reports the path absent) drops the match
/// rather than erroring, per the fail-open-on-predicate policy.
#[must_use]
pub fn filter<'c>(
    matches: Vec<MatchHit<'c>>,
    options: &ValidationOptions,
    resolver: &dyn PathResolver,
) -> FilterOutcome<'c> {
    let by_severity: Vec<MatchHit<'c>> = if options.allowed_severities.is_empty() {
        matches
    } else {
        matches
            .into_iter()
            .filter(|hit| options.allowed_severities.contains(&hit.check.severity))
            .collect()
    };

    let kept: Vec<&Check> = by_severity
        .into_iter()
        .filter(|hit| evaluate_predicates(hit.check, &hit.part, resolver))
        .map(|hit| hit.check)
        .collect();

    let should_deny = kept.iter().any(|c| options.deny_pattern_ids.contains(c.id));

    FilterOutcome { kept, should_deny }
}

/// Evaluates a single check's predicates against the command text it matched.
#[must_use]
pub fn evaluate_predicates(check: &Check, command: &str, resolver: &dyn PathResolver) -> bool {
    check.predicates.iter().all(|predicate| match predicate {
        Predicate::PathExists { capture } => {
            let Some(captures) = check.captures(command) else {
                return false;
            };
            let Some(m) = captures.name(capture) else {
                return false;
            };
            resolver.exists(m.as_str())
        }
    })
}
