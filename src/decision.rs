//! Decision Function (C5): turns a filtered match set into the tri-state
//! verdict the approval pipeline acts on.

use crate::catalog::{Check, MatchRecord, Severity};
use crate::filter::FilterOutcome;

/// Outcome of `validate()`: the surviving matches plus the tri-state
/// verdict. `should_deny` implies `should_challenge`; a bare deny without a
/// matching rule is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationResult {
    pub matches: Vec<MatchRecord>,
    pub should_challenge: bool,
    pub should_deny: bool,
}

/// Builds the verdict from a filter outcome.
#[must_use]
pub fn decide(outcome: &FilterOutcome<'_>) -> ValidationResult {
    let should_challenge = !outcome.kept.is_empty();
    let should_deny = should_challenge && outcome.should_deny;

    ValidationResult {
        matches: outcome.kept.iter().map(|c| MatchRecord::from(*c)).collect(),
        should_challenge,
        should_deny,
    }
}

/// Highest severity among `checks`, defaulting to `Medium` when empty, per
/// the rule used for challenge-page UI and CLI summaries.
#[must_use]
pub fn highest_severity(checks: &[&Check]) -> Severity {
    Severity::highest(&checks.iter().map(|c| c.severity).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::filter::filter;
    use crate::matcher::match_one;
    use crate::options::ValidationOptions;
    use crate::resolver::RealFs;

    #[test]
    fn no_matches_means_no_challenge_and_no_deny() {
        let outcome = FilterOutcome::default();
        let result = decide(&outcome);
        assert!(!result.should_challenge);
        assert!(!result.should_deny);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn matches_without_deny_list_challenge_but_do_not_deny() {
        let cat = catalog::load();
        let hits = match_one("rm -rf /", cat);
        let outcome = filter(hits, &ValidationOptions::new(), &RealFs);
        let result = decide(&outcome);
        assert!(result.should_challenge);
        assert!(!result.should_deny);
    }

    #[test]
    fn deny_list_hit_implies_challenge_too() {
        let cat = catalog::load();
        let hits = match_one("git push --force", cat);
        let options = ValidationOptions::new().with_deny_pattern_ids(["git:force_push".to_string()]);
        let outcome = filter(hits, &options, &RealFs);
        let result = decide(&outcome);
        assert!(result.should_deny);
        assert!(result.should_challenge);
    }

    #[test]
    fn highest_severity_of_empty_is_medium() {
        assert_eq!(highest_severity(&[]), Severity::Medium);
    }

    #[test]
    fn highest_severity_picks_the_max() {
        let cat = catalog::load();
        let low = cat.get("git:branch_delete_protected").or_else(|| cat.all().first());
        let critical = cat.get("fs:recursively_delete_root_or_home").expect("known rule");
        let checks: Vec<&Check> = vec![low.unwrap(), critical];
        assert_eq!(highest_severity(&checks), Severity::Critical);
    }
}
