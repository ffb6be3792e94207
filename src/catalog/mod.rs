//! Check Catalog (C1): the embedded, immutable set of pattern rules.
//!
//! ```text
//!   catalog::load() ──> Catalog { checks: Vec<Check> }
//!                          │
//!                          ├─ all() / groups() / by_group()
//!                          │
//!                  (read-only for the life of the process)
//! ```
//!
//! Rules are compiled once, at first access, from the domain modules under
//! [`rules`]. There is no reload path: a catalog is effectively static.

pub mod rules;

use fancy_regex::Regex;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Ordered severity: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

impl Severity {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Highest severity in a non-empty slice; `Medium` if empty.
    #[must_use]
    pub fn highest(severities: &[Self]) -> Self {
        severities.iter().copied().max().unwrap_or_default()
    }
}

/// Suggested challenge kind for a check, overridable by caller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeHint {
    Confirm,
    Math,
    Word,
    Block,
}

/// A runtime condition evaluated only after a regex match.
///
/// Currently the only supported predicate: a named capture group of the
/// match must resolve to a path that exists on disk. If the capture is
/// absent, or the predicate's resolver says the path doesn't exist, the
/// match is dropped (fail-open on the rule, per spec ref. "Design Notes").
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    PathExists { capture: &'static str },
}

/// An immutable pattern rule.
pub struct Check {
    /// Stable id of the form `group:name`, unique within the catalog.
    pub id: &'static str,
    pub group: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub challenge_hint: Option<ChallengeHint>,
    pub predicates: &'static [Predicate],
    pattern: Regex,
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("id", &self.id)
            .field("group", &self.group)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

impl Check {
    fn compile(
        id: &'static str,
        group: &'static str,
        pattern: &str,
        severity: Severity,
        description: &'static str,
        challenge_hint: Option<ChallengeHint>,
        predicates: &'static [Predicate],
    ) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("check '{id}' has an invalid pattern: {e}"));
        Self {
            id,
            group,
            severity,
            description,
            challenge_hint,
            predicates,
            pattern,
        }
    }

    #[must_use]
    pub fn is_match(&self, command: &str) -> bool {
        self.pattern.is_match(command).unwrap_or(false)
    }

    /// Captures for a match, used by predicate evaluation.
    #[must_use]
    pub fn captures<'t>(&self, command: &'t str) -> Option<fancy_regex::Captures<'t>> {
        self.pattern.captures(command).ok().flatten()
    }
}

/// A projection of a [`Check`] returned in validation results — carries no
/// regex state so it is cheap to clone and serialize.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchRecord {
    pub id: String,
    pub group: String,
    pub severity: String,
    pub description: String,
}

impl From<&Check> for MatchRecord {
    fn from(check: &Check) -> Self {
        Self {
            id: check.id.to_string(),
            group: check.group.to_string(),
            severity: check.severity.to_string(),
            description: check.description.to_string(),
        }
    }
}

/// The compiled, read-only rule catalog.
pub struct Catalog {
    checks: Vec<Check>,
}

impl Catalog {
    #[must_use]
    pub fn all(&self) -> &[Check] {
        &self.checks
    }

    #[must_use]
    pub fn groups(&self) -> HashSet<&'static str> {
        self.checks.iter().map(|c| c.group).collect()
    }

    #[must_use]
    pub fn by_group(&self, group: &str) -> Vec<&Check> {
        self.checks.iter().filter(|c| c.group == group).collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }

    fn build() -> Self {
        let mut checks = Vec::new();
        rules::fs::register(&mut checks);
        rules::git::register(&mut checks);
        rules::docker::register(&mut checks);
        rules::k8s::register(&mut checks);
        rules::aws::register(&mut checks);
        rules::database::register(&mut checks);
        rules::messaging::register(&mut checks);
        rules::platform::register(&mut checks);
        rules::system::register(&mut checks);

        let mut seen = HashSet::with_capacity(checks.len());
        for check in &checks {
            assert!(
                seen.insert(check.id),
                "duplicate check id in catalog: {}",
                check.id
            );
        }

        tracing::info!(rule_count = checks.len(), "catalog loaded");
        Self { checks }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

/// Load (or return the already-loaded) process-wide catalog.
#[must_use]
pub fn load() -> &'static Catalog {
    &CATALOG
}

fn cmp_severity(a: &Check, b: &Check) -> Ordering {
    b.severity.cmp(&a.severity)
}
