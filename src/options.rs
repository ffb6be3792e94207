//! Per-call options for validation and approval.

use crate::catalog::Severity;
use std::collections::HashSet;

/// Challenge kind requested for an `approve()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeType {
    #[default]
    Confirm,
    Math,
    Word,
    Block,
}

impl ChallengeType {
    /// Parses a CLI/config value, falling back to [`ChallengeType::Confirm`]
    /// with a logged warning on anything unrecognized.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirm" => Self::Confirm,
            "math" => Self::Math,
            "word" => Self::Word,
            "block" => Self::Block,
            other => {
                tracing::warn!(value = other, "unrecognized --challenge value, using confirm");
                Self::Confirm
            }
        }
    }
}

/// Options controlling a single `validate`/`approve` call.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Empty means "no severity filter" (all severities pass).
    pub allowed_severities: HashSet<Severity>,
    /// Check ids that force `should_deny` when matched.
    pub deny_pattern_ids: HashSet<String>,
}

impl ValidationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_allowed_severities(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.allowed_severities = severities.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_deny_pattern_ids(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.deny_pattern_ids = ids.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_challenge_falls_back_to_confirm() {
        assert_eq!(ChallengeType::parse_or_default("yolo"), ChallengeType::Confirm);
    }

    #[test]
    fn recognized_challenge_values_parse() {
        assert_eq!(ChallengeType::parse_or_default("math"), ChallengeType::Math);
        assert_eq!(ChallengeType::parse_or_default("WORD"), ChallengeType::Word);
        assert_eq!(ChallengeType::parse_or_default("block"), ChallengeType::Block);
    }

    #[test]
    fn default_options_have_no_filters() {
        let opts = ValidationOptions::new();
        assert!(opts.allowed_severities.is_empty());
        assert!(opts.deny_pattern_ids.is_empty());
    }
}
