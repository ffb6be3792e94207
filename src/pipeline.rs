//! Approval Pipeline (C7): orchestrates the splitter, matcher, filter, and
//! decision function into `validate`, then layers the challenge controller
//! on top for `approve`.

use std::time::Duration;

use crate::catalog::{Catalog, MatchRecord};
use crate::challenge::{self, Kind};
use crate::decision::{decide, highest_severity, ValidationResult};
use crate::error::{GateError, GateResult};
use crate::filter::filter;
use crate::matcher::match_one;
use crate::options::{ChallengeType, ValidationOptions};
use crate::resolver::PathResolver;
use crate::splitter;

/// Outcome of `approve()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalOutcome {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl ApprovalOutcome {
    fn allow() -> Self {
        Self { allowed: true, reason: None }
    }

    fn deny(reason: impl Into<String>) -> Self {
        Self { allowed: false, reason: Some(reason.into()) }
    }
}

/// Splits, matches, and filters `command`, returning the tri-state verdict.
///
/// # Errors
/// Returns [`GateError::EmptyCommand`] when `command` is blank.
pub fn validate(
    command: &str,
    options: &ValidationOptions,
    catalog: &Catalog,
    resolver: &dyn PathResolver,
) -> GateResult<ValidationResult> {
    if command.trim().is_empty() {
        return Err(GateError::EmptyCommand);
    }

    let parts = splitter::split(command);
    let mut all_matches = Vec::new();
    for part in &parts {
        all_matches.extend(match_one(part, catalog));
    }

    let outcome = filter(all_matches, options, resolver);
    Ok(decide(&outcome))
}

/// Runs `validate`, then conditionally opens a challenge session, returning
/// the final allow/deny verdict.
///
/// # Errors
/// Propagates [`GateError::EmptyCommand`] from `validate`.
pub async fn approve(
    command: &str,
    options: &ValidationOptions,
    catalog: &Catalog,
    resolver: &dyn PathResolver,
    challenge_type: ChallengeType,
    timeout_ms: u64,
) -> GateResult<ApprovalOutcome> {
    let validation = validate(command, options, catalog, resolver)?;

    if !validation.should_challenge {
        return Ok(ApprovalOutcome::allow());
    }

    if validation.should_deny {
        let reasons: Vec<&str> = validation.matches.iter().map(|m| m.description.as_str()).collect();
        tracing::info!(command, reasons = ?reasons, "command denied by policy");
        return Ok(ApprovalOutcome::deny("security policy violation"));
    }

    if challenge_type == ChallengeType::Block {
        tracing::info!(command, "command blocked by policy, no challenge offered");
        return Ok(ApprovalOutcome::deny("blocked by policy"));
    }

    let kind = match challenge_type {
        ChallengeType::Confirm => Kind::Confirm,
        ChallengeType::Math => Kind::new_math(),
        ChallengeType::Word => Kind::new_word(),
        ChallengeType::Block => unreachable!("handled above"),
    };

    let severity = highest_severity(&matches_as_checks(&validation.matches, catalog));
    tracing::info!(command, severity = %severity, kind = kind.label(), "opening challenge");

    let resolution = challenge::open(
        kind,
        command.to_string(),
        validation.matches.clone(),
        Duration::from_millis(timeout_ms),
        true,
    )
    .await;

    Ok(if resolution.approved {
        ApprovalOutcome::allow()
    } else {
        ApprovalOutcome::deny(resolution.reason.unwrap_or_else(|| "user denial".to_string()))
    })
}

fn matches_as_checks<'c>(records: &[MatchRecord], catalog: &'c Catalog) -> Vec<&'c crate::catalog::Check> {
    records.iter().filter_map(|m| catalog.get(&m.id)).collect()
}
