//! Shell-command safety gate: validation, interactive approval, and a thin
//! execution façade for commands about to be run by a shell or an AI-agent
//! tool.
//!
//! The core engine is a pipeline: split the command into sub-commands
//! ([`splitter`]), match each against the embedded [`catalog`] of rules
//! ([`matcher`]), apply severity/deny/predicate filtering ([`filter`]),
//! produce a tri-state verdict ([`decision`]), and — when the verdict
//! requires it — run an interactive [`challenge`] before admitting the
//! command to the [`exec`] façade.
//!
//! Orchestration of those stages lives in [`pipeline`]; that module's
//! `validate` and `approve` functions are the public entry points most
//! callers want.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod challenge;
pub mod config;
pub mod decision;
pub mod error;
pub mod exec;
pub mod filter;
pub mod logging;
pub mod matcher;
pub mod options;
pub mod pipeline;
pub mod resolver;
pub mod splitter;

pub use decision::ValidationResult;
pub use error::{GateError, GateResult};
pub use exec::{exec_if_allowed, ExecResult};
pub use options::{ChallengeType, ValidationOptions};
pub use pipeline::{approve, validate, ApprovalOutcome};
