//! Error taxonomy for the public API boundary.
//!
//! Only the genuinely exceptional case crosses the boundary as `Result::Err`.
//! Everything else — timeouts, transport failures, policy denials, exec spawn
//! or nonzero-exit failures — is data inside a normal `Ok` result; see
//! [`crate::pipeline::ApprovalOutcome`] and [`crate::exec::ExecResult`]. A
//! malformed catalog pattern is a build-time programming error, not a
//! runtime one, so it panics at startup instead (`Catalog::build`) rather
//! than being represented here.

use thiserror::Error;

/// Errors returned by the gate's public API.
#[derive(Debug, Error)]
pub enum GateError {
    /// The caller supplied an empty or whitespace-only command.
    #[error("empty command")]
    EmptyCommand,
}

pub type GateResult<T> = Result<T, GateError>;
