//! Execution Façade (C8): runs an approved command, constructing the child
//! environment explicitly from an allow-list rather than filtering a copy of
//! the process environment.
//!
//! Environment propagation is the single most dangerous ambient-state hazard
//! in this crate — the child env is always built up from nothing, never
//! derived by subtracting from `std::env::vars()`.

use std::collections::HashMap;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::GateResult;

/// Result of executing an approved command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    pub allowed: bool,
    pub stdout: String,
    pub stderr: String,
    pub error: Option<String>,
}

/// Runs `command` through the host shell, with `cwd` and `env` built
/// explicitly from `env_allow_list` plus the caller-supplied `environment`.
///
/// Only variable names present in `env_allow_list` are inherited from the
/// current process environment; everything else is excluded. Values in
/// `environment` win on key collision with an inherited variable.
///
/// A nonzero exit, or a failure to spawn the process at all (missing shell,
/// bad `cwd`, ...), still yields `allowed: true` with `error` populated — the
/// gate's job ends at admitting the command, not at judging whether it ran
/// to completion. Nothing this function does ever crosses the API boundary
/// as a `Result::Err`.
pub async fn exec_if_allowed(
    command: &str,
    cwd: Option<&str>,
    environment: &HashMap<String, String>,
    env_allow_list: &[String],
) -> GateResult<ExecResult> {
    let child_env = build_child_env(environment, env_allow_list);

    let mut cmd = shell_command(command);
    cmd.env_clear();
    cmd.envs(&child_env);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(e) => {
            let err = e.to_string();
            tracing::warn!(command, %err, "command could not be spawned");
            return Ok(ExecResult { allowed: true, stdout: String::new(), stderr: String::new(), error: Some(err) });
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let error = if output.status.success() {
        None
    } else {
        Some(format!("exited with status {}", output.status))
    };

    if let Some(err) = &error {
        tracing::warn!(command, %err, "executed command exited non-zero");
    } else {
        tracing::info!(command, "executed command succeeded");
    }

    Ok(ExecResult { allowed: true, stdout, stderr, error })
}

/// Builds the child environment: only names in `env_allow_list` are pulled
/// from the current process environment, then `environment` is overlaid.
fn build_child_env(
    environment: &HashMap<String, String>,
    env_allow_list: &[String],
) -> HashMap<String, String> {
    let mut child_env = HashMap::new();
    for name in env_allow_list {
        if let Ok(value) = std::env::var(name) {
            child_env.insert(name.clone(), value);
        }
    }
    for (key, value) in environment {
        child_env.insert(key.clone(), value.clone());
    }
    child_env
}

#[cfg(target_os = "windows")]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(target_os = "windows"))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("/bin/sh");
    cmd.args(["-c", command]);
    cmd
}
