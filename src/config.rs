//! Config Layer (A1): layered configuration for challenge defaults, severity
//! allow-lists, deny-lists, env-propagation allow-lists, and challenge
//! timeout.
//!
//! Layers, lowest to highest precedence:
//! 1. Built-in defaults.
//! 2. An optional TOML file (XDG config dir, overridable via `CSG_CONFIG`).
//! 3. Environment variables (`CSG_CHALLENGE`, `CSG_SEVERITY`,
//!    `CSG_PROPAGATE_ENV`, `CSG_DENY_IDS`).
//! 4. Explicit per-call overrides (CLI flags / `ValidationOptions`), applied
//!    by the caller after loading — this module only produces the merged
//!    file+env+defaults layer.
//!
//! A missing or malformed config file fails open to defaults: never panics,
//! never blocks a caller.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::Severity;
use crate::options::ChallengeType;

const DEFAULT_CHALLENGE_TIMEOUT_MS: u64 = 60_000;

/// The layered, effective configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub challenge_type: String,
    pub allowed_severities: Vec<String>,
    pub deny_pattern_ids: Vec<String>,
    pub env_allow_list: Vec<String>,
    pub challenge_timeout_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            challenge_type: "confirm".to_string(),
            allowed_severities: vec!["critical".to_string(), "high".to_string(), "medium".to_string()],
            deny_pattern_ids: Vec::new(),
            env_allow_list: Vec::new(),
            challenge_timeout_ms: DEFAULT_CHALLENGE_TIMEOUT_MS,
        }
    }
}

impl GateConfig {
    /// Loads defaults, overlays an optional TOML file, then overlays
    /// environment variables. Never fails: any problem at a given layer is
    /// logged and that layer is skipped.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_file(&config_file_path());
        config.apply_env();
        config
    }

    fn apply_file(&mut self, path: &PathBuf) {
        let Ok(contents) = std::fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no config file found, using defaults");
            return;
        };

        match toml::from_str::<Self>(&contents) {
            Ok(file_config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                *self = file_config;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed config file, ignoring");
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("CSG_CHALLENGE") {
            self.challenge_type = value;
        }
        if let Ok(value) = std::env::var("CSG_SEVERITY") {
            self.allowed_severities = split_csv(&value);
        }
        if let Ok(value) = std::env::var("CSG_PROPAGATE_ENV") {
            self.env_allow_list = split_csv(&value);
        }
        if let Ok(value) = std::env::var("CSG_DENY_IDS") {
            self.deny_pattern_ids = split_csv(&value);
        }
    }

    #[must_use]
    pub fn challenge_type(&self) -> ChallengeType {
        ChallengeType::parse_or_default(&self.challenge_type)
    }

    #[must_use]
    pub fn severities(&self) -> Vec<Severity> {
        self.allowed_severities.iter().filter_map(|s| Severity::parse(s)).collect()
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("CSG_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("csg")
        .join("config.toml")
}
