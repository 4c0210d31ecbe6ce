//! Engine configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `SEQFLOW_*` environment variables.

use crate::error::{ErrorCode, Result, SeqflowError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub const ENV_MAX_PARALLEL: &str = "SEQFLOW_MAX_PARALLEL";
pub const ENV_INSPECT_LEVEL: &str = "SEQFLOW_INSPECT_LEVEL";
pub const ENV_LOG: &str = "SEQFLOW_LOG";

/// Level at which the tracing inspector reports elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectLevel {
    Trace,
    Debug,
    #[default]
    Info,
}

impl FromStr for InspectLevel {
    type Err = SeqflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            other => Err(SeqflowError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("Invalid inspect level: {}. Use trace, debug or info", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on concurrently running transforms in the parallel executor
    pub max_parallel: usize,
    pub inspect_level: InspectLevel,
    /// Default `tracing` filter directive
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_parallel: default_parallelism(),
            inspect_level: InspectLevel::default(),
            log_filter: "info".to_string(),
        }
    }
}

fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file and apply environment overrides on top
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading engine configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.merge_env_vars()?;
        Ok(config)
    }

    /// Defaults with environment overrides
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.merge_env_vars()?;
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MAX_PARALLEL) {
            self.max_parallel = value.trim().parse::<usize>().map_err(|e| {
                SeqflowError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("{} must be a positive integer, got '{}'", ENV_MAX_PARALLEL, value),
                )
                .with_source(e)
            })?;
        }

        if let Some(value) = lookup(ENV_INSPECT_LEVEL) {
            self.inspect_level = value.parse()?;
        }

        if let Some(value) = lookup(ENV_LOG) {
            self.log_filter = value;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_parallel == 0 {
            return Err(SeqflowError::zero_parallelism());
        }
        Ok(())
    }
}
