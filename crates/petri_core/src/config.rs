//! Configuration for a simulation run.
//!
//! Strongly-typed structures mapping to `config.toml`. Defaults are
//! hardcoded in the `Default` impls; a config file, when present, overrides
//! them; CLI flags override both (applied by the binary).
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [engine]
//! workers = 4
//! max_iterations = 0
//!
//! [display]
//! frame_delay_ms = 40
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Compute-group configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of compute workers. Must be at least 1.
    pub workers: usize,
    /// Stop after this many iterations; 0 means run until quit.
    pub max_iterations: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            max_iterations: 0,
        }
    }
}

/// Display-worker configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// Minimum time between rendered frames, in milliseconds. Also the
    /// budget for polling quit events between frames.
    pub frame_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { frame_delay_ms: 40 }
    }
}

/// Top-level configuration for a run.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub engine: EngineConfig,
    pub display: DisplayConfig,
}

impl SimConfig {
    /// Loads configuration from a TOML file. A missing file yields the
    /// defaults; a malformed file is a configuration error and aborts the
    /// run before anything is spawned.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
