//! Engine configuration
//!
//! [`EngineConfig`] is plain serde data stored as JSON. Missing fields take
//! their defaults, so a partial file such as `{"depth": 4}` is valid.
//!
//! # Error Handling
//!
//! [`EngineConfig::load`] reports every failure to the caller.
//! [`EngineConfig::load_or_default`] logs the failure and falls back to the
//! defaults instead.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{DEFAULT_ANALYSIS_MOVES, DEFAULT_DEPTH};
use crate::error::{EngineError, EngineResult};

/// Search settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by `best_move` and `analyze`
    pub depth: u32,
    /// Number of entries returned by `analyze`
    pub analysis_moves: usize,
    /// Beta cutoffs on or off. Results are identical either way, only the
    /// node count changes.
    pub pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            analysis_moves: DEFAULT_ANALYSIS_MOVES,
            pruning: true,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Read a JSON config file, using defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!("[CONFIG] Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[CONFIG] Saved config to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.depth == 0 {
            return Err(EngineError::InvalidConfig {
                message: "depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
