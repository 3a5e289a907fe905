// Chunk: docs/chunks/engine_config - Engine configuration
//!
//! Engine configuration.
//!
//! The embedding shell may hand the engine a JSON document; every field is
//! optional and falls back to the defaults below.
//!
//! ```json
//! { "indent_width": 4, "tab_selection": "indent_lines" }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use edit_engine_buffer::IndentUnit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How Tab and Shift+Tab treat a non-empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabSelectionMode {
    /// Tab replaces the selection with one indent unit; Shift+Tab outdents
    /// only the line holding the selection start.
    #[default]
    Replace,
    /// Tab and Shift+Tab indent or outdent every touched line.
    IndentLines,
}

/// Tunables for [`crate::EditorEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of spaces in one indent unit.
    pub indent_width: usize,
    /// Tab behavior when a selection is active.
    pub tab_selection: TabSelectionMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indent_width: IndentUnit::DEFAULT_WIDTH,
            tab_selection: TabSelectionMode::default(),
        }
    }
}

/// Errors from loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("indent_width must be at least 1")]
    InvalidIndentWidth,
}

impl EngineConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "rejecting engine config");
        })
    }

    /// Checks the values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::InvalidIndentWidth);
        }
        Ok(())
    }

    /// The indent unit these settings describe.
    pub fn indent_unit(&self) -> IndentUnit {
        IndentUnit::spaces(self.indent_width)
    }
}
