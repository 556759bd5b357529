use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Color, EngineError, Result};

/// Snapshot policy of an [`crate::OperationLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Number of checkpoints kept in the ring; the oldest is evicted first.
    pub snapshot_capacity: usize,
    /// A checkpoint is taken whenever the log length is a multiple of this.
    pub snapshot_interval: usize,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            snapshot_capacity: 5,
            snapshot_interval: 8,
        }
    }
}

impl LogOptions {
    /// Options that never take a snapshot. Every undo replays from the start.
    pub fn without_snapshots() -> Self {
        Self {
            snapshot_capacity: 0,
            snapshot_interval: 0,
        }
    }

    pub fn snapshots_enabled(&self) -> bool {
        self.snapshot_capacity > 0 && self.snapshot_interval > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub default_tool_width: i32,
    pub default_color: Color,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_tool_width: 1,
            default_color: 1,
        }
    }
}

/// Persisted engine options.
///
/// Stored as `options.toml`; missing keys fall back to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub log: LogOptions,
    pub editor: EditorOptions,
}

impl Options {
    pub const FILE_NAME: &'static str = "options.toml";

    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOptions`] if `text` is not valid options toml.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    ///
    /// Returns an error if the options can't be represented as toml.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads options from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no options file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| EngineError::read_file(path, e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// # Errors
    ///
    /// Returns an error if the options can't be serialized or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
