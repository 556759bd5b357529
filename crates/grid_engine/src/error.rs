//! Unified error types for grid_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for grid_engine operations
///
/// Editing itself never fails: out-of-range reads yield sentinels and
/// undo/redo at the ends of history are no-ops. Errors only come from setup
/// work such as loading options or building documents from raw data.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] toml::de::Error),

    #[error("Failed to write options: {0}")]
    OptionsSerialize(#[from] toml::ser::Error),

    #[error("Bitmap row {row} has {actual} cells, expected {expected}")]
    RaggedBitmap { row: usize, expected: usize, actual: usize },

    #[error("Invalid size: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for grid_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}
