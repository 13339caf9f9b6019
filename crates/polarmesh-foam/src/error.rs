//! Error types for mesh export.

use thiserror::Error;

/// Errors that can occur while exporting a mesh.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export settings are unusable.
    #[error("invalid export settings: {0}")]
    InvalidSettings(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
