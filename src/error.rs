//! Error types for report tree construction and page writing.
//!
//! Absence of data (no artifacts, no descriptors, dangling references) is never
//! an error here; it is modeled as an empty result by the callers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode YAML from {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }
}
