// ABOUTME: Error types for validation runs that cannot produce a report
// ABOUTME: Findings are violations, not errors; these cover unreadable inputs and bad rules

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidateError>;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid audit pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Source directory not found: {path}")]
    MissingSourceDir { path: PathBuf },
}

impl ValidateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
