// ABOUTME: Error types for loading token documents
// ABOUTME: The built-in token set is infallible, only external documents produce these

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to read token file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse token document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Token document defines no color variants")]
    NoVariants,

    #[error("Token path '{path}' is not a branch")]
    NotABranch { path: String },
}

impl TokenError {
    /// Create an IO error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a not-a-branch error
    pub fn not_a_branch<S: Into<String>>(path: S) -> Self {
        Self::NotABranch { path: path.into() }
    }
}
