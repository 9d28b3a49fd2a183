// ABOUTME: Error types for the stylesheet synchronizer
// ABOUTME: Per-region skips are reported, only whole-run failures surface as errors

use std::path::PathBuf;
use thiserror::Error;

use crate::sync::SkippedRegion;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to read stylesheet {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write stylesheet {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No theme region could be updated in {path} ({} skipped)", .skipped.len())]
    NoRegions {
        path: PathBuf,
        skipped: Vec<SkippedRegion>,
    },
}

impl SyncError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether a retry could succeed without editing the stylesheet
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }
}
