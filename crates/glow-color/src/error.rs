// ABOUTME: Error types for color parsing
// ABOUTME: Callers decide whether a malformed value is fatal or a skip condition

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color: {value:?}")]
    InvalidHex { value: String },
}

impl ColorError {
    pub fn invalid_hex<S: Into<String>>(value: S) -> Self {
        Self::InvalidHex {
            value: value.into(),
        }
    }
}
