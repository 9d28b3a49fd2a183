// ABOUTME: Marker configuration and region location inside the generated stylesheet
// ABOUTME: A region spans from just after its start marker to the shared end marker

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The start marker of one theme variant's region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub variant: String,
    pub start: String,
}

impl RegionSpec {
    pub fn new(variant: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            start: start.into(),
        }
    }
}

/// Region markers, processed in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub end: String,
    pub regions: Vec<RegionSpec>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            end: "/* Sidebar */".to_string(),
            regions: vec![
                RegionSpec::new("light", "color-scheme: light;"),
                RegionSpec::new("dark", "color-scheme: dark;"),
                RegionSpec::new("bloom", "/* Bloom palette */"),
            ],
        }
    }
}

impl Markers {
    pub fn region(&self, variant: &str) -> Option<&RegionSpec> {
        self.regions.iter().find(|r| r.variant == variant)
    }
}

/// Why a region was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("start marker {0:?} not found")]
    MissingStart(String),

    #[error("end marker {0:?} not found after start marker")]
    MissingEnd(String),

    #[error("no color variant named {0:?} in the token tree")]
    UnknownVariant(String),

    #[error("generated block would contain marker {0:?}")]
    BlockContainsMarker(String),
}

/// Byte range of the replaceable content: after `start`, up to (not including) `end`.
pub fn locate_region(text: &str, start: &str, end: &str) -> Result<Range<usize>, SkipReason> {
    let start_idx = text
        .find(start)
        .ok_or_else(|| SkipReason::MissingStart(start.to_string()))?;
    let content_start = start_idx + start.len();
    let end_idx = text[content_start..]
        .find(end)
        .map(|offset| content_start + offset)
        .ok_or_else(|| SkipReason::MissingEnd(end.to_string()))?;

    Ok(content_start..end_idx)
}
