// ABOUTME: Rewrites the marker-delimited theme regions of the stylesheet from the token tree
// ABOUTME: Regions are spliced in order against the current text, the file is written at most once

use std::path::Path;

use glow_logging::{debug, error, info};
use glow_tokens::DesignSystem;

use crate::block::render_block;
use crate::error::{Result, SyncError};
use crate::region::{Markers, SkipReason, locate_region};

/// A region that was left untouched, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRegion {
    pub variant: String,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not update region '{}': {}", self.variant, self.reason)
    }
}

/// Outcome of one synchronizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Variants whose region was regenerated, in processing order.
    pub replaced: Vec<String>,
    pub skipped: Vec<SkippedRegion>,
    /// Whether the resulting text differs from the input.
    pub changed: bool,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Text produced by [`StylesheetSync::sync_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synced {
    pub text: String,
    pub report: SyncReport,
}

/// Regenerates theme regions of a stylesheet from a design system.
#[derive(Debug, Clone, Copy)]
pub struct StylesheetSync<'a> {
    system: &'a DesignSystem,
    markers: &'a Markers,
}

impl<'a> StylesheetSync<'a> {
    pub fn new(system: &'a DesignSystem, markers: &'a Markers) -> Self {
        Self { system, markers }
    }

    /// Splice every configured region into `text`.
    ///
    /// Each region is located in the text as left by the previous splice. A
    /// region whose markers are missing is skipped whole.
    pub fn sync_text(&self, text: &str) -> Synced {
        let mut current = text.to_string();
        let mut report = SyncReport::default();

        for region in &self.markers.regions {
            match self.splice_region(&current, &region.variant, &region.start) {
                Ok(next) => {
                    debug!(variant = %region.variant, "Region regenerated");
                    current = next;
                    report.replaced.push(region.variant.clone());
                }
                Err(reason) => {
                    error!(
                        variant = %region.variant,
                        start_marker = %region.start,
                        reason = %reason,
                        "Could not find markers for region"
                    );
                    report.skipped.push(SkippedRegion {
                        variant: region.variant.clone(),
                        reason,
                    });
                }
            }
        }

        report.changed = current != text;
        Synced {
            text: current,
            report,
        }
    }

    fn splice_region(
        &self,
        text: &str,
        variant: &str,
        start: &str,
    ) -> std::result::Result<String, SkipReason> {
        let end = &self.markers.end;
        let range = locate_region(text, start, end)?;

        let tree = self
            .system
            .variant(variant)
            .ok_or_else(|| SkipReason::UnknownVariant(variant.to_string()))?;
        let block = render_block(tree);

        let markers = std::iter::once(end.as_str())
            .chain(self.markers.regions.iter().map(|r| r.start.as_str()));
        for marker in markers {
            if block.contains(marker) {
                return Err(SkipReason::BlockContainsMarker(marker.to_string()));
            }
        }

        let mut out = String::with_capacity(text.len() + block.len());
        out.push_str(&text[..range.start]);
        out.push_str("\n\n");
        out.push_str(&block);
        out.push_str("\n\n    ");
        out.push_str(&text[range.end..]);
        Ok(out)
    }

    /// Synchronize the stylesheet at `path` in place.
    ///
    /// The file is written only when at least one region was replaced and the
    /// text changed. Fails with [`SyncError::NoRegions`] when nothing could be
    /// replaced.
    pub fn sync_file(&self, path: impl AsRef<Path>) -> Result<SyncReport> {
        let path = path.as_ref();
        let original = std::fs::read_to_string(path).map_err(|e| SyncError::read(path, e))?;
        let Synced { text, report } = self.sync_text(&original);

        if report.replaced.is_empty() {
            return Err(SyncError::NoRegions {
                path: path.to_path_buf(),
                skipped: report.skipped,
            });
        }

        if report.changed {
            std::fs::write(path, text).map_err(|e| SyncError::write(path, e))?;
            info!(
                path = %path.display(),
                regions = report.replaced.len(),
                "Stylesheet updated"
            );
        } else {
            debug!(path = %path.display(), "Stylesheet already up to date");
        }

        Ok(report)
    }
}
