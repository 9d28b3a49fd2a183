// ABOUTME: Stylesheet synchronizer for glow generated theme regions
// ABOUTME: Block rendering, region splicing and read-only declaration lookups

pub mod block;
pub mod error;
pub mod parse;
pub mod region;
pub mod sync;

pub use block::{css_value, kebab_case, render_block, variable_name};
pub use error::SyncError;
pub use parse::{declaration_value, declared_variables, theme_block, var_references};
pub use region::{Markers, RegionSpec, SkipReason, locate_region};
pub use sync::{SkippedRegion, StylesheetSync, SyncReport, Synced};
