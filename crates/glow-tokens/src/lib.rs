// ABOUTME: Design token model for glow: token trees, theme variants and the built-in set
// ABOUTME: Immutable after load, shared read-only by the synchronizer and the validators

mod builtin;
pub mod design_system;
pub mod error;
pub mod node;

#[cfg(test)]
mod tests;

pub use design_system::{DesignSystem, family, variant};
pub use error::TokenError;
pub use node::{TokenLeaf, TokenNode, TokenValue};

#[doc(hidden)]
pub use indexmap::IndexMap;

/// Step keys every color scale must define.
pub const SCALE_STEPS: std::ops::RangeInclusive<u32> = 1..=12;
