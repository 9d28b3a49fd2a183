// ABOUTME: The complete design system: semantic colors, scales, style families, base tokens
// ABOUTME: Loaded once per run, either the built-in set or a JSON document

use std::path::Path;
use std::sync::OnceLock;

use glow_logging::{debug, info};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::error::{Result, TokenError};
use crate::node::TokenNode;

/// Semantic color variant names of the built-in set.
pub mod variant {
    pub const DARK: &str = "dark";
    pub const LIGHT: &str = "light";
    pub const BLOOM: &str = "bloom";
}

/// Style family names of the built-in set.
pub mod family {
    pub const ARCTIC: &str = "arctic";
    pub const BLOOM: &str = "bloom";
}

static BUILTIN: OnceLock<DesignSystem> = OnceLock::new();

/// Every token tree of a design language, keyed by variant or family name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    /// Semantic color trees per theme variant.
    pub colors: IndexMap<String, TokenNode>,

    /// Color scale sets per variant; each child is a 12-step ramp.
    #[serde(default)]
    pub scales: IndexMap<String, TokenNode>,

    /// Style token trees per style family.
    #[serde(default)]
    pub styles: IndexMap<String, TokenNode>,

    /// Theme-independent base tokens.
    #[serde(default = "TokenNode::empty_branch")]
    pub tokens: TokenNode,
}

impl DesignSystem {
    /// The built-in Arctic Glow + Bloom design system.
    pub fn builtin() -> &'static DesignSystem {
        BUILTIN.get_or_init(|| {
            let system = builtin::design_system();
            debug!(
                variants = system.colors.len(),
                scale_sets = system.scales.len(),
                "Initialized built-in design system"
            );
            system
        })
    }

    /// Parse a JSON document with top-level `colors`, `scales`, `styles` and `tokens` keys.
    pub fn from_json(json: &str) -> Result<Self> {
        let system: DesignSystem = serde_json::from_str(json)?;
        system.check_shape()?;
        Ok(system)
    }

    /// Read and parse a JSON token document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TokenError::io(path, e))?;
        let system = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            variants = system.colors.len(),
            "Loaded token document"
        );
        Ok(system)
    }

    fn check_shape(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(TokenError::NoVariants);
        }
        let groups = [("colors", &self.colors), ("scales", &self.scales), ("styles", &self.styles)];
        for (group, trees) in groups {
            if let Some(name) = trees
                .iter()
                .find_map(|(name, tree)| tree.as_branch().is_none().then_some(name))
            {
                return Err(TokenError::not_a_branch(format!("{group}.{name}")));
            }
        }
        Ok(())
    }

    /// Semantic color tree for a variant.
    pub fn variant(&self, name: &str) -> Option<&TokenNode> {
        self.colors.get(name)
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Scale set for a variant.
    pub fn scale_set(&self, name: &str) -> Option<&TokenNode> {
        self.scales.get(name)
    }

    pub fn style(&self, family: &str) -> Option<&TokenNode> {
        self.styles.get(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenValue;

    #[test]
    fn test_builtin_is_shared() {
        let a = DesignSystem::builtin();
        let b = DesignSystem::builtin();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_builtin_variants_in_order() {
        let names: Vec<&str> = DesignSystem::builtin().variant_names().collect();
        assert_eq!(names, [variant::DARK, variant::LIGHT, variant::BLOOM]);
    }

    #[test]
    fn test_builtin_lookups() {
        let system = DesignSystem::builtin();
        let dark = system.variant(variant::DARK).unwrap();
        assert_eq!(dark.get_path("accent.DEFAULT").and_then(TokenNode::as_str), Some("#38BDB8"));

        let teal = system.scale_set(variant::LIGHT).unwrap().get_path("teal.9");
        assert_eq!(teal.and_then(TokenNode::as_str), Some("#1A8F88"));

        let radius = system.style(family::BLOOM).unwrap().get_path("radius.md");
        assert_eq!(radius.and_then(TokenNode::as_str), Some("14px"));

        assert_eq!(
            system.tokens.get_path("spacing.base").and_then(TokenNode::as_leaf),
            Some(&TokenValue::Number(4.0))
        );
    }

    #[test]
    fn test_from_json_defaults_optional_groups() {
        let json = r##"{"colors": {"dark": {"background": "#000000"}}}"##;
        let system = DesignSystem::from_json(json).unwrap();
        assert!(system.scales.is_empty());
        assert!(system.styles.is_empty());
        assert_eq!(system.tokens, TokenNode::empty_branch());
    }

    #[test]
    fn test_from_json_rejects_empty_colors() {
        let err = DesignSystem::from_json(r#"{"colors": {}}"#).unwrap_err();
        assert!(matches!(err, TokenError::NoVariants));
    }

    #[test]
    fn test_from_json_rejects_leaf_variant() {
        let err = DesignSystem::from_json(r##"{"colors": {"dark": "#000000"}}"##).unwrap_err();
        assert!(matches!(err, TokenError::NotABranch { ref path } if path == "colors.dark"));
    }

    #[test]
    fn test_from_json_reports_syntax_errors() {
        let err = DesignSystem::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TokenError::Parse(_)));
    }
}
