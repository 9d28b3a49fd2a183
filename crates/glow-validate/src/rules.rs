// ABOUTME: Validation rule configuration with defaults for the built-in design system
// ABOUTME: Deserializable so the `[validation]` table of glow.toml can override any field

use serde::{Deserialize, Serialize};

use crate::contrast::{ContrastPair, default_pairs};

/// Which trees each check covers and the thresholds it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Color variants that must share one shape; empty means all of them.
    pub color_parity: Vec<String>,
    /// Scale sets that must share one shape.
    pub scale_parity: Vec<String>,
    /// Scale sets whose steps must all be `#RRGGBB`.
    pub hex_only_scales: Vec<String>,
    /// Style families; the first is the reference the others must cover.
    pub style_parity: Vec<String>,
    /// Paths every style family must define.
    pub required_style_paths: Vec<String>,
    /// Custom property prefixes the stylesheet must declare when referenced.
    pub namespaces: Vec<String>,
    pub contrast_pairs: Vec<ContrastPair>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            color_parity: Vec::new(),
            scale_parity: vec!["dark".to_string(), "light".to_string()],
            hex_only_scales: vec!["bloom".to_string()],
            style_parity: vec!["arctic".to_string(), "bloom".to_string()],
            required_style_paths: ["radius.sm", "radius.md", "radius.lg"]
                .into_iter()
                .map(String::from)
                .collect(),
            namespaces: ["--color-", "--sidebar-", "--chart-"]
                .into_iter()
                .map(String::from)
                .collect(),
            contrast_pairs: default_pairs(),
        }
    }
}

impl ValidationRules {
    pub fn in_namespace(&self, name: &str) -> bool {
        self.namespaces.iter().any(|prefix| name.starts_with(prefix.as_str()))
    }
}
