// ABOUTME: WCAG contrast checks over named foreground/background token pairs
// ABOUTME: Pairs that do not resolve to two opaque hex colors are skipped, not reported

use glow_color::{ColorValue, ContrastRatios, contrast_ratio};
use glow_logging::debug;
use glow_tokens::{DesignSystem, TokenNode};
use serde::{Deserialize, Serialize};

use crate::report::Violation;

/// A foreground/background pair and the minimum ratio it must reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub fg: String,
    pub bg: String,
    pub min_ratio: f64,
    #[serde(default)]
    pub label: String,
}

impl ContrastPair {
    pub fn new(fg: &str, bg: &str, min_ratio: f64, label: &str) -> Self {
        Self {
            fg: fg.to_string(),
            bg: bg.to_string(),
            min_ratio,
            label: label.to_string(),
        }
    }
}

/// The pairs every theme variant is held to.
#[rustfmt::skip]
pub fn default_pairs() -> Vec<ContrastPair> {
    use ContrastRatios as R;
    vec![
        ContrastPair::new("text.primary", "background", R::AA_NORMAL, "body text on background"),
        ContrastPair::new("text.primary", "surface.DEFAULT", R::AA_NORMAL, "text on surface"),
        ContrastPair::new("text.secondary", "background", R::AA_NORMAL, "secondary text on background"),
        ContrastPair::new("text.tertiary", "background", R::AA_LARGE, "tertiary text (large)"),
        ContrastPair::new("accent.foreground", "accent.DEFAULT", R::AA_LARGE, "accent button"),
        ContrastPair::new("destructive.foreground", "destructive.DEFAULT", R::AA_LARGE, "destructive button"),
        ContrastPair::new("success.foreground", "success.DEFAULT", R::AA_LARGE, "success badge"),
        ContrastPair::new("warning.foreground", "warning.DEFAULT", R::AA_LARGE, "warning (large text)"),
        ContrastPair::new("primary.foreground", "primary.DEFAULT", R::AA_NORMAL, "primary button"),
        ContrastPair::new("text.primary", "muted.DEFAULT", R::AA_NORMAL, "text on muted"),
    ]
}

fn opaque_hex<'a>(tree: &'a TokenNode, path: &str) -> Option<&'a str> {
    tree.get_path(path)
        .and_then(TokenNode::as_str)
        .filter(|value| ColorValue::classify(value) == ColorValue::Hex)
}

/// Check `pairs` against one variant's semantic tree.
pub fn check_variant(variant: &str, tree: &TokenNode, pairs: &[ContrastPair]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for pair in pairs {
        let (Some(fg_hex), Some(bg_hex)) = (opaque_hex(tree, &pair.fg), opaque_hex(tree, &pair.bg))
        else {
            debug!(
                variant,
                fg = %pair.fg,
                bg = %pair.bg,
                "Pair skipped, not two opaque hex colors"
            );
            continue;
        };

        let Ok(ratio) = contrast_ratio(fg_hex, bg_hex) else {
            continue;
        };

        if ratio < pair.min_ratio {
            violations.push(Violation::ContrastTooLow {
                variant: variant.to_string(),
                fg: pair.fg.clone(),
                bg: pair.bg.clone(),
                fg_hex: fg_hex.to_string(),
                bg_hex: bg_hex.to_string(),
                ratio,
                min_ratio: pair.min_ratio,
                label: pair.label.clone(),
            });
        }
    }

    violations
}

/// Check `pairs` against every color variant of `system`.
pub fn check_contrast(system: &DesignSystem, pairs: &[ContrastPair]) -> Vec<Violation> {
    system
        .colors
        .iter()
        .flat_map(|(variant, tree)| check_variant(variant, tree, pairs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_tokens::tokens;

    #[test]
    fn test_readable_fixture_passes() {
        let tree = tokens!({
            "background": "#050505",
            "text": { "primary": "#F2F2F2" },
        });
        let pairs = [ContrastPair::new("text.primary", "background", 4.5, "body")];
        assert!(check_variant("dark", &tree, &pairs).is_empty());
    }

    #[test]
    fn test_low_contrast_is_reported() {
        let tree = tokens!({
            "background": "#FBFCFD",
            "text": { "tertiary": "#B5BECA" },
        });
        let pairs = [ContrastPair::new("text.tertiary", "background", 3.0, "tertiary")];

        let violations = check_variant("light", &tree, &pairs);
        assert_eq!(violations.len(), 1);
        match &violations[0] {
            Violation::ContrastTooLow {
                variant,
                fg_hex,
                bg_hex,
                ratio,
                ..
            } => {
                assert_eq!(variant, "light");
                assert_eq!(fg_hex, "#B5BECA");
                assert_eq!(bg_hex, "#FBFCFD");
                assert!(*ratio < 3.0);
            }
            other => panic!("unexpected violation {other:?}"),
        }
    }

    #[test]
    fn test_translucent_and_missing_sides_are_skipped() {
        let tree = tokens!({
            "background": "#FFFFFF",
            "border": { "subtle": "rgba(0, 30, 60, 0.07)" },
        });
        let pairs = [
            ContrastPair::new("border.subtle", "background", 21.0, "rgba"),
            ContrastPair::new("text.primary", "background", 21.0, "absent"),
        ];
        assert!(check_variant("light", &tree, &pairs).is_empty());
    }

    #[test]
    fn test_exact_threshold_passes() {
        let tree = tokens!({ "a": "#000000", "b": "#FFFFFF" });
        let ratio = contrast_ratio("#000000", "#FFFFFF").unwrap();
        let pairs = [ContrastPair::new("a", "b", ratio, "exact")];
        assert!(check_variant("x", &tree, &pairs).is_empty());
    }

    #[test]
    fn test_builtin_pairs_pass_every_variant() {
        let violations = check_contrast(DesignSystem::builtin(), &default_pairs());
        assert!(violations.is_empty(), "{violations:#?}");
    }
}
