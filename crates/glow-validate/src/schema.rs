// ABOUTME: Structural checks over the token tree: parity, scale shape, value format, emptiness
// ABOUTME: Each check is a pure function returning its violations; none of them short-circuit

use std::collections::BTreeSet;
use std::sync::LazyLock;

use glow_color::ColorValue;
use glow_tokens::{DesignSystem, SCALE_STEPS, TokenNode, TokenValue};

use crate::report::Violation;
use crate::rules::ValidationRules;

/// Compare every tree of a parity group against the first one.
pub fn variant_parity(group: &str, trees: &[(&str, &TokenNode)]) -> Vec<Violation> {
    let Some(((first_name, first), rest)) = trees.split_first() else {
        return Vec::new();
    };
    let reference = first.dot_paths();

    rest.iter()
        .filter_map(|(name, tree)| {
            let paths = tree.dot_paths();
            if paths == reference {
                return None;
            }
            Some(Violation::ParityMismatch {
                group: group.to_string(),
                left: first_name.to_string(),
                right: name.to_string(),
                only_left: reference.difference(&paths).cloned().collect(),
                only_right: paths.difference(&reference).cloned().collect(),
            })
        })
        .collect()
}

/// Every scale in `set` must have exactly the steps 1..=12, none empty.
pub fn scale_completeness(variant: &str, set: &TokenNode) -> Vec<Violation> {
    let mut violations = Vec::new();
    let Some(scales) = set.as_branch() else {
        return violations;
    };

    for (scale_name, scale) in scales {
        let Some(steps) = scale.as_branch() else {
            violations.push(Violation::NotAScale {
                variant: variant.to_string(),
                scale: scale_name.clone(),
            });
            continue;
        };

        let mut present = BTreeSet::new();
        for (key, value) in steps {
            match key.parse::<u32>() {
                Ok(step) if SCALE_STEPS.contains(&step) => {
                    present.insert(step);
                }
                _ => violations.push(Violation::UnexpectedStep {
                    variant: variant.to_string(),
                    scale: scale_name.clone(),
                    key: key.clone(),
                }),
            }

            let empty = match value {
                TokenNode::Leaf(leaf) => leaf.is_empty(),
                TokenNode::Branch(children) => children.is_empty(),
            };
            if empty {
                violations.push(Violation::EmptyStep {
                    variant: variant.to_string(),
                    scale: scale_name.clone(),
                    step: key.clone(),
                });
            }
        }

        violations.extend(
            SCALE_STEPS
                .filter(|step| !present.contains(step))
                .map(|step| Violation::MissingStep {
                    variant: variant.to_string(),
                    scale: scale_name.clone(),
                    step,
                }),
        );
    }

    violations
}

/// Every non-empty leaf must be `#RRGGBB` (or rgba, unless `hex_only`).
///
/// Empty leaves are left to [`no_empty_values`].
pub fn well_formedness(tree_name: &str, tree: &TokenNode, hex_only: bool) -> Vec<Violation> {
    tree.leaves()
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(path, value)| {
            let valid = match value {
                TokenValue::Text(text) => match ColorValue::classify(text) {
                    ColorValue::Hex => true,
                    ColorValue::Rgba => !hex_only,
                    ColorValue::Invalid => false,
                },
                _ => false,
            };
            (!valid).then(|| Violation::MalformedColor {
                tree: tree_name.to_string(),
                path,
                value: value.to_string(),
                hex_only,
            })
        })
        .collect()
}

/// Null, empty-string and empty-list leaves anywhere in the tree.
pub fn no_empty_values(tree_name: &str, tree: &TokenNode) -> Vec<Violation> {
    tree.leaves()
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(path, _)| Violation::EmptyValue {
            tree: tree_name.to_string(),
            path,
        })
        .collect()
}

/// The first family is the reference: others must cover its top-level keys,
/// and every family must define each required path.
pub fn style_parity(
    styles: &[(&str, &TokenNode)],
    required_paths: &[String],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let reference_keys: Vec<&str> = styles
        .first()
        .and_then(|(_, tree)| tree.as_branch())
        .map(|children| children.keys().map(String::as_str).collect())
        .unwrap_or_default();

    for (index, (family, tree)) in styles.iter().enumerate() {
        if index > 0 {
            for key in &reference_keys {
                if tree.get(key).is_none() {
                    violations.push(Violation::StyleKeyMissing {
                        family: family.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }
        for path in required_paths {
            if tree.get_path(path).is_none() {
                violations.push(Violation::StyleKeyMissing {
                    family: family.to_string(),
                    key: path.clone(),
                });
            }
        }
    }

    violations
}

fn named<'a>(
    trees: &'a glow_tokens::IndexMap<String, TokenNode>,
    names: &[String],
) -> Vec<(&'a str, &'a TokenNode)> {
    if names.is_empty() {
        return trees.iter().map(|(name, tree)| (name.as_str(), tree)).collect();
    }
    names
        .iter()
        .filter_map(|name| trees.get_key_value(name.as_str()))
        .map(|(name, tree)| (name.as_str(), tree))
        .collect()
}

/// Stand-in for a configured variant that has no tree at all.
static ABSENT: LazyLock<TokenNode> = LazyLock::new(TokenNode::empty_branch);

/// Trees of a parity group. A configured name missing from `trees` compares
/// as an empty tree, so every path of its peers is reported.
fn parity_group<'a>(
    trees: &'a glow_tokens::IndexMap<String, TokenNode>,
    names: &'a [String],
) -> Vec<(&'a str, &'a TokenNode)> {
    if names.is_empty() {
        return named(trees, names);
    }
    names
        .iter()
        .map(|name| (name.as_str(), trees.get(name.as_str()).unwrap_or(&*ABSENT)))
        .collect()
}

/// Run every structural check over `system`.
pub fn check_schema(system: &DesignSystem, rules: &ValidationRules) -> Vec<Violation> {
    let mut violations = Vec::new();

    violations.extend(variant_parity("colors", &parity_group(&system.colors, &rules.color_parity)));
    violations.extend(variant_parity("scales", &parity_group(&system.scales, &rules.scale_parity)));

    for (variant, set) in &system.scales {
        violations.extend(scale_completeness(variant, set));
    }

    for (variant, tree) in &system.colors {
        violations.extend(well_formedness(&format!("colors.{variant}"), tree, false));
    }
    for (variant, set) in &system.scales {
        let hex_only = rules.hex_only_scales.iter().any(|name| name == variant);
        violations.extend(well_formedness(&format!("scales.{variant}"), set, hex_only));
    }

    let groups = [
        ("colors", &system.colors),
        ("scales", &system.scales),
        ("styles", &system.styles),
    ];
    for (group, trees) in groups {
        for (name, tree) in trees {
            violations.extend(no_empty_values(&format!("{group}.{name}"), tree));
        }
    }
    violations.extend(no_empty_values("tokens", &system.tokens));

    violations.extend(style_parity(
        &named(&system.styles, &rules.style_parity),
        &rules.required_style_paths,
    ));

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckKind;
    use glow_tokens::tokens;
    use pretty_assertions::assert_eq;

    fn twelve() -> TokenNode {
        (1..=12)
            .map(|step| (step.to_string(), TokenNode::from("#101010")))
            .collect()
    }

    #[test]
    fn test_parity_reports_symmetric_difference() {
        let dark = tokens!({ "background": "#000000", "link": "#111111" });
        let light = tokens!({ "background": "#FFFFFF", "overlay": "#000000" });

        let violations = variant_parity("colors", &[("dark", &dark), ("light", &light)]);
        assert_eq!(
            violations,
            [Violation::ParityMismatch {
                group: "colors".into(),
                left: "dark".into(),
                right: "light".into(),
                only_left: vec!["link".into()],
                only_right: vec!["overlay".into()],
            }]
        );
    }

    #[test]
    fn test_missing_scale_set_breaks_parity() {
        let json = r##"{"colors": {"dark": {"background": "#0F1114"}}}"##;
        let mut system = DesignSystem::from_json(json).unwrap();
        let gray: TokenNode = [("gray", twelve())].into_iter().collect();
        system.scales.insert("dark".into(), gray.clone());

        let parity: Vec<Violation> = check_schema(&system, &ValidationRules::default())
            .into_iter()
            .filter(|v| v.check() == CheckKind::VariantParity)
            .collect();
        assert_eq!(
            parity,
            [Violation::ParityMismatch {
                group: "scales".into(),
                left: "dark".into(),
                right: "light".into(),
                only_left: gray.dot_paths().into_iter().collect(),
                only_right: vec![],
            }]
        );
    }

    #[test]
    fn test_parity_ignores_key_order() {
        let a = tokens!({ "x": "#000000", "y": "#000000" });
        let b = tokens!({ "y": "#FFFFFF", "x": "#FFFFFF" });
        assert!(variant_parity("colors", &[("a", &a), ("b", &b)]).is_empty());
    }

    #[test]
    fn test_scale_completeness_accepts_full_scale() {
        let set: TokenNode = [("teal", twelve())].into_iter().collect();
        assert!(scale_completeness("dark", &set).is_empty());
    }

    #[test]
    fn test_scale_completeness_reports_extra_and_empty() {
        let mut scale = twelve();
        if let TokenNode::Branch(steps) = &mut scale {
            steps.insert("13".into(), TokenNode::from("#000000"));
            steps.insert("3".into(), TokenNode::from(""));
        }
        let set: TokenNode = [("red", scale), ("blue", TokenNode::from("#000000"))]
            .into_iter()
            .collect();

        let violations = scale_completeness("light", &set);
        assert_eq!(
            violations,
            [
                Violation::EmptyStep {
                    variant: "light".into(),
                    scale: "red".into(),
                    step: "3".into(),
                },
                Violation::UnexpectedStep {
                    variant: "light".into(),
                    scale: "red".into(),
                    key: "13".into(),
                },
                Violation::NotAScale {
                    variant: "light".into(),
                    scale: "blue".into(),
                },
            ]
        );
    }

    #[test]
    fn test_well_formedness() {
        let tree = tokens!({
            "ok": "#38BDB8",
            "subtle": "rgba(0, 30, 60, 0.07)",
            "short": "#fff",
            "named": "teal",
            "weight": 4.0,
            "blank": "",
        });

        let paths: Vec<String> = well_formedness("colors.dark", &tree, false)
            .into_iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(
            paths,
            [
                "colors.dark.short: \"#fff\" is not a valid #RRGGBB or rgba() color",
                "colors.dark.named: \"teal\" is not a valid #RRGGBB or rgba() color",
                "colors.dark.weight: 4 is not a valid #RRGGBB or rgba() color",
            ]
        );

        let hex_only = well_formedness("scales.bloom", &tree, true);
        assert_eq!(hex_only.len(), 4);
    }

    #[test]
    fn test_no_empty_values() {
        let tree = tokens!({
            "fonts": { "sans": [], "mono": ["Geist Mono"] },
            "sizes": { "xs": "" },
        });
        let mut tree = tree;
        if let TokenNode::Branch(children) = &mut tree {
            children.insert("gone".into(), TokenNode::Leaf(TokenValue::Null));
        }

        let paths: Vec<String> = no_empty_values("tokens", &tree)
            .into_iter()
            .map(|v| match v {
                Violation::EmptyValue { path, .. } => path,
                other => panic!("unexpected violation {other:?}"),
            })
            .collect();
        assert_eq!(paths, ["fonts.sans", "sizes.xs", "gone"]);
    }

    #[test]
    fn test_style_parity() {
        let arctic = tokens!({
            "radius": { "sm": "4px", "md": "8px", "lg": "16px" },
            "shadows": { "glow": "none" },
        });
        let bloom = tokens!({ "radius": { "sm": "8px", "md": "14px" } });
        let required: Vec<String> = ["radius.sm", "radius.md", "radius.lg"]
            .into_iter()
            .map(String::from)
            .collect();

        let violations = style_parity(&[("arctic", &arctic), ("bloom", &bloom)], &required);
        assert_eq!(
            violations,
            [
                Violation::StyleKeyMissing {
                    family: "bloom".into(),
                    key: "shadows".into(),
                },
                Violation::StyleKeyMissing {
                    family: "bloom".into(),
                    key: "radius.lg".into(),
                },
            ]
        );
    }
}
