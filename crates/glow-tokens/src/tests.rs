// ABOUTME: Consistency tests for the built-in token set
// ABOUTME: Variant isomorphism, scale shape and JSON loading from disk

#[cfg(test)]
mod tests {
    use crate::{DesignSystem, SCALE_STEPS, TokenNode, TokenValue, family, variant};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_semantic_variants_are_isomorphic() {
        let system = DesignSystem::builtin();
        let dark = system.variant(variant::DARK).unwrap().dot_paths();

        for name in [variant::LIGHT, variant::BLOOM] {
            let other = system.variant(name).unwrap().dot_paths();
            assert_eq!(dark, other, "{name} should mirror dark");
        }
    }

    #[test]
    fn test_arctic_scale_sets_are_isomorphic() {
        let system = DesignSystem::builtin();
        let dark = system.scale_set(variant::DARK).unwrap().dot_paths();
        let light = system.scale_set(variant::LIGHT).unwrap().dot_paths();
        assert_eq!(dark, light);
    }

    #[test]
    fn test_every_scale_has_twelve_steps() {
        let expected: Vec<String> = SCALE_STEPS.map(|step| step.to_string()).collect();

        for (set_name, set) in &DesignSystem::builtin().scales {
            for (scale_name, scale) in set.as_branch().unwrap() {
                let keys: Vec<String> = scale.as_branch().unwrap().keys().cloned().collect();
                assert_eq!(keys, expected, "{set_name}.{scale_name}");
            }
        }
    }

    #[test]
    fn test_bloom_scales_are_hex_only() {
        let bloom = DesignSystem::builtin().scale_set(variant::BLOOM).unwrap();
        for (path, value) in bloom.leaves() {
            let text = value.as_str().unwrap();
            assert!(text.starts_with('#') && text.len() == 7, "{path} = {text}");
        }
    }

    #[test]
    fn test_gray_alpha_steps_are_rgba() {
        let dark = DesignSystem::builtin().scale_set(variant::DARK).unwrap();
        assert_eq!(
            dark.get_path("grayAlpha.6").and_then(TokenNode::as_str),
            Some("rgba(200, 220, 240, 0.16)")
        );
    }

    #[test]
    fn test_chart_group_has_five_entries() {
        for name in DesignSystem::builtin().variant_names() {
            let chart = DesignSystem::builtin().variant(name).unwrap().get("chart").unwrap();
            let keys: Vec<&str> = chart.as_branch().unwrap().keys().map(String::as_str).collect();
            assert_eq!(keys, ["1", "2", "3", "4", "5"], "{name}");
        }
    }

    #[test]
    fn test_style_families_define_radius() {
        let system = DesignSystem::builtin();
        for name in [family::ARCTIC, family::BLOOM] {
            let style = system.style(name).unwrap();
            for size in ["sm", "md", "lg"] {
                let path = format!("radius.{size}");
                assert!(style.get_path(&path).is_some(), "{name}.{path}");
            }
        }
    }

    #[test]
    fn test_font_stacks_are_lists() {
        let sans = DesignSystem::builtin()
            .tokens
            .get_path("typography.fontFamily.sans")
            .and_then(TokenNode::as_leaf);
        assert_eq!(
            sans,
            Some(&TokenValue::List(vec![
                "var(--font-satoshi)".to_string(),
                "Satoshi".to_string(),
                "sans-serif".to_string(),
            ]))
        );
    }

    #[test]
    fn test_builtin_survives_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        let builtin = DesignSystem::builtin();
        std::fs::write(&path, serde_json::to_string_pretty(builtin).unwrap()).unwrap();

        let loaded = DesignSystem::load(&path).unwrap();
        assert_eq!(&loaded, builtin);

        let order: Vec<&str> = loaded.variant_names().collect();
        assert_eq!(order, ["dark", "light", "bloom"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DesignSystem::load(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
