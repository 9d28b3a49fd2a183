// ABOUTME: Read-only lookups over a stylesheet: theme blocks and custom property declarations
// ABOUTME: Pattern based, not a CSS parser; only `--name: value;` declarations are understood

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static DECLARED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(--[\w-]+)\s*:").expect("declaration name pattern is valid"));

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(--[\w-]+)\s*:\s*([^;]*);").expect("declaration pattern is valid")
});

static VAR_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\((--[\w-]+)\)").expect("var() pattern is valid"));

/// Text from `start_marker` up to the first `}` after it.
///
/// This covers the generated region plus any hand-written tail (such as the
/// sidebar declarations) of the enclosing rule block. Without a closing brace
/// the block runs to the end of the text.
pub fn theme_block<'a>(text: &'a str, start_marker: &str) -> Option<&'a str> {
    let start = text.find(start_marker)?;
    let rest = &text[start..];
    let end = rest.find('}').unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Every custom property name declared in `block`.
pub fn declared_variables(block: &str) -> BTreeSet<String> {
    DECLARED
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Value of the first declaration of `name` in `block`, trimmed.
pub fn declaration_value<'a>(block: &'a str, name: &str) -> Option<&'a str> {
    DECLARATION.captures_iter(block).find_map(|caps| {
        let declared = caps.get(1)?;
        (declared.as_str() == name)
            .then(|| caps.get(2))
            .flatten()
            .map(|value| value.as_str().trim())
    })
}

/// Custom property names referenced through `var(--name)`, in first-seen order.
pub fn var_references(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    VAR_REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSS: &str = r#"
:root {
  color-scheme: light;

    /* Background */
    --color-background: 251 252 253;
    --color-border-subtle: 0 30 60 / 0.07;

    /* Sidebar */
    --sidebar-background: var(--color-surface);
}

.dark {
  color-scheme: dark;
    --color-background: 15 17 20;
}
"#;

    #[test]
    fn test_theme_block_includes_sidebar_tail() {
        let block = theme_block(CSS, "color-scheme: light;").unwrap();
        assert!(block.starts_with("color-scheme: light;"));
        assert!(block.contains("--sidebar-background"));
        assert!(!block.contains(".dark"));
    }

    #[test]
    fn test_theme_block_missing_marker() {
        assert!(theme_block(CSS, "/* Bloom palette */").is_none());
    }

    #[test]
    fn test_declared_variables_ignore_references() {
        let block = theme_block(CSS, "color-scheme: light;").unwrap();
        let vars: Vec<String> = declared_variables(block).into_iter().collect();
        assert_eq!(
            vars,
            ["--color-background", "--color-border-subtle", "--sidebar-background"]
        );
    }

    #[test]
    fn test_declaration_value() {
        let light = theme_block(CSS, "color-scheme: light;").unwrap();
        let dark = theme_block(CSS, "color-scheme: dark;").unwrap();
        assert_eq!(declaration_value(light, "--color-background"), Some("251 252 253"));
        assert_eq!(declaration_value(dark, "--color-background"), Some("15 17 20"));
        assert_eq!(declaration_value(light, "--color-border-subtle"), Some("0 30 60 / 0.07"));
        assert_eq!(declaration_value(dark, "--color-border-subtle"), None);
    }

    #[test]
    fn test_var_references_dedup() {
        let config = "bg: 'rgb(var(--color-surface) / <alpha-value>)', fg: 'var(--color-surface)', x: 'var(--chart-1)'";
        assert_eq!(var_references(config), ["--color-surface", "--chart-1"]);
    }
}
