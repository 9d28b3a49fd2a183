// ABOUTME: Renders one variant's semantic color tree into custom property declarations
// ABOUTME: Handles variable naming, group comments and color channel formatting

use glow_color::{Rgb, Rgba, hex_to_rgb, try_parse_rgba};
use glow_logging::warn;
use glow_tokens::{TokenNode, TokenValue};

/// Top-level group whose leaves become `--chart-<key>` instead of `--color-<path>`.
pub const CHART_GROUP: &str = "chart";

/// Path segment omitted from variable names (`surface.DEFAULT` → `--color-surface`).
pub const DEFAULT_SEGMENT: &str = "DEFAULT";

const INDENT: &str = "    ";

/// `focusRing` → `focus-ring`; existing hyphens are kept.
pub fn kebab_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    for (i, ch) in segment.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Custom property name for a leaf path, e.g. `["border", "subtle-hover"]` →
/// `--color-border-subtle-hover`.
pub fn variable_name(segments: &[&str]) -> String {
    let (namespace, rest) = match segments.split_first() {
        Some((&CHART_GROUP, rest)) => ("--chart", rest),
        _ => ("--color", segments),
    };

    let mut name = namespace.to_string();
    for segment in rest.iter().filter(|s| **s != DEFAULT_SEGMENT) {
        name.push('-');
        name.push_str(&kebab_case(segment));
    }
    name
}

/// `focusRing` → `Focus Ring`, `border` → `Border`.
fn group_title(key: &str) -> String {
    kebab_case(key)
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Channel form of a color leaf; malformed values fall back instead of failing.
pub fn css_value(value: &str) -> String {
    if value.starts_with("rgb") {
        let rgba = try_parse_rgba(value).unwrap_or_else(|| {
            warn!(value = %value, "Malformed rgba leaf, using fallback");
            Rgba::fallback()
        });
        return rgba.to_css_channels();
    }
    match hex_to_rgb(value) {
        Ok(rgb) => rgb.to_css_channels(),
        Err(e) => {
            warn!(value = %value, error = %e, "Malformed color leaf, using fallback");
            Rgb::BLACK.to_css_channels()
        }
    }
}

/// Render the declaration block for one variant.
///
/// Every top-level key opens a `/* Title */` group; groups are separated by
/// one empty line. Lines carry the stylesheet's four-space indent.
pub fn render_block(tree: &TokenNode) -> String {
    let mut sections: Vec<(String, Vec<String>)> = Vec::new();

    tree.walk_leaves(|leaf| {
        let Some(group) = leaf.segments.first() else {
            return;
        };
        let declaration = match leaf.value {
            TokenValue::Text(text) => {
                format!("{INDENT}{}: {};", variable_name(leaf.segments), css_value(text))
            }
            other => {
                warn!(path = %leaf.path(), kind = other.kind(), "Skipping non-string color leaf");
                return;
            }
        };

        match sections.last_mut() {
            Some((key, lines)) if key.as_str() == *group => lines.push(declaration),
            _ => sections.push((group.to_string(), vec![declaration])),
        }
    });

    sections
        .iter()
        .map(|(key, lines)| format!("{INDENT}/* {} */\n{}", group_title(key), lines.join("\n")))
        .collect::<Vec<_>>()
        .join("\n\n")
}
