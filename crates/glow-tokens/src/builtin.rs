// ABOUTME: The built-in Arctic Glow and Bloom token set
// ABOUTME: Semantic colors per variant, 12-step scales, style families and base tokens

use indexmap::IndexMap;

use crate::design_system::DesignSystem;
use crate::node::TokenNode;
use crate::tokens;

/// Step keys `"1"..="12"` mapped onto the given ramp.
fn scale(steps: [&str; 12]) -> TokenNode {
    steps
        .iter()
        .enumerate()
        .map(|(i, value)| ((i + 1).to_string(), TokenNode::from(*value)))
        .collect()
}

/// A translucent ramp sharing one base channel triplet.
fn alpha_scale(channels: &str, alphas: [&str; 12]) -> TokenNode {
    alphas
        .iter()
        .enumerate()
        .map(|(i, alpha)| {
            (
                (i + 1).to_string(),
                TokenNode::from(format!("rgba({channels}, {alpha})")),
            )
        })
        .collect()
}

#[rustfmt::skip]
fn dark_scales() -> TokenNode {
    [
        ("gray", scale([
            "#0F1114", "#151719", "#1C1F23", "#232730", "#2B2F37", "#33383F",
            "#3E4550", "#505A68", "#6B7A8A", "#8494A7", "#A0AEBB", "#E1E7ED",
        ])),
        ("grayAlpha", alpha_scale("200, 220, 240", [
            "0.02", "0.04", "0.06", "0.09", "0.12", "0.16",
            "0.22", "0.32", "0.45", "0.58", "0.72", "0.93",
        ])),
        ("teal", scale([
            "#0B1615", "#0F1F1E", "#122B29", "#163834", "#1B4542", "#21554F",
            "#2A6D66", "#35917F", "#38BDB8", "#4ECEC8", "#7EDCD6", "#C2F0ED",
        ])),
        ("red", scale([
            "#191113", "#201316", "#3B1219", "#50141D", "#661823", "#7E1F2D",
            "#9E2B3A", "#C73A4B", "#E5484D", "#EB5E5E", "#F39090", "#FAD1D4",
        ])),
        ("green", scale([
            "#0D1512", "#111C17", "#13291F", "#163727", "#1A4530", "#1F563A",
            "#266E48", "#2F8E5A", "#3DD68C", "#5CE4A0", "#8CEDB8", "#C8F5DD",
        ])),
        ("amber", scale([
            "#16120B", "#1D1710", "#2C2011", "#3D2B10", "#4F370F", "#63440E",
            "#7E5711", "#A87318", "#F5C742", "#FFDB5C", "#FFE588", "#FFF3CC",
        ])),
        ("blue", scale([
            "#0F1520", "#131B2E", "#15243B", "#192E4C", "#1D3A5E", "#224973",
            "#2A5E92", "#347AB8", "#3E96F4", "#5EAAF7", "#8EC3FA", "#CEE1FC",
        ])),
        ("violet", scale([
            "#14111F", "#1B1528", "#241C38", "#2E224A", "#38295E", "#443375",
            "#553F94", "#6B54B5", "#8B5CF6", "#9E77F8", "#BAA0FA", "#E2D5FD",
        ])),
    ]
    .into_iter()
    .collect()
}

#[rustfmt::skip]
fn light_scales() -> TokenNode {
    [
        ("gray", scale([
            "#FBFCFD", "#F5F7F9", "#EDF0F3", "#E4E8EC", "#D9DFE5", "#CDD4DC",
            "#B5BECA", "#97A3B2", "#6B7A8A", "#566878", "#3E4F60", "#1A2230",
        ])),
        ("grayAlpha", alpha_scale("0, 30, 60", [
            "0.02", "0.04", "0.07", "0.11", "0.15", "0.20",
            "0.29", "0.41", "0.58", "0.66", "0.76", "0.90",
        ])),
        ("teal", scale([
            "#F0FDFC", "#E3FAF8", "#C8F3EF", "#A8E9E2", "#85DBD4", "#5DC9C0",
            "#35B2A8", "#22958D", "#1A8F88", "#147A73", "#0F6660", "#08403D",
        ])),
        ("red", scale([
            "#FFF5F5", "#FFE8E8", "#FECDD4", "#FDAFB7", "#FA8F9A", "#F16C78",
            "#E34D5B", "#CE3644", "#CE2C3B", "#B82535", "#9C1E2E", "#5C111A",
        ])),
        ("green", scale([
            "#F2FDF6", "#E3FAEC", "#C2F2D6", "#9DE8BC", "#76D9A0", "#4EC785",
            "#30B26B", "#1D9B55", "#1B9450", "#147C42", "#0F6636", "#08401F",
        ])),
        ("amber", scale([
            "#FEFCF0", "#FDF8E0", "#FCEFC0", "#FAE39A", "#F5D46E", "#E8C044",
            "#D4A825", "#B88E15", "#D09E10", "#B08510", "#866510", "#4A380A",
        ])),
        ("blue", scale([
            "#F3F8FE", "#E6F0FD", "#C8DFFB", "#A6CBF7", "#80B4F3", "#5999EC",
            "#377FE2", "#2068D0", "#2E78E5", "#2362C7", "#1B4FA5", "#0F3060",
        ])),
        ("violet", scale([
            "#F9F6FE", "#F1EBFD", "#E3D4FC", "#D2B9FA", "#BF9CF7", "#A87CF2",
            "#9060EA", "#7A4ADD", "#7C3AED", "#6A2ED2", "#5624B3", "#351468",
        ])),
    ]
    .into_iter()
    .collect()
}

#[rustfmt::skip]
fn bloom_scales() -> TokenNode {
    [
        ("sand", scale([
            "#FEFDFB", "#FBF9F6", "#F5F1EC", "#EDE8E1", "#E4DED5", "#D9D1C7",
            "#C4B9AC", "#A89B8C", "#887968", "#72624F", "#574938", "#2D2318",
        ])),
        ("coral", scale([
            "#FFFBFA", "#FFF1EE", "#FFE0D9", "#FFCBBF", "#FFB3A2", "#F99882",
            "#ED7B60", "#DC6347", "#E8573A", "#D04A2F", "#A83A25", "#5C1E12",
        ])),
        ("lavender", scale([
            "#FBF8FF", "#F5EFFE", "#EAE0FD", "#DCCEFB", "#CCB8F9", "#B99DF5",
            "#A47DEF", "#9060EA", "#8B5CF6", "#7642E0", "#6338C4", "#3B1F75",
        ])),
        ("mint", scale([
            "#F2FDF9", "#E0FAF0", "#C2F2DF", "#9DE8CA", "#76D9B2", "#4EC79A",
            "#30B27E", "#1D9B63", "#3DD6A0", "#2FBA88", "#1A8A64", "#0A4F39",
        ])),
        ("peach", scale([
            "#FFFCF5", "#FFF8E8", "#FFEFC8", "#FFE3A0", "#FFD574", "#F5C34A",
            "#E0AD2E", "#C49518", "#F5A623", "#D98E14", "#A56C0F", "#5C3C08",
        ])),
        ("rose", scale([
            "#FFF8F9", "#FFEEF1", "#FFDCE2", "#FFC5CE", "#FFABB8", "#F98E9E",
            "#ED6F82", "#DC5568", "#E8566D", "#D0445A", "#A83347", "#5C1A28",
        ])),
        ("sky", scale([
            "#F5FAFF", "#EAF3FE", "#D2E6FD", "#B5D6FB", "#94C3F8", "#70AEF4",
            "#5099EE", "#3585E5", "#5AB4F5", "#3E9AE5", "#2874C0", "#144170",
        ])),
    ]
    .into_iter()
    .collect()
}

#[rustfmt::skip]
fn dark_colors() -> TokenNode {
    tokens!({
        "background": "#0F1114",
        "surface": { "DEFAULT": "#151719", "hover": "#1C1F23", "active": "#232730", "raised": "#2B2F37" },
        "border": {
            "DEFAULT": "#33383F",
            "hover": "#3E4550",
            "subtle": "rgba(200, 220, 240, 0.06)",
            "subtle-hover": "rgba(200, 220, 240, 0.12)",
        },
        "primary": { "DEFAULT": "#E1E7ED", "foreground": "#0F1114" },
        "secondary": { "DEFAULT": "#232730", "foreground": "#E1E7ED" },
        "accent": { "DEFAULT": "#38BDB8", "foreground": "#0F1114" },
        "destructive": { "DEFAULT": "#E5484D", "foreground": "#FFFFFF" },
        "success": { "DEFAULT": "#3DD68C", "foreground": "#0D1512" },
        "warning": { "DEFAULT": "#F5C742", "foreground": "#16120B" },
        "info": { "DEFAULT": "#3E96F4", "foreground": "#0F1520" },
        "muted": { "DEFAULT": "#232730", "foreground": "#A0AEBB" },
        "overlay": "#000000",
        "text": { "primary": "#E1E7ED", "secondary": "#A0AEBB", "tertiary": "#6B7A8A" },
        "focusRing": "#38BDB8",
        "link": "#4ECEC8",
        "input": "#232730",
        "disabled": "#3E4550",
        "disabledForeground": "#6B7A8A",
        "chart": { "1": "#38BDB8", "2": "#3E96F4", "3": "#3DD68C", "4": "#F5C742", "5": "#8B5CF6" },
    })
}

#[rustfmt::skip]
fn light_colors() -> TokenNode {
    tokens!({
        "background": "#FBFCFD",
        "surface": { "DEFAULT": "#F5F7F9", "hover": "#EDF0F3", "active": "#E4E8EC", "raised": "#F5F7F9" },
        "border": {
            "DEFAULT": "#CDD4DC",
            "hover": "#B5BECA",
            "subtle": "rgba(0, 30, 60, 0.07)",
            "subtle-hover": "rgba(0, 30, 60, 0.15)",
        },
        "primary": { "DEFAULT": "#1A2230", "foreground": "#FBFCFD" },
        "secondary": { "DEFAULT": "#EDF0F3", "foreground": "#1A2230" },
        "accent": { "DEFAULT": "#1A8F88", "foreground": "#FFFFFF" },
        "destructive": { "DEFAULT": "#CE2C3B", "foreground": "#FFFFFF" },
        "success": { "DEFAULT": "#1B9450", "foreground": "#FFFFFF" },
        "warning": { "DEFAULT": "#D09E10", "foreground": "#16120B" },
        "info": { "DEFAULT": "#2E78E5", "foreground": "#FFFFFF" },
        "muted": { "DEFAULT": "#EDF0F3", "foreground": "#3E4F60" },
        "overlay": "#000000",
        "text": { "primary": "#1A2230", "secondary": "#3E4F60", "tertiary": "#6B7A8A" },
        "focusRing": "#1A8F88",
        "link": "#0F6660",
        "input": "#EDF0F3",
        "disabled": "#CDD4DC",
        "disabledForeground": "#97A3B2",
        "chart": { "1": "#1A8F88", "2": "#2E78E5", "3": "#1B9450", "4": "#D09E10", "5": "#7C3AED" },
    })
}

#[rustfmt::skip]
fn bloom_colors() -> TokenNode {
    tokens!({
        "background": "#FEFDFB",
        "surface": { "DEFAULT": "#FBF9F6", "hover": "#F5F1EC", "active": "#EDE8E1", "raised": "#FBF9F6" },
        "border": {
            "DEFAULT": "#D9D1C7",
            "hover": "#C4B9AC",
            "subtle": "rgba(45, 35, 24, 0.07)",
            "subtle-hover": "rgba(45, 35, 24, 0.15)",
        },
        "primary": { "DEFAULT": "#2D2318", "foreground": "#FEFDFB" },
        "secondary": { "DEFAULT": "#F5F1EC", "foreground": "#2D2318" },
        "accent": { "DEFAULT": "#E8573A", "foreground": "#FFFFFF" },
        "destructive": { "DEFAULT": "#E8566D", "foreground": "#FFFFFF" },
        "success": { "DEFAULT": "#3DD6A0", "foreground": "#0A4F39" },
        "warning": { "DEFAULT": "#F5A623", "foreground": "#5C3C08" },
        "info": { "DEFAULT": "#5AB4F5", "foreground": "#144170" },
        "muted": { "DEFAULT": "#F5F1EC", "foreground": "#574938" },
        "overlay": "#2D2318",
        "text": { "primary": "#2D2318", "secondary": "#574938", "tertiary": "#887968" },
        "focusRing": "#8B5CF6",
        "link": "#6338C4",
        "input": "#F5F1EC",
        "disabled": "#D9D1C7",
        "disabledForeground": "#A89B8C",
        "chart": { "1": "#E8573A", "2": "#8B5CF6", "3": "#3DD6A0", "4": "#F5A623", "5": "#5AB4F5" },
    })
}

fn arctic_style() -> TokenNode {
    tokens!({
        "radius": { "sm": "4px", "md": "8px", "lg": "16px" },
        "shadows": {
            "glow": "0 0 20px -5px rgba(255, 255, 255, 0.1)",
            "glow-accent": "0 0 20px -5px rgba(56, 189, 184, 0.15)",
        },
    })
}

fn bloom_style() -> TokenNode {
    tokens!({
        "radius": { "sm": "8px", "md": "14px", "lg": "24px" },
        "shadows": {
            "glow": "0 0 20px -5px rgba(232, 87, 58, 0.12)",
            "glow-accent": "0 0 20px -5px rgba(139, 92, 246, 0.15)",
            "soft": "0 2px 12px -2px rgba(45, 35, 24, 0.08)",
            "lifted": "0 8px 30px -8px rgba(45, 35, 24, 0.12)",
        },
    })
}

fn base_tokens() -> TokenNode {
    tokens!({
        "typography": {
            "fontFamily": {
                "sans": ["var(--font-satoshi)", "Satoshi", "sans-serif"],
                "pixel": ["GeistPixel", "monospace"],
                "pixel-grid": ["GeistPixelGrid", "monospace"],
                "pixel-line": ["GeistPixelLine", "monospace"],
            },
            "sizes": {
                "xs": "12px",
                "sm": "14px",
                "base": "16px",
                "lg": "20px",
                "xl": "24px",
                "2xl": "32px",
                "3xl": "48px",
                "4xl": "64px",
            },
        },
        "radius": { "sm": "4px", "md": "8px", "lg": "16px", "full": "9999px" },
        "spacing": { "base": 4.0, "4.5": "1.125rem" },
        "shadows": {
            "glow": "0 0 20px -5px rgba(255, 255, 255, 0.1)",
            "glow-accent": "0 0 20px -5px rgba(56, 189, 184, 0.15)",
        },
    })
}

pub(crate) fn design_system() -> DesignSystem {
    let colors: IndexMap<String, TokenNode> = [
        ("dark", dark_colors()),
        ("light", light_colors()),
        ("bloom", bloom_colors()),
    ]
    .into_iter()
    .map(|(name, tree)| (name.to_string(), tree))
    .collect();

    let scales: IndexMap<String, TokenNode> = [
        ("dark", dark_scales()),
        ("light", light_scales()),
        ("bloom", bloom_scales()),
    ]
    .into_iter()
    .map(|(name, tree)| (name.to_string(), tree))
    .collect();

    let styles: IndexMap<String, TokenNode> = [("arctic", arctic_style()), ("bloom", bloom_style())]
        .into_iter()
        .map(|(name, tree)| (name.to_string(), tree))
        .collect();

    DesignSystem {
        colors,
        scales,
        styles,
        tokens: base_tokens(),
    }
}
