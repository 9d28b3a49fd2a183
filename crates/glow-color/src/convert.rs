// ABOUTME: Conversions between hex strings, RGB triplets and rgba strings
// ABOUTME: Produces the space-separated channel form the generated stylesheet uses

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ColorError, Result};

static RGBA_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+),\s*([\d.]+)\)").expect("rgba pattern is valid")
});

static RGBA_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgba?\(\s*\d+").expect("rgba prefix pattern is valid"));

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `"R G B"`, the form that lets consumers apply an alpha modifier.
    pub fn to_css_channels(self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A translucent color parsed from an `rgba(...)` string.
///
/// The alpha keeps its source spelling (`0.20` stays `0.20`) so that
/// regenerated declarations are byte-stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgba {
    pub rgb: Rgb,
    alpha: String,
}

impl Rgba {
    /// Emitted whenever an rgba leaf cannot be parsed.
    pub const FALLBACK_ALPHA: &'static str = "0.05";

    pub fn new(rgb: Rgb, alpha: impl Into<String>) -> Self {
        Self {
            rgb,
            alpha: alpha.into(),
        }
    }

    /// The documented fallback: black at 5% opacity.
    pub fn fallback() -> Self {
        Self::new(Rgb::BLACK, Self::FALLBACK_ALPHA)
    }

    pub fn alpha_text(&self) -> &str {
        &self.alpha
    }

    /// Numeric alpha, `None` when the captured text is not a number (e.g. `1.2.3`).
    pub fn alpha(&self) -> Option<f64> {
        self.alpha.parse().ok()
    }

    /// `"R G B / A"`.
    pub fn to_css_channels(&self) -> String {
        format!("{} / {}", self.rgb.to_css_channels(), self.alpha)
    }
}

/// What kind of color a token leaf holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    /// Exactly `#RRGGBB`.
    Hex,
    /// Starts like `rgb(` / `rgba(` followed by a number.
    Rgba,
    Invalid,
}

impl ColorValue {
    pub fn classify(value: &str) -> Self {
        if is_six_digit_hex(value) {
            Self::Hex
        } else if RGBA_PREFIX.is_match(value) {
            Self::Rgba
        } else {
            Self::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Strict `#RRGGBB` check (leading `#` required, no shorthand).
pub fn is_six_digit_hex(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` into channels.
///
/// Shorthand is expanded by digit duplication (`#abc` → `#aabbcc`).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(hex));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(ColorError::invalid_hex(hex)),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| ColorError::invalid_hex(hex))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Uppercase `#RRGGBB`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Extract `r, g, b, a` from an `rgba(...)`-shaped string.
///
/// Returns `None` when the four groups are not present or a channel exceeds 255.
pub fn try_parse_rgba(value: &str) -> Option<Rgba> {
    let caps = RGBA_GROUPS.captures(value)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    let rgb = Rgb::new(channel(1)?, channel(2)?, channel(3)?);
    Some(Rgba::new(rgb, caps.get(4)?.as_str()))
}

/// Best-effort rgba parse; falls back to [`Rgba::fallback`] instead of failing.
pub fn parse_rgba(value: &str) -> Rgba {
    try_parse_rgba(value).unwrap_or_else(Rgba::fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_full() {
        assert_eq!(hex_to_rgb("#0F1114").unwrap(), Rgb::new(15, 17, 20));
        assert_eq!(hex_to_rgb("e1e7ed").unwrap(), Rgb::new(225, 231, 237));
    }

    #[test]
    fn test_hex_to_rgb_shorthand() {
        assert_eq!(hex_to_rgb("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(hex_to_rgb("a1b").unwrap(), Rgb::new(0xaa, 0x11, 0xbb));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        for bad in ["", "#", "#12", "#1234", "#12345g", "#1234567", "rgba(0, 0, 0, 1)"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorError::invalid_hex(bad)),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_uppercases() {
        assert_eq!(rgb_to_hex(Rgb::new(56, 189, 184)), "#38BDB8");
    }

    #[test]
    fn test_css_channels() {
        assert_eq!(Rgb::new(15, 17, 20).to_css_channels(), "15 17 20");
        let rgba = parse_rgba("rgba(200, 220, 240, 0.06)");
        assert_eq!(rgba.to_css_channels(), "200 220 240 / 0.06");
    }

    #[test]
    fn test_parse_rgba_keeps_alpha_spelling() {
        let rgba = parse_rgba("rgba(0, 30, 60, 0.20)");
        assert_eq!(rgba.rgb, Rgb::new(0, 30, 60));
        assert_eq!(rgba.alpha_text(), "0.20");
        assert_eq!(rgba.alpha(), Some(0.2));
    }

    #[test]
    fn test_parse_rgba_accepts_rgb_prefix() {
        let rgba = parse_rgba("rgb(1, 2, 3, 1)");
        assert_eq!(rgba.to_css_channels(), "1 2 3 / 1");
    }

    #[test]
    fn test_parse_rgba_fallback() {
        assert_eq!(parse_rgba("rgba(oops)"), Rgba::fallback());
        assert_eq!(parse_rgba("rgba(10, 20, 30)"), Rgba::fallback());
        assert_eq!(parse_rgba("rgba(300, 0, 0, 0.5)"), Rgba::fallback());
        assert_eq!(Rgba::fallback().to_css_channels(), "0 0 0 / 0.05");
        assert!(try_parse_rgba("transparent").is_none());
    }

    #[test]
    fn test_classify() {
        assert_eq!(ColorValue::classify("#38BDB8"), ColorValue::Hex);
        assert_eq!(ColorValue::classify("rgba(0, 30, 60, 0.07)"), ColorValue::Rgba);
        assert_eq!(ColorValue::classify("rgb( 12, 1, 1)"), ColorValue::Rgba);
        assert_eq!(ColorValue::classify("#fff"), ColorValue::Invalid);
        assert_eq!(ColorValue::classify("38BDB8"), ColorValue::Invalid);
        assert_eq!(ColorValue::classify("teal"), ColorValue::Invalid);
        assert_eq!(ColorValue::classify(""), ColorValue::Invalid);
    }
}
