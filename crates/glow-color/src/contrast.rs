// ABOUTME: WCAG 2.x relative luminance and contrast ratio
// ABOUTME: Thresholds for the AA/AAA conformance levels live here too

use crate::convert::{Rgb, hex_to_rgb};
use crate::error::Result;

/// WCAG contrast thresholds.
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
}

fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Contrast ratio in `[1, 21]`, symmetric in its arguments.
pub fn contrast_ratio_rgb(fg: Rgb, bg: Rgb) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let lighter = l1.max(l2);
    let darker = l1.min(l2);

    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors.
pub fn contrast_ratio(fg_hex: &str, bg_hex: &str) -> Result<f64> {
    Ok(contrast_ratio_rgb(hex_to_rgb(fg_hex)?, hex_to_rgb(bg_hex)?))
}

/// Format `value` with `digits` significant digits (`4.0712` at 4 → `"4.071"`).
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let decimals = |v: f64| (digits as i64 - 1 - v.abs().log10().floor() as i64).max(0) as usize;

    // rounding can carry into the next power of ten (9.99996 → 10.000)
    let first = decimals(value);
    let rounded: f64 = format!("{value:.first$}").parse().unwrap_or(value);
    let places = decimals(rounded);
    format!("{rounded:.places$}")
}
