// ABOUTME: Pure sRGB color math with no cross-crate dependencies
// ABOUTME: Hex/rgba parsing, CSS channel formatting, relative luminance and WCAG contrast

pub mod contrast;
pub mod convert;
pub mod error;

pub use contrast::{
    ContrastRatios, contrast_ratio, contrast_ratio_rgb, format_significant, relative_luminance,
};
pub use convert::{ColorValue, Rgb, Rgba, hex_to_rgb, parse_rgba, rgb_to_hex, try_parse_rgba};
pub use error::ColorError;
