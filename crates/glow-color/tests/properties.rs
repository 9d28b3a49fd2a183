// ABOUTME: Property tests for color conversion and contrast math
// ABOUTME: Exercises the full channel space rather than hand-picked palettes

use glow_color::{Rgb, contrast_ratio, contrast_ratio_rgb, hex_to_rgb, rgb_to_hex};
use proptest::prelude::*;

fn any_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn hex_round_trips(color in any_rgb()) {
        let hex = rgb_to_hex(color);
        prop_assert_eq!(hex_to_rgb(&hex).unwrap(), color);
        prop_assert_eq!(hex_to_rgb(&hex.to_lowercase()).unwrap(), color);
    }

    #[test]
    fn contrast_is_symmetric(a in any_rgb(), b in any_rgb()) {
        let ab = contrast_ratio_rgb(a, b);
        let ba = contrast_ratio_rgb(b, a);
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn contrast_is_bounded(a in any_rgb(), b in any_rgb()) {
        let ratio = contrast_ratio_rgb(a, b);
        prop_assert!(ratio >= 1.0 - 1e-12);
        prop_assert!(ratio <= 21.0 + 1e-9);
    }

    #[test]
    fn contrast_with_self_is_one(a in any_rgb()) {
        prop_assert!((contrast_ratio_rgb(a, a) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn near_white_on_near_black_meets_aa() {
    let ratio = contrast_ratio("#F2F2F2", "#050505").unwrap();
    assert!(ratio >= 4.5, "got {ratio}");
}

#[test]
fn white_on_black_is_21_within_tolerance() {
    let ratio = contrast_ratio("#fff", "#000").unwrap();
    assert!((ratio - 21.0).abs() < 1e-6);
}
