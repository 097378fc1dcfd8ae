//! Property tests over a dense RGB cube and an HSL grid.

use crate::rgb_cube;
use approx::assert_abs_diff_eq;
use hsluv::prelude::*;
use hsluv::{max_chroma_for_lh, max_safe_chroma_for_l};

const ROUND_TRIP: f64 = 1e-10;

#[test]
fn test_hsluv_round_trip_cube() {
    for rgb in rgb_cube(17) {
        let back = hsluv_to_rgb(rgb_to_hsluv(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = ROUND_TRIP);
        }
    }
}

#[test]
fn test_hpluv_round_trip_cube() {
    for rgb in rgb_cube(17) {
        let back = hpluv_to_rgb(rgb_to_hpluv(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = ROUND_TRIP);
        }
    }
}

#[test]
fn test_cube_coordinates_in_range() {
    for rgb in rgb_cube(17) {
        let [h, s, l] = rgb_to_hsluv(rgb);
        assert!((0.0..360.0).contains(&h), "{rgb:?} -> h {h}");
        assert!((0.0..=100.0 + 1e-9).contains(&s), "{rgb:?} -> s {s}");
        assert!((0.0..=100.0 + 1e-9).contains(&l), "{rgb:?} -> l {l}");
    }
}

#[test]
fn test_hsluv_grid_stays_in_gamut() {
    for hi in 0..36 {
        for si in 0..=10 {
            for li in 0..=20 {
                let hsl = [hi as f64 * 10.0, si as f64 * 10.0, li as f64 * 5.0];
                let rgb = hsluv_to_rgb(hsl);
                for c in rgb {
                    assert!(c > -1e-9 && c < 1.0 + 1e-9, "{hsl:?} -> {rgb:?}");
                }
            }
        }
    }
}

#[test]
fn test_hpluv_grid_stays_in_gamut() {
    for hi in 0..36 {
        for si in 0..=10 {
            for li in 0..=20 {
                let hpl = [hi as f64 * 10.0, si as f64 * 10.0, li as f64 * 5.0];
                let rgb = hpluv_to_rgb(hpl);
                for c in rgb {
                    assert!(c > -1e-9 && c < 1.0 + 1e-9, "{hpl:?} -> {rgb:?}");
                }
            }
        }
    }
}

#[test]
fn test_degenerate_lightness() {
    for h in [0.0, 90.0, 200.0, 359.0] {
        for s in [0.0, 50.0, 100.0] {
            let black = hsluv_to_rgb([h, s, 0.0]);
            let white = hsluv_to_rgb([h, s, 100.0]);
            for i in 0..3 {
                assert_abs_diff_eq!(black[i], 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(white[i], 1.0, epsilon = 1e-9);
            }
            assert_eq!(max_chroma_for_lh(0.0, h), 0.0);
            assert_eq!(max_chroma_for_lh(100.0, h), 0.0);
        }
    }
    assert_eq!(max_safe_chroma_for_l(0.0), 0.0);
    assert_eq!(max_safe_chroma_for_l(100.0), 0.0);
}

#[test]
fn test_grays_are_achromatic() {
    for i in 0..=32 {
        let v = i as f64 / 32.0;
        for out in [rgb_to_hsluv([v, v, v]), rgb_to_hpluv([v, v, v])] {
            assert!(out.iter().all(|c| c.is_finite()), "{v} -> {out:?}");
            assert_eq!(out[0], 0.0);
            assert!(out[1] < 1e-8, "{v} -> {out:?}");
        }
    }
}

#[test]
fn test_conversions_agree_with_functions() {
    let rgb = [0.25, 0.5, 0.75];
    assert_eq!(Conversion::RgbToHsluv.apply(rgb), rgb_to_hsluv(rgb));
    assert_eq!(Conversion::RgbToHpluv.apply(rgb), rgb_to_hpluv(rgb));

    let mut pixels = rgb_cube(5);
    let expected: Vec<_> = pixels.iter().map(|&p| rgb_to_hsluv(p)).collect();
    convert_slice(&mut pixels, Conversion::RgbToHsluv);
    assert_eq!(pixels, expected);
}
