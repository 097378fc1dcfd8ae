//! LCh <-> HPLuv, and the composed RGB <-> HPLuv conversions.
//!
//! HPLuv scales chroma by the hue-independent safe radius instead of the
//! per-hue maximum. Equal P values have equal chroma at a given lightness,
//! so colors stay uniform, but only P in [0, 100] is guaranteed to be in
//! gamut and many sRGB colors land above 100.

use crate::gamut::max_safe_chroma_for_l;
use crate::{is_degenerate, lch_to_luv, luv_to_lch, luv_to_xyz, rgb_to_xyz, xyz_to_luv, xyz_to_rgb};
use hsluv_core::Triple;

/// Converts LCh to HPLuv.
pub fn lch_to_hpluv([l, c, h]: Triple) -> Triple {
    if is_degenerate(l) {
        return [h, 0.0, l];
    }
    [h, c / max_safe_chroma_for_l(l) * 100.0, l]
}

/// Converts HPLuv to LCh.
pub fn hpluv_to_lch([h, p, l]: Triple) -> Triple {
    if is_degenerate(l) {
        return [l, 0.0, h];
    }
    [l, max_safe_chroma_for_l(l) / 100.0 * p, h]
}

/// Converts gamma-encoded sRGB to HPLuv.
///
/// # Example
///
/// ```rust
/// use hsluv::rgb_to_hpluv;
///
/// // Saturated red is far outside the pastel circle
/// let [h, p, l] = rgb_to_hpluv([1.0, 0.0, 0.0]);
/// assert!((h - 12.177050630061776).abs() < 1e-9);
/// assert!(p > 100.0);
/// assert!((l - 53.23711559542933).abs() < 1e-9);
/// ```
#[inline]
pub fn rgb_to_hpluv(rgb: Triple) -> Triple {
    lch_to_hpluv(luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb))))
}

/// Converts HPLuv to gamma-encoded sRGB.
#[inline]
pub fn hpluv_to_rgb(hpl: Triple) -> Triple {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(hpluv_to_lch(hpl))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_red() {
        let [h, p, l] = rgb_to_hpluv([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(h, 12.177050630061776, epsilon = 1e-9);
        assert_relative_eq!(p, 426.7467891831252, max_relative = 1e-10);
        assert_abs_diff_eq!(l, 53.23711559542933, epsilon = 1e-9);
    }

    #[test]
    fn test_in_gamut_for_every_hue() {
        for l in [10.0, 50.0, 90.0] {
            for h in (0..360).step_by(20) {
                let rgb = hpluv_to_rgb([h as f64, 100.0, l]);
                assert!(
                    rgb.iter().all(|c| (-1e-9..=1.0 + 1e-9).contains(c)),
                    "h={h} l={l} rgb={rgb:?}"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_lightness() {
        assert_eq!(hpluv_to_rgb([120.0, 80.0, 0.0]), [0.0; 3]);
        let white = hpluv_to_rgb([120.0, 80.0, 100.0]);
        for c in white {
            assert_abs_diff_eq!(c, 1.0, epsilon = 1e-9);
        }
        assert_eq!(lch_to_hpluv([0.0, 0.0, 0.0]), [0.0; 3]);
    }

    #[test]
    fn test_roundtrip() {
        for rgb in [[0.2, 0.4, 0.6], [1.0, 0.0, 0.0], [0.5, 0.5, 0.5], [0.03, 0.9, 0.3]] {
            let back = hpluv_to_rgb(rgb_to_hpluv(rgb));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-10);
            }
        }
    }
}
