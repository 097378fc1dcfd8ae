//! LCh <-> HSLuv, and the composed RGB <-> HSLuv conversions.
//!
//! HSLuv keeps LCh's hue and lightness and replaces chroma with saturation:
//! the chroma as a percentage of the largest in-gamut chroma at that
//! lightness and hue. Every (h, s, l) with s and l in [0, 100] is a valid
//! sRGB color.

use crate::gamut::max_chroma_for_lh;
use crate::{is_degenerate, lch_to_luv, luv_to_lch, luv_to_xyz, rgb_to_xyz, xyz_to_luv, xyz_to_rgb};
use hsluv_core::Triple;

/// Converts LCh to HSLuv.
///
/// Saturation is 0 at black and white, where the gamut has no extent.
pub fn lch_to_hsluv([l, c, h]: Triple) -> Triple {
    if is_degenerate(l) {
        return [h, 0.0, l];
    }
    [h, c / max_chroma_for_lh(l, h) * 100.0, l]
}

/// Converts HSLuv to LCh.
///
/// Saturation outside [0, 100] is not clamped and produces out-of-gamut
/// chroma.
pub fn hsluv_to_lch([h, s, l]: Triple) -> Triple {
    if is_degenerate(l) {
        return [l, 0.0, h];
    }
    [l, max_chroma_for_lh(l, h) / 100.0 * s, h]
}

/// Converts gamma-encoded sRGB to HSLuv.
///
/// # Example
///
/// ```rust
/// use hsluv::rgb_to_hsluv;
///
/// let [h, s, l] = rgb_to_hsluv([0.0, 0.0, 1.0]);
/// assert!((h - 265.8743202181779).abs() < 1e-9);
/// assert!((s - 100.0).abs() < 1e-9);
/// assert!((l - 32.30087290398002).abs() < 1e-9);
/// ```
#[inline]
pub fn rgb_to_hsluv(rgb: Triple) -> Triple {
    lch_to_hsluv(luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb))))
}

/// Converts HSLuv to gamma-encoded sRGB.
#[inline]
pub fn hsluv_to_rgb(hsl: Triple) -> Triple {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(hsluv_to_lch(hsl))))
}
