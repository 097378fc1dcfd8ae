//! CIE XYZ <-> CIE Luv.
//!
//! Lightness follows the CIE piecewise response: linear below
//! [`EPSILON`], cube root above. u* and v* scale the distance of the
//! color's u'v' chromaticity from the D65 reference white by `13 * L`.

use crate::BLACK_LIGHTNESS;
use hsluv_core::Triple;
use hsluv_primaries::{REF_U, REF_V, REF_Y};

/// Luminance ratio where the lightness response switches branches, `(6/29)^3`.
pub const EPSILON: f64 = 0.0088564516;

/// Slope of the linear lightness segment, `(29/3)^3`.
pub const KAPPA: f64 = 903.2962962;

/// Lightness L* of luminance `y`.
#[inline]
pub fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y / REF_Y * KAPPA
    } else {
        116.0 * (y / REF_Y).cbrt() - 16.0
    }
}

/// Luminance of lightness `l`. Inverse of [`y_to_l`].
#[inline]
pub fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        REF_Y * l / KAPPA
    } else {
        REF_Y * ((l + 16.0) / 116.0).powi(3)
    }
}

/// Converts XYZ to Luv.
///
/// Colors darker than [`BLACK_LIGHTNESS`] come out as `[0, 0, 0]`; their
/// chromaticity is numerically meaningless.
///
/// # Example
///
/// ```rust
/// use hsluv::xyz_to_luv;
///
/// let [l, u, v] = xyz_to_luv([0.95045592705165, 1.0, 1.089057750759871]);
/// assert!((l - 100.0).abs() < 1e-9);
/// assert!(u.abs() < 1e-9 && v.abs() < 1e-9);
/// ```
pub fn xyz_to_luv([x, y, z]: Triple) -> Triple {
    let l = y_to_l(y);
    if l < BLACK_LIGHTNESS {
        return [0.0; 3];
    }

    let divider = x + 15.0 * y + 3.0 * z;
    let var_u = 4.0 * x / divider;
    let var_v = 9.0 * y / divider;

    [l, 13.0 * l * (var_u - REF_U), 13.0 * l * (var_v - REF_V)]
}

/// Converts Luv to XYZ.
///
/// Lightness at or below [`BLACK_LIGHTNESS`] maps to `[0, 0, 0]`.
pub fn luv_to_xyz([l, u, v]: Triple) -> Triple {
    if l <= BLACK_LIGHTNESS {
        return [0.0; 3];
    }

    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);

    [x, y, z]
}
