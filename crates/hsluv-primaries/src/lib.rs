//! # hsluv-primaries
//!
//! sRGB primaries, the D65 reference white, and the RGB <-> XYZ matrices.
//!
//! HSLuv is defined against a fixed set of published constants. They live
//! here as [`SRGB_TO_XYZ`], [`XYZ_TO_SRGB`], [`REF_U`], [`REF_V`] and
//! [`REF_Y`], and every conversion uses them verbatim. The chromaticity
//! based derivation ([`rgb_to_xyz_matrix`], [`white_uv`]) reproduces them
//! from first principles and is what the tests check the tables against.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
//!
//! let xyz = SRGB_TO_XYZ * [1.0, 0.0, 0.0];
//! let rgb = XYZ_TO_SRGB * xyz;
//! assert!((rgb[0] - 1.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`hsluv-math`] - Matrix operations
//!
//! # Used By
//!
//! - `hsluv` - XYZ and Luv conversions, gamut bounds

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use hsluv_core::Triple;
use hsluv_math::Mat3;

/// RGB color space primaries definition.
///
/// Three primaries and a white point, all as CIE xy chromaticities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Triple {
        xy_to_xyz(self.w)
    }
}

// ============================================================================
// White Point
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// Luminance of the reference white.
pub const REF_Y: f64 = 1.0;

/// u' chromaticity of the D65 reference white.
pub const REF_U: f64 = 0.19783000664283;

/// v' chromaticity of the D65 reference white.
pub const REF_V: f64 = 0.46831999493879;

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
};

// ============================================================================
// Published Matrices
// ============================================================================

/// Linear sRGB to XYZ (D65) matrix.
#[allow(clippy::excessive_precision)]
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
]);

/// XYZ (D65) to linear sRGB matrix.
#[allow(clippy::excessive_precision)]
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
]);

// ============================================================================
// Derivation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
pub fn xy_to_xyz((x, y): (f64, f64)) -> Triple {
    if y.abs() < 1e-10 {
        [0.0; 3]
    } else {
        [x / y, 1.0, (1.0 - x - y) / y]
    }
}

/// CIE 1976 u'v' chromaticity of an xy chromaticity.
///
/// # Example
///
/// ```rust
/// use hsluv_primaries::{white_uv, D65_XY, REF_U, REF_V};
///
/// let (u, v) = white_uv(D65_XY);
/// assert!((u - REF_U).abs() < 1e-9);
/// assert!((v - REF_V).abs() < 1e-9);
/// ```
pub fn white_uv((x, y): (f64, f64)) -> (f64, f64) {
    let denom = -2.0 * x + 12.0 * y + 3.0;
    (4.0 * x / denom, 9.0 * y / denom)
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// Returns `None` for degenerate primaries (collinear chromaticities).
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r);
    let g_xyz = xy_to_xyz(primaries.g);
    let b_xyz = xy_to_xyz(primaries.b);

    // Primaries as columns; solve M * S = W for the column scales
    let m = Mat3::from_cols([r_xyz, g_xyz, b_xyz]);
    let s = m.inverse()? * primaries.white_xyz();

    Some(m * Mat3::diagonal(s))
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries)?.inverse()
}
