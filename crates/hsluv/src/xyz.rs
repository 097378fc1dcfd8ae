//! sRGB <-> CIE XYZ (D65).

use hsluv_core::Triple;
use hsluv_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use hsluv_transfer::{eotf_rgb, oetf_rgb};

/// Converts gamma-encoded sRGB to XYZ.
///
/// Linearizes each channel, then applies [`SRGB_TO_XYZ`].
///
/// # Example
///
/// ```rust
/// use hsluv::rgb_to_xyz;
///
/// let xyz = rgb_to_xyz([1.0, 1.0, 1.0]);
/// assert!((xyz[1] - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_to_xyz(rgb: Triple) -> Triple {
    SRGB_TO_XYZ * eotf_rgb(rgb)
}

/// Converts XYZ to gamma-encoded sRGB.
///
/// Applies [`XYZ_TO_SRGB`], then encodes each channel. Channels outside
/// [0, 1] are returned as they are.
#[inline]
pub fn xyz_to_rgb(xyz: Triple) -> Triple {
    oetf_rgb(XYZ_TO_SRGB * xyz)
}
