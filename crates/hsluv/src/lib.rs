//! # hsluv
//!
//! Human-friendly HSL. Converts colors between sRGB and the perceptually
//! uniform HSLuv and HPLuv spaces, by way of CIE XYZ, Luv and LCh.
//!
//! # Architecture
//!
//! ```text
//!                         hsluv
//!                           |
//!       +-------------------+-------------------+
//!       |                   |                   |
//! hsluv-transfer     hsluv-primaries        hsluv-math
//!       |                   |                   |
//!       +---------+---------+-------------------+
//!                 |
//!             hsluv-core
//! ```
//!
//! Every conversion is one step along this chain, or a composition of steps:
//!
//! ```text
//! RGB <-> linear RGB <-> XYZ <-> Luv <-> LCh <-> HSLuv
//!                                             <-> HPLuv
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use hsluv::{hsluv_to_rgb, rgb_to_hsluv};
//!
//! let [h, s, l] = rgb_to_hsluv([1.0, 0.0, 0.0]);
//! assert!((h - 12.177050630061776).abs() < 1e-9);
//! assert!((s - 100.0).abs() < 1e-9);
//! assert!((l - 53.23711559542933).abs() < 1e-9);
//!
//! let rgb = hsluv_to_rgb([h, s, l]);
//! assert!((rgb[0] - 1.0).abs() < 1e-9);
//! ```
//!
//! # Coordinates
//!
//! | Space | Components | Range |
//! |-------|------------|-------|
//! | RGB | R, G, B | [0, 1] |
//! | XYZ | X, Y, Z | Y in [0, 1] |
//! | Luv | L, u, v | L in [0, 100] |
//! | LCh | L, C, H | H in [0, 360) |
//! | HSLuv | H, S, L | S, L in [0, 100] |
//! | HPLuv | H, P, L | L in [0, 100]; P exceeds 100 outside the pastel range |
//!
//! Nothing is clamped. Out-of-gamut values pass through every transform and
//! come back on the inverse.
//!
//! # Errors
//!
//! The transforms are total over finite numbers and return plain triples.
//! [`Conversion::try_apply`] and the [`batch`] functions validate input first
//! and report NaN or infinite components as [`Error::NonFinite`].
//!
//! # Feature Flags
//!
//! - `parallel` - Batch conversion with rayon (enabled by default)
//! - `serde` - Serialization for [`Conversion`]
//!
//! # Dependencies
//!
//! - [`hsluv-core`] - [`Triple`], [`Error`]
//! - [`hsluv-math`] - Matrices and bound lines
//! - [`hsluv-transfer`] - sRGB transfer function
//! - [`hsluv-primaries`] - sRGB matrices and D65 reference white

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod batch;
mod convert;
pub mod gamut;
mod hpluv;
mod hsluv;
mod lch;
mod luv;
mod xyz;

pub use convert::Conversion;
pub use gamut::{Bounds, bounds, max_chroma_for_lh, max_safe_chroma_for_l};
pub use hpluv::{hpluv_to_lch, hpluv_to_rgb, lch_to_hpluv, rgb_to_hpluv};
pub use self::hsluv::{hsluv_to_lch, hsluv_to_rgb, lch_to_hsluv, rgb_to_hsluv};
pub use lch::{ACHROMATIC_CHROMA, lch_to_luv, luv_to_lch};
pub use luv::{EPSILON, KAPPA, l_to_y, luv_to_xyz, xyz_to_luv, y_to_l};
pub use xyz::{rgb_to_xyz, xyz_to_rgb};

pub use hsluv_core::{Error, Result, Triple};
pub use hsluv_math::Line;
pub use hsluv_transfer::{from_linear, to_linear};

// Re-export sub-crates for convenience
pub use hsluv_math as math;
pub use hsluv_primaries as primaries;
pub use hsluv_transfer as transfer;

/// Lightness below which a color is treated as black.
pub const BLACK_LIGHTNESS: f64 = 0.00000001;

/// Lightness above which a color is treated as white.
pub const WHITE_LIGHTNESS: f64 = 99.9999999;

/// Returns true when the gamut slice at `l` collapses to a point.
#[inline]
pub(crate) fn is_degenerate(l: f64) -> bool {
    l > WHITE_LIGHTNESS || l < BLACK_LIGHTNESS
}

/// Prelude with commonly used items
pub mod prelude {
    pub use crate::batch::{convert_flat, convert_slice, try_convert_slice};
    pub use crate::{
        Conversion, Error, Result, Triple, hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv,
        rgb_to_hsluv,
    };
}
