//! Named conversions.
//!
//! [`Conversion`] picks one step (or composed chain) of the transform
//! pipeline at runtime, so a direction can be stored, passed to a
//! [`batch`](crate::batch) call, or inverted.
//!
//! # Example
//!
//! ```rust
//! use hsluv::Conversion;
//!
//! let forward = Conversion::RgbToHsluv;
//! let hsl = forward.apply([0.2, 0.4, 0.6]);
//! let rgb = forward.inverse().apply(hsl);
//! assert!((rgb[1] - 0.4).abs() < 1e-10);
//! ```

use std::fmt;

use crate::{
    hpluv_to_lch, hpluv_to_rgb, hsluv_to_lch, hsluv_to_rgb, lch_to_hpluv, lch_to_hsluv,
    lch_to_luv, luv_to_lch, luv_to_xyz, rgb_to_hpluv, rgb_to_hsluv, rgb_to_xyz, xyz_to_luv,
    xyz_to_rgb,
};
use hsluv_core::{Result, Triple, validate};
use tracing::debug;

/// A conversion between two color models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Conversion {
    /// sRGB to HSLuv.
    RgbToHsluv,
    /// HSLuv to sRGB.
    HsluvToRgb,
    /// sRGB to HPLuv.
    RgbToHpluv,
    /// HPLuv to sRGB.
    HpluvToRgb,
    /// sRGB to XYZ.
    RgbToXyz,
    /// XYZ to sRGB.
    XyzToRgb,
    /// XYZ to Luv.
    XyzToLuv,
    /// Luv to XYZ.
    LuvToXyz,
    /// Luv to LCh.
    LuvToLch,
    /// LCh to Luv.
    LchToLuv,
    /// LCh to HSLuv.
    LchToHsluv,
    /// HSLuv to LCh.
    HsluvToLch,
    /// LCh to HPLuv.
    LchToHpluv,
    /// HPLuv to LCh.
    HpluvToLch,
}

impl Conversion {
    /// Every conversion, forward directions first.
    pub const ALL: [Conversion; 14] = [
        Self::RgbToHsluv,
        Self::RgbToHpluv,
        Self::RgbToXyz,
        Self::XyzToLuv,
        Self::LuvToLch,
        Self::LchToHsluv,
        Self::LchToHpluv,
        Self::HsluvToRgb,
        Self::HpluvToRgb,
        Self::XyzToRgb,
        Self::LuvToXyz,
        Self::LchToLuv,
        Self::HsluvToLch,
        Self::HpluvToLch,
    ];

    /// Applies the conversion to one triple.
    #[inline]
    pub fn apply(self, input: Triple) -> Triple {
        match self {
            Self::RgbToHsluv => rgb_to_hsluv(input),
            Self::HsluvToRgb => hsluv_to_rgb(input),
            Self::RgbToHpluv => rgb_to_hpluv(input),
            Self::HpluvToRgb => hpluv_to_rgb(input),
            Self::RgbToXyz => rgb_to_xyz(input),
            Self::XyzToRgb => xyz_to_rgb(input),
            Self::XyzToLuv => xyz_to_luv(input),
            Self::LuvToXyz => luv_to_xyz(input),
            Self::LuvToLch => luv_to_lch(input),
            Self::LchToLuv => lch_to_luv(input),
            Self::LchToHsluv => lch_to_hsluv(input),
            Self::HsluvToLch => hsluv_to_lch(input),
            Self::LchToHpluv => lch_to_hpluv(input),
            Self::HpluvToLch => hpluv_to_lch(input),
        }
    }

    /// Applies the conversion after checking that `input` is finite.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinite`](hsluv_core::Error::NonFinite) if any component
    /// is NaN or infinite.
    pub fn try_apply(self, input: Triple) -> Result<Triple> {
        let input = validate(input).inspect_err(|err| {
            debug!(conversion = %self, %err, "Rejected input");
        })?;
        Ok(self.apply(input))
    }

    /// The conversion in the opposite direction.
    pub const fn inverse(self) -> Self {
        match self {
            Self::RgbToHsluv => Self::HsluvToRgb,
            Self::HsluvToRgb => Self::RgbToHsluv,
            Self::RgbToHpluv => Self::HpluvToRgb,
            Self::HpluvToRgb => Self::RgbToHpluv,
            Self::RgbToXyz => Self::XyzToRgb,
            Self::XyzToRgb => Self::RgbToXyz,
            Self::XyzToLuv => Self::LuvToXyz,
            Self::LuvToXyz => Self::XyzToLuv,
            Self::LuvToLch => Self::LchToLuv,
            Self::LchToLuv => Self::LuvToLch,
            Self::LchToHsluv => Self::HsluvToLch,
            Self::HsluvToLch => Self::LchToHsluv,
            Self::LchToHpluv => Self::HpluvToLch,
            Self::HpluvToLch => Self::LchToHpluv,
        }
    }

    /// Snake-case name, e.g. `rgb_to_hsluv`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RgbToHsluv => "rgb_to_hsluv",
            Self::HsluvToRgb => "hsluv_to_rgb",
            Self::RgbToHpluv => "rgb_to_hpluv",
            Self::HpluvToRgb => "hpluv_to_rgb",
            Self::RgbToXyz => "rgb_to_xyz",
            Self::XyzToRgb => "xyz_to_rgb",
            Self::XyzToLuv => "xyz_to_luv",
            Self::LuvToXyz => "luv_to_xyz",
            Self::LuvToLch => "luv_to_lch",
            Self::LchToLuv => "lch_to_luv",
            Self::LchToHsluv => "lch_to_hsluv",
            Self::HsluvToLch => "hsluv_to_lch",
            Self::LchToHpluv => "lch_to_hpluv",
            Self::HpluvToLch => "hpluv_to_lch",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
