//! CIE Luv <-> CIE LCh(uv): rectangular to polar and back.

use hsluv_core::Triple;

/// Chroma below which hue is undefined and reported as 0.
pub const ACHROMATIC_CHROMA: f64 = 0.00000001;

/// Converts Luv to LCh.
///
/// Hue is in degrees, in [0, 360). Near-gray colors (chroma below
/// [`ACHROMATIC_CHROMA`]) get hue 0 rather than whatever `atan2` makes of
/// rounding noise.
///
/// # Example
///
/// ```rust
/// use hsluv::luv_to_lch;
///
/// let [l, c, h] = luv_to_lch([50.0, 0.0, -10.0]);
/// assert_eq!((l, c, h), (50.0, 10.0, 270.0));
/// ```
pub fn luv_to_lch([l, u, v]: Triple) -> Triple {
    let c = (u * u + v * v).sqrt();
    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        let h = v.atan2(u).to_degrees();
        if h < 0.0 {
            // tiny negative angles round up to exactly 360
            let h = h + 360.0;
            if h >= 360.0 { h - 360.0 } else { h }
        } else {
            h
        }
    };
    [l, c, h]
}

/// Converts LCh to Luv.
pub fn lch_to_luv([l, c, h]: Triple) -> Triple {
    let (sin, cos) = h.to_radians().sin_cos();
    [l, cos * c, sin * c]
}
