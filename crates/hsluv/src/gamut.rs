//! sRGB gamut boundary in the chroma plane.
//!
//! At a fixed lightness L the colors that stay inside sRGB form a convex
//! polygon around the gray axis in the (u, v) plane. Each of its edges is
//! where one RGB channel reaches 0 or 1, and each such locus is a straight
//! line. [`bounds`] returns those six lines; [`max_chroma_for_lh`] walks a
//! ray out from the origin at a given hue and stops at the first edge;
//! [`max_safe_chroma_for_l`] is the radius of the largest circle that fits
//! inside the polygon regardless of hue.
//!
//! # Example
//!
//! ```rust
//! use hsluv::{max_chroma_for_lh, max_safe_chroma_for_l};
//!
//! let l = 50.0;
//! let safe = max_safe_chroma_for_l(l);
//! for h in [0.0, 90.0, 180.0, 270.0] {
//!     assert!(max_chroma_for_lh(l, h) >= safe);
//! }
//! ```

use crate::is_degenerate;
use crate::luv::{EPSILON, KAPPA};
use hsluv_math::Line;
use hsluv_math::glam::DVec2;
use hsluv_primaries::XYZ_TO_SRGB;

/// The six gamut edges at one lightness.
///
/// Ordered by channel (R, G, B), and within a channel by limit (0, then 1).
pub type Bounds = [Line; 6];

/// Computes the gamut edges at lightness `l`.
///
/// Only meaningful for `0 < l < 100`. At exactly 0 the lower-limit lines
/// divide by zero; use [`max_chroma_for_lh`] and [`max_safe_chroma_for_l`],
/// which handle the degenerate ends themselves.
pub fn bounds(l: f64) -> Bounds {
    let sub1 = (l + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line::default(); 6];
    for channel in 0..3 {
        let [m1, m2, m3] = XYZ_TO_SRGB.row(channel);
        for limit in 0..2 {
            let t = limit as f64;
            let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
            let top2 = (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * l * sub2
                - 769860.0 * t * l;
            let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * t;
            lines[channel * 2 + limit] = Line::new(top1 / bottom, top2 / bottom);
        }
    }
    lines
}

/// Maximum in-gamut chroma at lightness `l` and hue `h` (degrees).
///
/// The chroma at which a ray from the gray axis at angle `h` first leaves
/// sRGB. Returns 0 at black and white.
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    if is_degenerate(l) {
        return 0.0;
    }

    let direction = DVec2::from_angle(h.to_radians());
    bounds(l)
        .iter()
        .filter_map(|line| line.ray_length(direction))
        .fold(f64::INFINITY, f64::min)
}

/// Maximum chroma at lightness `l` that is in gamut for every hue.
///
/// The distance from the gray axis to the nearest gamut edge. Returns 0 at
/// black and white.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    if is_degenerate(l) {
        return 0.0;
    }

    bounds(l)
        .iter()
        .map(Line::distance_from_origin)
        .fold(f64::INFINITY, f64::min)
}
