//! Straight edges of the gamut slice in the chroma plane.
//!
//! At a fixed lightness every RGB channel limit (0 or 1) becomes a straight
//! line `v = slope * u + intercept` in the (u, v) plane. A [`Line`] is one
//! such edge; the gamut slice is the polygon they enclose around the origin.

use glam::DVec2;

/// A line `v = slope * u + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Gradient dv/du.
    pub slope: f64,
    /// Value of v at u = 0.
    pub intercept: f64,
}

impl Line {
    /// Creates a new line.
    #[inline]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Perpendicular distance from the origin to the line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hsluv_math::Line;
    ///
    /// assert_eq!(Line::new(0.0, -3.0).distance_from_origin(), 3.0);
    /// ```
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / (self.slope * self.slope + 1.0).sqrt()
    }

    /// Length of the ray from the origin along `direction` until it meets
    /// this line.
    ///
    /// `direction` must be a unit vector `(cos theta, sin theta)`. Returns
    /// `None` when the line lies behind the origin or runs parallel to the
    /// ray.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hsluv_math::Line;
    /// use hsluv_math::glam::DVec2;
    ///
    /// let horizontal = Line::new(0.0, 2.0);
    /// assert_eq!(horizontal.ray_length(DVec2::Y), Some(2.0));
    /// assert_eq!(horizontal.ray_length(DVec2::NEG_Y), None);
    /// assert_eq!(horizontal.ray_length(DVec2::X), None);
    /// ```
    #[inline]
    pub fn ray_length(&self, direction: DVec2) -> Option<f64> {
        let length = self.intercept / (direction.y - self.slope * direction.x);
        (length.is_finite() && length >= 0.0).then_some(length)
    }
}
