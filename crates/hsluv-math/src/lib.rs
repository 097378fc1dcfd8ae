//! # hsluv-math
//!
//! Math primitives for HSLuv color conversion.
//!
//! - [`Mat3`] - 3x3 matrices for RGB <-> XYZ transforms
//! - [`Line`] - a straight edge of the sRGB gamut in the chroma plane
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`. Round-trips through HSLuv amplify single precision
//! error near black, so there is no `f32` path.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_math::Mat3;
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.41239079926595, 0.35758433938387, 0.18048078840183],
//!     [0.21263900587151, 0.71516867876775, 0.072192315360733],
//!     [0.019330818715591, 0.11919477979462, 0.95053215224966],
//! ]);
//!
//! let xyz = rgb_to_xyz * [1.0, 0.5, 0.25];
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `DMat3`, ray directions as `DVec2`
//! - [`hsluv-core`] - [`Triple`](hsluv_core::Triple)
//!
//! # Used By
//!
//! - `hsluv-primaries` - matrix derivation
//! - `hsluv` - XYZ transforms and the gamut solver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod line;
mod mat3;

pub use line::*;
pub use mat3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec2};
}
