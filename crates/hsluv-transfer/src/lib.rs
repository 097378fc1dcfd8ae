//! # hsluv-transfer
//!
//! The sRGB transfer function.
//!
//! Converts between gamma-encoded sRGB channel values and linear light.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! # Usage
//!
//! ```rust
//! use hsluv_transfer::{to_linear, from_linear};
//!
//! let linear = to_linear(0.5);
//! let encoded = from_linear(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `hsluv` - RGB <-> XYZ conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as to_linear, eotf_rgb, oetf as from_linear, oetf_rgb};
