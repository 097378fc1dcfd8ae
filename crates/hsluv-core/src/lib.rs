//! # hsluv-core
//!
//! Core types shared by the HSLuv crates.
//!
//! - [`Triple`] - the 3-component value every transform consumes and produces
//! - [`Error`], [`Result`] - failures of the checked and batch conversion APIs
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. Every other crate builds on it:
//!
//! ```text
//! hsluv-core (this crate)
//!    ^
//!    |
//!    +-- hsluv-math (matrices, bound lines)
//!    +-- hsluv-transfer (sRGB gamma)
//!    +-- hsluv-primaries (sRGB matrices, D65 white)
//!    +-- hsluv (XYZ, Luv, LCh, HSLuv, HPLuv)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod triple;

pub use error::{Error, Result};
pub use triple::{Triple, validate};
