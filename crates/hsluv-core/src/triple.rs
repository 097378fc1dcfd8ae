//! The 3-component value type.
//!
//! A [`Triple`] carries RGB, XYZ, Luv, LCh, HSLuv or HPLuv coordinates. The
//! meaning of each slot is fixed by the transform that produced it:
//!
//! | Space | `[0]` | `[1]` | `[2]` |
//! |-------|-------|-------|-------|
//! | RGB   | R     | G     | B     |
//! | XYZ   | X     | Y     | Z     |
//! | Luv   | L     | u     | v     |
//! | LCh   | L     | C     | H     |
//! | HSLuv | H     | S     | L     |
//! | HPLuv | H     | P     | L     |

use crate::{Error, Result};

/// An ordered triple of coordinates.
pub type Triple = [f64; 3];

/// Checks that every component is finite.
///
/// Returns the triple unchanged, or [`Error::NonFinite`] naming the first
/// bad component.
///
/// # Example
///
/// ```rust
/// use hsluv_core::validate;
///
/// assert!(validate([0.1, 0.2, 0.3]).is_ok());
/// assert!(validate([0.1, f64::NAN, 0.3]).is_err());
/// ```
#[inline]
pub fn validate(triple: Triple) -> Result<Triple> {
    match triple.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(Error::NonFinite {
            index,
            value: triple[index],
        }),
        None => Ok(triple),
    }
}
