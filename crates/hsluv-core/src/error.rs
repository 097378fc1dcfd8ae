//! Error types for the checked conversion surface.
//!
//! The core transforms are total over finite numbers and never return an
//! error. [`Error`] only shows up where callers opt into validation: checked
//! single conversions and batch conversion of slices and flat buffers.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_core::{Error, Result};
//!
//! fn check_len(buf: &[f64]) -> Result<()> {
//!     if buf.len() % 3 != 0 {
//!         return Err(Error::BufferLength { len: buf.len(), channels: 3 });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_len(&[0.0; 4]).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by checked conversions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A component is NaN or infinite.
    ///
    /// `index` is the position of the component in the input: 0..3 for a
    /// single triple, or the flat component offset for batch input.
    #[error("non-finite component at index {index}: {value}")]
    NonFinite {
        /// Offset of the offending component.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A flat interleaved buffer does not hold a whole number of triples.
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    BufferLength {
        /// Length of the buffer.
        len: usize,
        /// Components per color.
        channels: usize,
    },
}

impl Error {
    /// Shifts the reported component offset by `base`.
    ///
    /// Used by batch conversion to turn a per-triple index into an offset
    /// into the whole input.
    #[inline]
    pub fn offset(self, base: usize) -> Self {
        match self {
            Self::NonFinite { index, value } => Self::NonFinite {
                index: index + base,
                value,
            },
            other => other,
        }
    }
}
