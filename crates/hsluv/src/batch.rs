//! Batch conversion of many colors at once.
//!
//! With the `parallel` feature (default) the work is split across threads
//! with rayon. Each color is converted independently, so the results are
//! identical to the sequential path.
//!
//! # Example
//!
//! ```rust
//! use hsluv::Conversion;
//! use hsluv::batch::{convert_flat, convert_slice};
//!
//! let mut colors = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
//! convert_slice(&mut colors, Conversion::RgbToHsluv);
//! assert!((colors[0][0] - 12.177050630061776).abs() < 1e-9);
//!
//! // Interleaved r, g, b, r, g, b ...
//! let mut buf = vec![0.0, 0.0, 1.0, 0.5, 0.5, 0.5];
//! convert_flat(&mut buf, Conversion::RgbToHpluv).unwrap();
//! assert!((buf[2] - 32.30087290398002).abs() < 1e-9);
//! ```

use crate::Conversion;
use hsluv_core::{Error, Result, Triple, validate};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Components per color.
const CHANNELS: usize = 3;

/// Converts every triple in place.
pub fn convert_slice(colors: &mut [Triple], conversion: Conversion) {
    trace!(len = colors.len(), %conversion, "convert_slice");

    #[cfg(feature = "parallel")]
    colors
        .par_iter_mut()
        .for_each(|color| *color = conversion.apply(*color));

    #[cfg(not(feature = "parallel"))]
    colors
        .iter_mut()
        .for_each(|color| *color = conversion.apply(*color));

    debug!(len = colors.len(), %conversion, "Converted batch");
}

/// Converts every triple in place after checking that all are finite.
///
/// # Errors
///
/// [`Error::NonFinite`] with the flat component offset (`3 * i + channel`)
/// of the first bad value. The slice is not modified on error.
pub fn try_convert_slice(colors: &mut [Triple], conversion: Conversion) -> Result<()> {
    colors
        .iter()
        .enumerate()
        .try_for_each(|(i, color)| {
            validate(*color)
                .map(drop)
                .map_err(|err| err.offset(i * CHANNELS))
        })
        .inspect_err(|err| debug!(%conversion, %err, "Rejected batch"))?;

    convert_slice(colors, conversion);
    Ok(())
}

/// Converts an interleaved buffer in place.
///
/// # Errors
///
/// - [`Error::BufferLength`] if the length is not a multiple of 3
/// - [`Error::NonFinite`] for the first NaN or infinite component
///
/// The buffer is not modified on error.
pub fn convert_flat(buf: &mut [f64], conversion: Conversion) -> Result<()> {
    trace!(len = buf.len(), %conversion, "convert_flat");

    if buf.len() % CHANNELS != 0 {
        return Err(Error::BufferLength {
            len: buf.len(),
            channels: CHANNELS,
        });
    }
    if let Some(index) = buf.iter().position(|c| !c.is_finite()) {
        let err = Error::NonFinite {
            index,
            value: buf[index],
        };
        debug!(%conversion, %err, "Rejected batch");
        return Err(err);
    }

    let apply = |chunk: &mut [f64]| {
        let out = conversion.apply([chunk[0], chunk[1], chunk[2]]);
        chunk.copy_from_slice(&out);
    };

    #[cfg(feature = "parallel")]
    buf.par_chunks_exact_mut(CHANNELS).for_each(apply);

    #[cfg(not(feature = "parallel"))]
    buf.chunks_exact_mut(CHANNELS).for_each(apply);

    debug!(len = buf.len() / CHANNELS, %conversion, "Converted batch");
    Ok(())
}
