//! Integration tests for the HSLuv crates.
//!
//! - `snapshot` checks every pipeline stage against reference vectors
//! - `properties` checks round-trips, gamut containment and degenerate
//!   lightness over a dense RGB cube

mod fixture;

pub use fixture::{Snapshot, SnapshotEntry, load_snapshot};

/// Generate an RGB color cube with `size` levels per channel.
pub fn rgb_cube(size: usize) -> Vec<[f64; 3]> {
    let step = |i: usize| i as f64 / (size - 1) as f64;
    let mut cube = Vec::with_capacity(size * size * size);
    for r in 0..size {
        for g in 0..size {
            for b in 0..size {
                cube.push([step(r), step(g), step(b)]);
            }
        }
    }
    cube
}

/// True when `actual` is within `eps` of `expected`, scaled by magnitude
/// above 1.
pub fn close(actual: f64, expected: f64, eps: f64) -> bool {
    (actual - expected).abs() <= eps * expected.abs().max(1.0)
}

#[cfg(test)]
mod properties;
#[cfg(test)]
mod snapshot;
