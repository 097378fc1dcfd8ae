//! Reference snapshot fixture.
//!
//! `data/snapshot.json` maps hex colors to the coordinates the canonical
//! HSLuv algorithm produces for them at every stage of the pipeline. The
//! grid covers the web-safe cube plus a handful of near-black, near-white
//! and mid-gray colors.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Coordinates of one reference color.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEntry {
    /// sRGB in [0, 1].
    pub rgb: [f64; 3],
    /// CIE XYZ.
    pub xyz: [f64; 3],
    /// CIE Luv.
    pub luv: [f64; 3],
    /// CIE LCh(uv).
    pub lch: [f64; 3],
    /// HSLuv.
    pub hsluv: [f64; 3],
    /// HPLuv.
    pub hpluv: [f64; 3],
}

/// The full snapshot, keyed by `#rrggbb`.
pub type Snapshot = BTreeMap<String, SnapshotEntry>;

const SNAPSHOT_JSON: &str = include_str!("../data/snapshot.json");

/// Parses the bundled snapshot.
pub fn load_snapshot() -> serde_json::Result<Snapshot> {
    serde_json::from_str(SNAPSHOT_JSON)
}
