//! Reference vector tests.
//!
//! Each stage is tested in isolation, forward from the previous stage's
//! reference value and backward from the next one, so a mismatch names the
//! transform at fault.

use crate::{SnapshotEntry, close, load_snapshot};
use hsluv::{
    Triple, hpluv_to_lch, hsluv_to_lch, lch_to_hpluv, lch_to_hsluv, lch_to_luv, luv_to_lch,
    luv_to_xyz, rgb_to_hsluv, rgb_to_xyz, xyz_to_luv, xyz_to_rgb,
};

const TOLERANCE: f64 = 1e-9;

fn check(hex: &str, stage: &str, actual: Triple, expected: Triple) {
    for i in 0..3 {
        assert!(
            close(actual[i], expected[i], TOLERANCE),
            "{hex} {stage}[{i}]: got {actual:?}, expected {expected:?}"
        );
    }
}

fn for_each_entry(f: impl Fn(&str, &SnapshotEntry)) {
    let snapshot = load_snapshot().expect("snapshot fixture parses");
    assert!(snapshot.len() > 200);
    for (hex, entry) in &snapshot {
        f(hex, entry);
    }
}

#[test]
fn test_fixture_keys_match_rgb() {
    for_each_entry(|hex, entry| {
        let channel = |i: usize| u8::from_str_radix(&hex[1 + 2 * i..3 + 2 * i], 16).unwrap();
        for i in 0..3 {
            assert_eq!(entry.rgb[i], channel(i) as f64 / 255.0, "{hex}");
        }
    });
}

#[test]
fn test_fixture_floats_parse_exactly() {
    let parsed: f64 = serde_json::from_str("0.20392156862745098").unwrap();
    assert_eq!(parsed, 52.0 / 255.0);
    let snapshot = load_snapshot().unwrap();
    assert_eq!(snapshot["#123456"].rgb, [18.0 / 255.0, 52.0 / 255.0, 86.0 / 255.0]);
}

#[test]
fn test_forward_stages() {
    for_each_entry(|hex, e| {
        check(hex, "xyz", rgb_to_xyz(e.rgb), e.xyz);
        check(hex, "luv", xyz_to_luv(e.xyz), e.luv);
        check(hex, "lch", luv_to_lch(e.luv), e.lch);
        check(hex, "hsluv", lch_to_hsluv(e.lch), e.hsluv);
        check(hex, "hpluv", lch_to_hpluv(e.lch), e.hpluv);
    });
}

#[test]
fn test_backward_stages() {
    for_each_entry(|hex, e| {
        check(hex, "lch<-hsluv", hsluv_to_lch(e.hsluv), e.lch);
        check(hex, "lch<-hpluv", hpluv_to_lch(e.hpluv), e.lch);
        check(hex, "luv<-lch", lch_to_luv(e.lch), e.luv);
        check(hex, "xyz<-luv", luv_to_xyz(e.luv), e.xyz);
        check(hex, "rgb<-xyz", xyz_to_rgb(e.xyz), e.rgb);
    });
}

#[test]
fn test_end_to_end() {
    for_each_entry(|hex, e| {
        check(hex, "rgb->hsluv", rgb_to_hsluv(e.rgb), e.hsluv);
        check(hex, "rgb->hpluv", hsluv::rgb_to_hpluv(e.rgb), e.hpluv);
        check(hex, "hsluv->rgb", hsluv::hsluv_to_rgb(e.hsluv), e.rgb);
        check(hex, "hpluv->rgb", hsluv::hpluv_to_rgb(e.hpluv), e.rgb);
    });
}

#[test]
fn test_published_primaries() {
    let snapshot = load_snapshot().unwrap();
    let expect = [
        ("#ff0000", [12.177050630061776, 100.0000000000022, 53.23711559542933]),
        ("#00ff00", [127.71501294924046, 100.0000000000022, 87.73551910965973]),
        ("#0000ff", [265.8743202181779, 100.00000000000163, 32.30087290398002]),
        ("#000000", [0.0, 0.0, 0.0]),
    ];
    for (hex, hsl) in expect {
        check(hex, "published", snapshot[hex].hsluv, hsl);
        check(hex, "computed", rgb_to_hsluv(snapshot[hex].rgb), hsl);
    }

    let white = rgb_to_hsluv(snapshot["#ffffff"].rgb);
    check("#ffffff", "computed", white, [0.0, 0.0, 100.0]);
    let gray = rgb_to_hsluv(snapshot["#808080"].rgb);
    assert_eq!(gray[0], 0.0);
    assert!(gray[1] < 1e-8);

    let mid = rgb_to_hsluv([0.5, 0.5, 0.5]);
    check("mid-gray", "computed", mid, [0.0, 0.0, 53.38896474111415]);
    check("mid-gray", "back", hsluv::hsluv_to_rgb(mid), [0.5, 0.5, 0.5]);
}
