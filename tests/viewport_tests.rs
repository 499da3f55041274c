// Host-side tests for canvas sizing and style formatting helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/viewport.rs"]
mod viewport;

use viewport::*;

#[test]
fn backing_size_scales_by_capped_dpr() {
    assert_eq!(backing_size(800.0, 600.0, 1.0, 2.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 1.5, 2.0), (1200, 900));
    assert_eq!(backing_size(800.0, 600.0, 3.0, 2.0), (1600, 1200));
}

#[test]
fn backing_size_never_hits_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0, 2.0), (1, 1));
    assert_eq!(backing_size(-5.0, f64::NAN, 2.0, 2.0), (1, 1));
    assert_eq!(backing_size(100.0, 100.0, f64::NAN, 2.0), (100, 100));
    assert_eq!(backing_size(100.0, 100.0, 0.5, 2.0), (100, 100));
}

#[test]
fn rgba_clamps_alpha() {
    assert_eq!(rgba_css([59, 130, 246], 0.25), "rgba(59, 130, 246, 0.250)");
    assert_eq!(rgba_css([1, 2, 3], 4.0), "rgba(1, 2, 3, 1.000)");
    assert_eq!(rgba_css([1, 2, 3], f32::NAN), "rgba(1, 2, 3, 0.000)");
}

#[test]
fn transform_centres_element() {
    assert_eq!(
        centered_transform(10.0, 20.5, 1.2),
        "translate3d(10.00px, 20.50px, 0) translate(-50%, -50%) scale(1.200)"
    );
    assert!(centered_transform(0.0, 0.0, -1.0).ends_with("scale(0.000)"));
}

#[test]
fn overrides_parse_or_fall_back() {
    assert_eq!(parse_override::<u64>(Some(" 7 ")), Some(7));
    assert_eq!(parse_override::<u64>(Some("seven")), None);
    assert_eq!(parse_override::<u64>(None), None);
    assert_eq!(particle_override(Some("50"), 400), Some(50));
    assert_eq!(particle_override(Some("5000"), 400), Some(400));
    assert_eq!(particle_override(Some("0"), 400), None);
    assert_eq!(particle_override(Some("-3"), 400), None);
}
