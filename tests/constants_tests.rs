// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_and_limits_are_sane() {
    assert_eq!(SPLASH_DELAY_MS, 2000);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(MAX_PARTICLES >= crystal_core::FIELD_PARTICLE_COUNT);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        FIELD_CANVAS_ID,
        SCENE_CANVAS_ID,
        CURSOR_DOT_ID,
        CURSOR_RING_ID,
        CURSOR_TRAIL_ID,
        CURSOR_BURST_ID,
        SPLASH_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn scene_clear_is_transparent() {
    assert_eq!(SCENE_CLEAR[3], 0.0);
}
