//! Pure helpers for sizing canvases and formatting styles.
//!
//! Kept free of `web_sys` so the host test suite can include this file.

use std::str::FromStr;

/// Backing-store size in device pixels for a CSS box, with the device pixel
/// ratio clamped to `[1, max_dpr]` and each side at least one pixel.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let ratio = effective_dpr(dpr, max_dpr);
    let side = |v: f64| {
        if v.is_finite() && v > 0.0 {
            ((v * ratio).round() as u32).max(1)
        } else {
            1
        }
    };
    (side(css_width), side(css_height))
}

/// Effective ratio between backing pixels and CSS pixels.
#[inline]
pub fn effective_dpr(dpr: f64, max_dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(1.0, max_dpr.max(1.0))
    } else {
        1.0
    }
}

/// `rgba(r, g, b, a)` with alpha clamped to [0, 1] and three decimals.
pub fn rgba_css(rgb: [u8; 3], alpha: f32) -> String {
    let a = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], a)
}

/// CSS transform centring an element on `(x, y)` client pixels at `scale`.
pub fn centered_transform(x: f32, y: f32, scale: f32) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3})",
        x,
        y,
        scale.max(0.0)
    )
}

/// Parse an optional data attribute, ignoring surrounding whitespace.
pub fn parse_override<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Particle count override limited to `[1, max]`; zero or garbage is ignored.
pub fn particle_override(raw: Option<&str>, max: usize) -> Option<usize> {
    parse_override::<usize>(raw)
        .filter(|n| *n > 0)
        .map(|n| n.min(max))
}
