//! Pointer and scroll sampling.
//!
//! `InputState` is written by the host's event handlers and read once per
//! frame by every driver. It never smooths anything itself; per-driver
//! smoothing lives in [`CursorTracker`], so the tick rate of the simulation is
//! decoupled from the rate at which pointer events arrive.

use crate::blend::{damp, lerp_vec2};
use crate::constants::{
    CURSOR_EASE_BASE, CURSOR_EASE_MAX, CURSOR_EASE_VELOCITY_GAIN, CURSOR_IDLE_RESET_SEC,
    SCROLL_PAGES,
};
use glam::Vec2;

/// Latest raw pointer/scroll/viewport readings from the host.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    viewport: Vec2,
    pointer_px: Option<Vec2>,
    cursor: Vec2,
    scroll_offset: f32,
    hovering: bool,
}

impl InputState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            ..Self::default()
        }
    }

    /// Record a pointer move in client pixels.
    ///
    /// The normalized sample maps the viewport to [-1, 1] on both axes with
    /// +y pointing up. Positions outside the window are kept as-is.
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        let px = Vec2::new(client_x, client_y);
        self.pointer_px = Some(px);
        self.cursor = normalize_pointer(px, self.viewport);
    }

    pub fn scrolled(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    pub fn resized(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
        if let Some(px) = self.pointer_px {
            self.cursor = normalize_pointer(px, self.viewport);
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Raw pointer position in client pixels, `None` until the first move.
    pub fn pointer_px(&self) -> Option<Vec2> {
        self.pointer_px
    }

    /// Normalized cursor sample in [-1, 1]².
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    /// Scroll offset normalized over `pages` viewport heights, clamped to [0, 1].
    pub fn scroll_progress(&self, pages: f32) -> f32 {
        let span = self.viewport.y * pages;
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        (self.scroll_offset / span).clamp(0.0, 1.0)
    }

    /// Scroll progress with the default page span.
    pub fn default_scroll_progress(&self) -> f32 {
        self.scroll_progress(SCROLL_PAGES)
    }
}

/// Map client pixels to the [-1, 1] cursor space (+y up).
#[inline]
pub fn normalize_pointer(px: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (px.x / viewport.x) * 2.0 - 1.0,
        -(px.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Adaptive easing: faster pointer motion tracks faster, up to a cap.
#[inline]
pub fn adaptive_ease(velocity: Vec2) -> f32 {
    (CURSOR_EASE_BASE + velocity.length() * CURSOR_EASE_VELOCITY_GAIN).min(CURSOR_EASE_MAX)
}

/// Per-driver view of the cursor: frame velocity plus a damped follow.
#[derive(Clone, Debug, Default)]
pub struct CursorTracker {
    previous: Option<Vec2>,
    velocity: Vec2,
    smoothed: Vec2,
    idle_sec: f32,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh velocity and the smoothed cursor from this frame's sample.
    pub fn update(&mut self, sample: Vec2, dt_sec: f32) {
        let previous = self.previous.unwrap_or(sample);
        let delta = sample - previous;
        self.previous = Some(sample);

        if delta != Vec2::ZERO {
            self.velocity = delta;
            self.idle_sec = 0.0;
        } else {
            self.idle_sec += dt_sec.max(0.0);
            if self.idle_sec >= CURSOR_IDLE_RESET_SEC {
                self.velocity = Vec2::ZERO;
            }
        }

        let t = damp(adaptive_ease(self.velocity), dt_sec);
        self.smoothed = lerp_vec2(self.smoothed, sample, t);
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// True while the pointer moved within the idle window.
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let vp = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_pointer(Vec2::ZERO, vp), Vec2::new(-1.0, 1.0));
        assert_eq!(normalize_pointer(vp, vp), Vec2::new(1.0, -1.0));
        assert_eq!(normalize_pointer(vp * 0.5, vp), Vec2::ZERO);
    }

    #[test]
    fn zero_viewport_yields_centre() {
        assert_eq!(normalize_pointer(Vec2::new(5.0, 5.0), Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn ease_is_capped() {
        assert!((adaptive_ease(Vec2::ZERO) - CURSOR_EASE_BASE).abs() < 1e-6);
        assert_eq!(adaptive_ease(Vec2::new(100.0, 0.0)), CURSOR_EASE_MAX);
    }
}
