//! Exponential blending helpers shared by every driver.
//!
//! The drivers were tuned with a fixed per-frame factor `α` at 60 Hz. `damp`
//! converts that factor to the actual frame interval so the animation feels
//! the same on 30, 60 or 144 Hz displays while still never overshooting.

use crate::constants::REFERENCE_FPS;
use glam::{Vec2, Vec3};

/// Number of 60 Hz reference frames covered by `dt_sec`.
#[inline]
pub fn frames(dt_sec: f32) -> f32 {
    dt_sec.max(0.0) * REFERENCE_FPS
}

/// Frame-rate compensated blend factor: equals `alpha` for a 1/60 s frame and
/// always stays within [0, 1].
#[inline]
pub fn damp(alpha: f32, dt_sec: f32) -> f32 {
    let a = alpha.clamp(0.0, 1.0);
    if a >= 1.0 {
        return 1.0;
    }
    (1.0 - (1.0 - a).powf(frames(dt_sec))).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t
}

#[inline]
pub fn lerp_vec2(current: Vec2, target: Vec2, t: f32) -> Vec2 {
    current + (target - current) * t
}

#[inline]
pub fn lerp_vec3(current: Vec3, target: Vec3, t: f32) -> Vec3 {
    current + (target - current) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damp_matches_alpha_at_reference_rate() {
        let a = damp(0.08, 1.0 / 60.0);
        assert!((a - 0.08).abs() < 1e-5);
    }

    #[test]
    fn damp_grows_with_longer_frames_but_stays_bounded() {
        let short = damp(0.1, 1.0 / 144.0);
        let long = damp(0.1, 1.0 / 30.0);
        assert!(short < 0.1 && long > 0.1);
        assert!(damp(0.1, 10.0) <= 1.0);
        assert_eq!(damp(0.1, 0.0), 0.0);
        assert_eq!(damp(0.1, -1.0), 0.0);
    }

    #[test]
    fn lerp_never_overshoots() {
        let t = damp(0.12, 1.0 / 60.0);
        let mut v = 10.0_f32;
        for _ in 0..50 {
            let next = lerp(v, 2.0, t);
            assert!(next <= v && next >= 2.0);
            v = next;
        }
    }
}
