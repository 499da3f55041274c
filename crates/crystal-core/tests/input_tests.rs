use crystal_core::blend::damp;
use crystal_core::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

#[test]
fn pointer_is_unset_until_first_move() {
    let mut input = InputState::new(800.0, 600.0);
    assert_eq!(input.pointer_px(), None);
    assert_eq!(input.cursor(), Vec2::ZERO);
    input.pointer_moved(200.0, 150.0);
    assert_eq!(input.pointer_px(), Some(Vec2::new(200.0, 150.0)));
    assert_eq!(input.cursor(), Vec2::new(-0.5, 0.5));
}

#[test]
fn resize_renormalizes_cursor() {
    let mut input = InputState::new(800.0, 600.0);
    input.pointer_moved(400.0, 300.0);
    assert_eq!(input.cursor(), Vec2::ZERO);
    input.resized(400.0, 300.0);
    assert_eq!(input.cursor(), Vec2::new(1.0, -1.0));
}

#[test]
fn scroll_progress_is_clamped() {
    let mut input = InputState::new(800.0, 500.0);
    input.scrolled(-40.0);
    assert_eq!(input.default_scroll_progress(), 0.0);
    input.scrolled(1000.0);
    assert!((input.default_scroll_progress() - 0.5).abs() < 1e-6);
    input.scrolled(1.0e6);
    assert_eq!(input.default_scroll_progress(), 1.0);
    let empty = InputState::new(0.0, 0.0);
    assert_eq!(empty.default_scroll_progress(), 0.0);
}

#[test]
fn smoothed_cursor_converges_geometrically() {
    let mut tracker = CursorTracker::new();
    let sample = Vec2::new(0.6, -0.4);
    let ratio = 1.0 - damp(CURSOR_EASE_BASE, DT);
    let mut err = sample.length();
    for _ in 0..100 {
        tracker.update(sample, DT);
        let next = (sample - tracker.smoothed()).length();
        assert!(next < err);
        assert!((next - err * ratio).abs() < 1e-4);
        err = next;
    }
    assert!(err < 1e-4);
}

#[test]
fn velocity_holds_then_resets_after_idle_window() {
    let mut tracker = CursorTracker::new();
    tracker.update(Vec2::ZERO, DT);
    tracker.update(Vec2::new(0.1, 0.0), DT);
    assert!((tracker.velocity() - Vec2::new(0.1, 0.0)).length() < 1e-6);
    for _ in 0..3 {
        tracker.update(Vec2::new(0.1, 0.0), DT);
    }
    assert!(tracker.is_moving());
    for _ in 0..10 {
        tracker.update(Vec2::new(0.1, 0.0), DT);
    }
    assert!(!tracker.is_moving());
    assert_eq!(tracker.speed(), 0.0);
}

#[test]
fn fast_motion_tracks_faster() {
    let mut slow = CursorTracker::new();
    let mut fast = CursorTracker::new();
    slow.update(Vec2::ZERO, DT);
    fast.update(Vec2::ZERO, DT);
    slow.update(Vec2::new(0.05, 0.0), DT);
    fast.update(Vec2::new(0.9, 0.0), DT);
    let slow_frac = slow.smoothed().x / 0.05;
    let fast_frac = fast.smoothed().x / 0.9;
    assert!(fast_frac > slow_frac);
    assert!(fast_frac <= damp(CURSOR_EASE_MAX, DT) + 1e-6);
}
