//! Custom cursor: a dot, a ring and a soft trail chasing the pointer on damped
//! springs, plus a velocity burst while the pointer moves fast.
//!
//! Everything here is in client pixels. The host copies the resulting
//! [`FollowerPose`] onto its cursor elements each frame.

use crate::blend::{damp, lerp};
use crate::constants::*;
use crate::input::{CursorTracker, InputState};
use crate::scheduler::Animator;
use glam::Vec2;

/// Mass-spring-damper parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Spring {
    pub const fn from_params(p: [f32; 3]) -> Self {
        Self {
            stiffness: p[0],
            damping: p[1],
            mass: p[2],
        }
    }

    /// Semi-implicit Euler step toward `target`, split into substeps no
    /// longer than `FOLLOWER_SPRING_SUBSTEP_SEC`.
    pub fn step(&self, body: &mut SpringBody, target: Vec2, dt_sec: f32) {
        if dt_sec <= 0.0 || self.mass <= 0.0 {
            return;
        }
        let steps = (dt_sec / FOLLOWER_SPRING_SUBSTEP_SEC).ceil().max(1.0);
        let h = dt_sec / steps;
        for _ in 0..steps as u32 {
            let force = (target - body.position) * self.stiffness - body.velocity * self.damping;
            body.velocity += force / self.mass * h;
            body.position += body.velocity * h;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringBody {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Visual state of one cursor element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            opacity: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowerPose {
    pub dot: ElementStyle,
    pub ring: ElementStyle,
    pub trail: ElementStyle,
    pub burst: ElementStyle,
    pub moving: bool,
    pub hovering: bool,
    /// False until the pointer has been seen.
    pub visible: bool,
}

/// Scale/opacity goals for each element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleTargets {
    pub dot: (f32, f32),
    pub ring: (f32, f32),
    pub trail: (f32, f32),
    pub burst: (f32, f32),
}

/// Targets for a pointer moving at `speed` px per frame.
pub fn style_targets(moving: bool, hovering: bool, speed: f32) -> StyleTargets {
    let dot_scale = if hovering { 0.3 } else { 1.0 };
    let ring_scale = if hovering {
        2.0
    } else if moving {
        1.2 + (speed * 0.01).min(0.5)
    } else {
        1.0
    };
    let trail_scale = if moving {
        1.0 + (speed * 0.005).min(0.8)
    } else {
        0.3
    };
    let burst = if moving && speed > FOLLOWER_BURST_MIN_SPEED_PX {
        ((speed * 0.02).min(2.0), (speed * 0.01).min(0.4))
    } else {
        (0.0, 0.0)
    };
    StyleTargets {
        dot: (dot_scale, if moving { 1.0 } else { 0.8 }),
        ring: (ring_scale, if moving { 0.8 } else { 0.4 }),
        trail: (trail_scale, if moving { 0.6 } else { 0.0 }),
        burst,
    }
}

pub struct CursorFollower {
    dot_spring: Spring,
    ring_spring: Spring,
    trail_spring: Spring,
    dot: SpringBody,
    ring: SpringBody,
    trail: SpringBody,
    tracker: CursorTracker,
    pose: FollowerPose,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            dot_spring: Spring::from_params(FOLLOWER_DOT_SPRING),
            ring_spring: Spring::from_params(FOLLOWER_RING_SPRING),
            trail_spring: Spring::from_params(FOLLOWER_TRAIL_SPRING),
            dot: SpringBody::default(),
            ring: SpringBody::default(),
            trail: SpringBody::default(),
            tracker: CursorTracker::new(),
            pose: FollowerPose::default(),
        }
    }

    pub fn pose(&self) -> &FollowerPose {
        &self.pose
    }

    /// Pointer speed in px per frame, zero once the pointer has idled.
    pub fn speed(&self) -> f32 {
        self.tracker.speed()
    }

    pub fn update(&mut self, dt_sec: f32, pointer: Option<Vec2>, hovering: bool) {
        let Some(target) = pointer else {
            return;
        };
        let dt = dt_sec.max(0.0);
        if !self.pose.visible {
            for body in [&mut self.dot, &mut self.ring, &mut self.trail] {
                *body = SpringBody {
                    position: target,
                    velocity: Vec2::ZERO,
                };
            }
            self.pose.visible = true;
        } else {
            self.dot_spring.step(&mut self.dot, target, dt);
            self.ring_spring.step(&mut self.ring, target, dt);
            self.trail_spring.step(&mut self.trail, target, dt);
        }

        self.tracker.update(target, dt);
        let moving = self.tracker.is_moving();
        let goals = style_targets(moving, hovering, self.tracker.speed());
        let t = damp(ALPHA_FOLLOWER_STYLE, dt);

        let pose = &mut self.pose;
        pose.moving = moving;
        pose.hovering = hovering;
        pose.dot.position = self.dot.position;
        pose.ring.position = self.ring.position;
        pose.trail.position = self.trail.position;
        pose.burst.position = target;
        for (style, (scale, opacity)) in [
            (&mut pose.dot, goals.dot),
            (&mut pose.ring, goals.ring),
            (&mut pose.trail, goals.trail),
            (&mut pose.burst, goals.burst),
        ] {
            style.scale = lerp(style.scale, scale, t);
            style.opacity = lerp(style.opacity, opacity, t);
        }
    }
}

impl Animator for CursorFollower {
    fn advance(&mut self, dt_sec: f32, input: &InputState) {
        self.update(dt_sec, input.pointer_px(), input.hovering());
    }
}
