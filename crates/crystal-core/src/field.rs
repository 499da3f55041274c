//! 2D particle field drawn behind the page content.
//!
//! A fixed population of point masses drifts across the canvas, is gently
//! pulled toward the live pointer and bounces off the canvas edges. Pairs of
//! particles closer than the link distance are joined by a line whose opacity
//! fades with distance. Linking is an all-pairs pass, which is what bounds the
//! practical population size.

use crate::blend::frames;
use crate::constants::*;
use crate::error::{ensure_finite, ensure_positive, ConfigError};
use crate::input::InputState;
use crate::scheduler::Animator;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub seed: u64,
    pub link_distance: f32,
    pub link_max_opacity: f32,
    pub attract_radius: f32,
    pub attract_strength: f32,
    /// Max initial speed per axis, px per reference frame.
    pub initial_speed: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: FIELD_PARTICLE_COUNT,
            seed: FIELD_SEED,
            link_distance: FIELD_LINK_DISTANCE_PX,
            link_max_opacity: FIELD_LINK_MAX_OPACITY,
            attract_radius: FIELD_ATTRACT_RADIUS_PX,
            attract_strength: FIELD_ATTRACT_STRENGTH,
            initial_speed: FIELD_INITIAL_SPEED,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyPopulation {
                name: "particle_count",
            });
        }
        ensure_positive("link_distance", self.link_distance)?;
        ensure_positive("attract_radius", self.attract_radius)?;
        ensure_finite("attract_strength", self.attract_strength)?;
        ensure_finite("link_max_opacity", self.link_max_opacity)?;
        if !(self.initial_speed >= 0.0 && self.initial_speed.is_finite()) {
            return Err(ConfigError::NonPositive {
                name: "initial_speed",
                value: self.initial_speed,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

/// Line between two particles, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Drawing target for the field. Colours are fixed by the surface; the field
/// only hands over geometry and opacity.
pub trait FieldSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32);
}

/// Opacity of a link at `distance`: `max_opacity` when touching, fading
/// linearly to zero at `max_distance`.
#[inline]
pub fn link_opacity(distance: f32, max_distance: f32, max_opacity: f32) -> f32 {
    if distance >= max_distance || max_distance <= 0.0 {
        return 0.0;
    }
    max_opacity * (1.0 - distance.max(0.0) / max_distance)
}

pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    links: Vec<Link>,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let mut rng = StdRng::seed_from_u64(config.seed);
        let speed = config.initial_speed;
        let particles = (0..config.particle_count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                    (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                ),
                size: FIELD_SIZE_MIN + rng.gen::<f32>() * FIELD_SIZE_SPAN,
                opacity: FIELD_OPACITY_MIN + rng.gen::<f32>() * FIELD_OPACITY_SPAN,
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] seeded {} particles in {:.0}x{:.0}",
            particles.len(),
            bounds.x,
            bounds.y
        );
        let mut field = Self {
            config,
            bounds,
            particles,
            links: Vec::new(),
        };
        field.rebuild_links();
        Ok(field)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Adopt new canvas bounds. Particles keep their positions; anything now
    /// outside is folded back in on the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Advance one frame of `frame_count` reference frames toward `pointer`.
    pub fn step(&mut self, pointer: Option<Vec2>, frame_count: f32) {
        let n = frame_count.max(0.0);
        let radius = self.config.attract_radius;
        let strength = self.config.attract_strength;
        let bounds = self.bounds;
        for p in &mut self.particles {
            if let Some(target) = pointer {
                let offset = target - p.position;
                if offset.length() < radius {
                    p.velocity += offset * strength * n;
                }
            }
            p.position += p.velocity * n;
            reflect_axis(&mut p.position.x, &mut p.velocity.x, bounds.x);
            reflect_axis(&mut p.position.y, &mut p.velocity.y, bounds.y);
        }
        self.rebuild_links();
    }

    fn rebuild_links(&mut self) {
        self.links.clear();
        let max_d = self.config.link_distance;
        let max_d2 = max_d * max_d;
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let d2 = a.position.distance_squared(b.position);
                if d2 < max_d2 {
                    self.links.push(Link {
                        a: i,
                        b: j,
                        opacity: link_opacity(d2.sqrt(), max_d, self.config.link_max_opacity),
                    });
                }
            }
        }
    }

    pub fn draw(&self, surface: &mut impl FieldSurface) {
        surface.clear(self.bounds.x, self.bounds.y);
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, p.opacity);
        }
        for link in &self.links {
            surface.stroke_line(
                self.particles[link.a].position,
                self.particles[link.b].position,
                link.opacity,
            );
        }
    }
}

impl Animator for ParticleField {
    fn advance(&mut self, dt_sec: f32, input: &InputState) {
        self.step(input.pointer_px(), frames(dt_sec));
    }
}

// Fold a coordinate back into [0, extent] and point its velocity inward.
#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = extent;
        *vel = -vel.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_clamps_and_points_inward() {
        let (mut p, mut v) = (-3.0, -1.0);
        reflect_axis(&mut p, &mut v, 10.0);
        assert_eq!((p, v), (0.0, 1.0));
        let (mut p, mut v) = (12.0, 2.0);
        reflect_axis(&mut p, &mut v, 10.0);
        assert_eq!((p, v), (10.0, -2.0));
        let (mut p, mut v) = (5.0, 2.0);
        reflect_axis(&mut p, &mut v, 10.0);
        assert_eq!((p, v), (5.0, 2.0));
    }

    #[test]
    fn links_are_unordered_pairs() {
        let field = ParticleField::new(FieldConfig::default(), 300.0, 300.0).unwrap();
        for l in field.links() {
            assert!(l.a < l.b);
            let d = field.particles()[l.a]
                .position
                .distance(field.particles()[l.b].position);
            assert!(d < FIELD_LINK_DISTANCE_PX);
        }
    }

    #[test]
    fn empty_population_is_rejected() {
        let cfg = FieldConfig {
            particle_count: 0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            ParticleField::new(cfg, 10.0, 10.0),
            Err(ConfigError::EmptyPopulation { .. })
        ));
    }
}
