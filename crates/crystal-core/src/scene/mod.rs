//! 3D crystal scene driver.
//!
//! Every frame the driver derives targets for each node from elapsed time,
//! scroll progress and the smoothed cursor, then blends the node's current
//! transform toward that target. Nothing ever snaps; a target that jumps (for
//! example when the active section changes) is reached over a few frames.

mod nodes;
mod profiles;

pub use nodes::*;
pub use profiles::*;

use crate::blend::{damp, frames, lerp, lerp_vec3};
use crate::constants::*;
use crate::error::{ensure_alpha, ensure_positive, ConfigError};
use crate::input::{CursorTracker, InputState};
use crate::scheduler::Animator;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub section_count: usize,
    /// Viewport heights covered by the full scroll range.
    pub scroll_pages: f32,
    pub shard_count: usize,
    pub point_count: usize,
    pub point_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            section_count: SECTION_COUNT,
            scroll_pages: SCROLL_PAGES,
            shard_count: SHARD_COUNT,
            point_count: POINT_COUNT,
            point_seed: POINT_SEED,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.section_count == 0 {
            return Err(ConfigError::EmptyPopulation {
                name: "section_count",
            });
        }
        ensure_positive("scroll_pages", self.scroll_pages)
    }
}

/// Cursor-derived offsets shared by every node this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Influence {
    pub position: Vec2,
    pub rotation: Vec3,
    pub velocity: f32,
}

impl Influence {
    /// Offsets for a smoothed cursor, attenuated by distance from the centre
    /// with a floor so the effect never vanishes at the edges.
    pub fn from_cursor(smoothed: Vec2, velocity: Vec2) -> Self {
        let k = (1.0 - smoothed.length() * INFLUENCE_FALLOFF).max(INFLUENCE_FLOOR);
        Self {
            position: Vec2::new(
                smoothed.x * INFLUENCE_POS_X * k,
                smoothed.y * INFLUENCE_POS_Y * k,
            ),
            rotation: Vec3::new(
                smoothed.y * INFLUENCE_ROT_X * k,
                smoothed.x * INFLUENCE_ROT_Y * k,
                (smoothed.x + smoothed.y) * INFLUENCE_ROT_Z * k,
            ),
            velocity: velocity.length(),
        }
    }
}

/// Root group target: scroll descent plus cursor sway, ambient spin plus tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootTarget {
    pub position: Vec3,
    pub rotation: Vec3,
}

pub fn root_target(time: f32, progress: f32, influence: &Influence) -> RootTarget {
    RootTarget {
        position: Vec3::new(
            influence.position.x,
            -progress * ROOT_DESCENT,
            influence.position.y,
        ),
        rotation: Vec3::new(
            influence.rotation.x,
            time * ROOT_SPIN_SPEED
                + progress * TAU * ROOT_SCROLL_TURNS
                + influence.rotation.y
                + influence.velocity * ROOT_VELOCITY_SPIN,
            influence.rotation.z,
        ),
    }
}

/// Per-frame signals the driver computed most recently.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSignals {
    pub time: f32,
    pub progress: f32,
    pub section: usize,
    pub section_progress: f32,
    pub influence: Influence,
}

pub struct SceneDriver {
    config: SceneConfig,
    profiles: ProfileTable,
    graph: SceneGraph,
    tracker: CursorTracker,
    elapsed: f32,
    signals: FrameSignals,
}

impl SceneDriver {
    /// A driver with no nodes attached yet.
    pub fn new(config: SceneConfig, profiles: ProfileTable) -> Result<Self, ConfigError> {
        config.validate()?;
        for p in (0..profiles.len()).map(|i| profiles.get(i)) {
            ensure_alpha("profile.alpha", p.alpha)?;
        }
        Ok(Self {
            config,
            profiles,
            graph: SceneGraph::default(),
            tracker: CursorTracker::new(),
            elapsed: 0.0,
            signals: FrameSignals::default(),
        })
    }

    /// A driver with every node attached, as after the host has mounted the scene.
    pub fn mounted(config: SceneConfig) -> Result<Self, ConfigError> {
        let mut driver = Self::new(config, ProfileTable::default())?;
        for node in SceneNode::ALL {
            driver.attach(node);
        }
        Ok(driver)
    }

    /// Create the node in `slot` with its initial state. Re-attaching keeps
    /// the existing node.
    pub fn attach(&mut self, node: SceneNode) {
        let g = &mut self.graph;
        match node {
            SceneNode::Root => {
                g.root.get_or_insert_with(Transform::default);
            }
            SceneNode::Core => {
                g.core.get_or_insert_with(Transform::default);
            }
            SceneNode::Rings => {
                g.rings.get_or_insert_with(RingSet::default);
            }
            SceneNode::Shards => {
                let count = self.config.shard_count;
                g.shards.get_or_insert_with(|| ShardGroup::new(count));
            }
            SceneNode::Points => {
                let (count, seed) = (self.config.point_count, self.config.point_seed);
                g.points.get_or_insert_with(|| PointField::seeded(count, seed));
            }
        }
        log::debug!("[scene] attached {:?}", node);
    }

    pub fn detach(&mut self, node: SceneNode) {
        let g = &mut self.graph;
        match node {
            SceneNode::Root => g.root = None,
            SceneNode::Core => g.core = None,
            SceneNode::Rings => g.rings = None,
            SceneNode::Shards => g.shards = None,
            SceneNode::Points => g.points = None,
        }
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn signals(&self) -> &FrameSignals {
        &self.signals
    }

    pub fn tracker(&self) -> &CursorTracker {
        &self.tracker
    }

    pub fn active_profile(&self) -> &SectionProfile {
        self.profiles.get(self.signals.section)
    }

    pub fn update(&mut self, dt_sec: f32, input: &InputState) {
        let dt = dt_sec.max(0.0);
        self.elapsed += dt;
        self.tracker.update(input.cursor(), dt);

        let progress = input.scroll_progress(self.config.scroll_pages);
        let sections = self.config.section_count;
        let section = section_index(progress, sections);
        if section != self.signals.section {
            log::debug!("[scene] section {} -> {}", self.signals.section, section);
        }
        self.signals = FrameSignals {
            time: self.elapsed,
            progress,
            section,
            section_progress: section_progress(progress, sections),
            influence: Influence::from_cursor(self.tracker.smoothed(), self.tracker.velocity()),
        };

        let s = self.signals;
        let cursor = self.tracker.smoothed();
        let profile = *self.profiles.get(s.section);
        let g = &mut self.graph;

        if let Some(root) = g.root.as_mut() {
            update_root(root, &s, dt);
        }
        if let Some(core) = g.core.as_mut() {
            update_core(core, &profile, &s, cursor, dt);
        }
        if let Some(rings) = g.rings.as_mut() {
            update_rings(rings, &s, cursor, dt);
        }
        if let Some(shards) = g.shards.as_mut() {
            update_shards(shards, &s, cursor, dt);
        }
        if let Some(points) = g.points.as_mut() {
            update_points(points, profile.color, &s, cursor, dt);
        }
    }
}

impl Animator for SceneDriver {
    fn advance(&mut self, dt_sec: f32, input: &InputState) {
        self.update(dt_sec, input);
    }
}

fn update_root(root: &mut Transform, s: &FrameSignals, dt: f32) {
    let target = root_target(s.time, s.progress, &s.influence);
    let sway = damp(ALPHA_ROOT_SWAY, dt);
    root.position.x = lerp(root.position.x, target.position.x, sway);
    root.position.z = lerp(root.position.z, target.position.z, sway);
    root.position.y = lerp(
        root.position.y,
        target.position.y,
        damp(ALPHA_ROOT_DESCENT, dt),
    );
    root.rotation.y = lerp(root.rotation.y, target.rotation.y, damp(ALPHA_ROOT_SPIN, dt));
    let tilt = damp(ALPHA_ROOT_TILT, dt);
    root.rotation.x = lerp(root.rotation.x, target.rotation.x, tilt);
    root.rotation.z = lerp(root.rotation.z, target.rotation.z, tilt);
}

fn update_core(
    core: &mut Transform,
    profile: &SectionProfile,
    s: &FrameSignals,
    cursor: Vec2,
    dt: f32,
) {
    let inputs = ProfileInputs {
        time: s.time,
        section_progress: s.section_progress,
        cursor,
        rotation: s.influence.rotation,
        velocity_scale: 1.0 + s.influence.velocity * CORE_VELOCITY_SCALE,
    };
    let t = damp(profile.alpha, dt);
    core.blend_scale((profile.scale)(&inputs), t);
    core.blend_rotation((profile.rotation)(&inputs), t);
}

fn update_rings(rings: &mut RingSet, s: &FrameSignals, cursor: Vec2, dt: f32) {
    let r = s.influence.rotation;
    let target = [
        Some(s.time * 0.2 + r.x * 0.4),
        Some(-s.time * 0.3 + r.y * 0.5),
        Some(s.time * 0.1 + r.z * 0.3),
    ];
    rings
        .group
        .blend_rotation(target, damp(ALPHA_RING_SPIN, dt));
    let scale = 0.5 + s.progress * 0.8 + cursor.x.abs() * 0.15 + s.influence.velocity * 0.05;
    rings
        .group
        .blend_scale(Vec3::splat(scale), damp(ALPHA_RING_SCALE, dt));
}

fn update_shards(shards: &mut ShardGroup, s: &FrameSignals, cursor: Vec2, dt: f32) {
    let r = s.influence.rotation;
    let t = s.time;
    shards.group.blend_rotation(
        [
            Some((t * 0.3).sin() * 0.2 + r.x * 0.4),
            Some(t * 0.5 + r.y * 0.6),
            None,
        ],
        damp(ALPHA_SHARD_GROUP, dt),
    );

    let count = shards.shards.len().max(1) as f32;
    let spin = damp(ALPHA_SHARD_SPIN, dt);
    let orbit = damp(ALPHA_SHARD_ORBIT, dt);
    for (i, shard) in shards.shards.iter_mut().enumerate() {
        let fi = i as f32;
        let speed_x = 0.5 + fi * 0.1 + cursor.x.abs() * 0.3;
        let speed_z = 0.3 + fi * 0.05 + cursor.y.abs() * 0.25;
        shard.blend_rotation([Some(t * speed_x), None, Some(t * speed_z)], spin);

        let radius = SHARD_ORBIT_RADIUS + (t * 0.5 + fi).sin() * 0.5 + cursor.x.abs() * 0.4;
        let angle = t * 0.4 + fi * (TAU / count) + cursor.y * 0.3;
        let target = Vec3::new(
            angle.cos() * radius,
            (t * 0.6 + fi).sin() * 0.5 + cursor.y * 0.3,
            angle.sin() * radius,
        );
        shard.position = lerp_vec3(shard.position, target, orbit);
    }
}

fn update_points(points: &mut PointField, color: Vec3, s: &FrameSignals, cursor: Vec2, dt: f32) {
    let step = frames(dt);
    let orbit = damp(ALPHA_POINT_ORBIT, dt);
    let lift = damp(ALPHA_POINT_LIFT, dt);
    let tint = damp(ALPHA_POINT_COLOR, dt);
    for (i, (pos, col)) in points
        .positions
        .iter_mut()
        .zip(points.colors.iter_mut())
        .enumerate()
    {
        let orbit_speed = 0.1 + (i % 20) as f32 * 0.01 + cursor.x.abs() * 0.03;
        let vertical_speed = 0.05 + (i % 15) as f32 * 0.005 + cursor.y.abs() * 0.02;
        let radius = (pos.x * pos.x + pos.z * pos.z).sqrt();
        let angle = pos.z.atan2(pos.x) + (orbit_speed + cursor.x * 0.02) * step;
        let target_y = pos.y
            + ((s.time * vertical_speed + i as f32 * 0.1).sin() * 0.02 + cursor.y * 0.01) * step;

        // Blend along the chord, then put the point back on its circle.
        let xz = Vec2::new(
            lerp(pos.x, radius * angle.cos(), orbit),
            lerp(pos.z, radius * angle.sin(), orbit),
        );
        let xz = xz.normalize_or_zero() * radius;
        pos.x = xz.x;
        pos.z = xz.y;
        pos.y = lerp(pos.y, target_y, lift);
        *col = lerp_vec3(*col, color, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_cursor_has_no_offset() {
        let inf = Influence::from_cursor(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(inf, Influence::default());
    }

    #[test]
    fn influence_never_drops_below_floor() {
        let far = Influence::from_cursor(Vec2::new(10.0, 0.0), Vec2::ZERO);
        assert!((far.position.x - 10.0 * INFLUENCE_POS_X * INFLUENCE_FLOOR).abs() < 1e-4);
    }

    #[test]
    fn invalid_profile_alpha_is_rejected() {
        let mut profiles = default_profiles().to_vec();
        profiles[2].alpha = 0.0;
        let res = SceneDriver::new(SceneConfig::default(), ProfileTable::new(profiles));
        assert!(matches!(res, Err(ConfigError::AlphaOutOfRange { .. })));
    }
}
