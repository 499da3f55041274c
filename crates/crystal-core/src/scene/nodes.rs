use crate::blend::{lerp, lerp_vec3};
use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

/// Position, XYZ Euler rotation (radians) and per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }

    /// Blend one rotation axis toward `target`; `None` leaves it untouched.
    pub fn blend_rotation(&mut self, target: [Option<f32>; 3], t: f32) {
        let axes = [
            &mut self.rotation.x,
            &mut self.rotation.y,
            &mut self.rotation.z,
        ];
        for (axis, goal) in axes.into_iter().zip(target) {
            if let Some(goal) = goal {
                *axis = lerp(*axis, goal, t);
            }
        }
    }

    pub fn blend_scale(&mut self, target: Vec3, t: f32) {
        self.scale = lerp_vec3(self.scale, target, t);
    }
}

/// One of the static concentric rings around the core.
#[derive(Clone, Copy, Debug)]
pub struct Ring {
    pub radius: f32,
    pub tilt: Vec3,
    pub color: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct RingSet {
    pub group: Transform,
    pub rings: Vec<Ring>,
}

impl Default for RingSet {
    fn default() -> Self {
        let rings = RING_RADII
            .iter()
            .zip(RING_TILTS)
            .zip(RING_COLORS)
            .map(|((&radius, tilt), color)| Ring {
                radius,
                tilt: Vec3::from(tilt),
                color,
            })
            .collect();
        Self {
            group: Transform::default(),
            rings,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShardGroup {
    pub group: Transform,
    pub shards: Vec<Transform>,
}

impl ShardGroup {
    pub fn new(count: usize) -> Self {
        Self {
            group: Transform::default(),
            shards: vec![Transform::at(Vec3::new(SHARD_ORBIT_RADIUS, 0.0, 0.0)); count],
        }
    }
}

impl Default for ShardGroup {
    fn default() -> Self {
        Self::new(SHARD_COUNT)
    }
}

/// Free-floating points orbiting the crystal, each with its own colour.
#[derive(Clone, Debug, Default)]
pub struct PointField {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
}

impl PointField {
    /// Scatter `count` points on spherical shells between the min and max radius.
    pub fn seeded(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = Self {
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            sizes: Vec::with_capacity(count),
        };
        for _ in 0..count {
            let radius = POINT_RADIUS_MIN + rng.gen::<f32>() * POINT_RADIUS_SPAN;
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = rng.gen::<f32>() * std::f32::consts::PI;
            field.positions.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ));
            let energy = rng.gen::<f32>();
            field
                .colors
                .push(Vec3::new(lerp(0.1, 1.0, energy), lerp(0.5, 1.0, energy), 1.0));
            field
                .sizes
                .push(POINT_SIZE_MIN + rng.gen::<f32>() * POINT_SIZE_SPAN);
        }
        field
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The node slots of the crystal scene. A `None` slot has not been attached
/// by the host yet and is skipped by the driver.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    pub root: Option<Transform>,
    pub core: Option<Transform>,
    pub rings: Option<RingSet>,
    pub shards: Option<ShardGroup>,
    pub points: Option<PointField>,
}

/// Identifies a node slot for attach/detach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneNode {
    Root,
    Core,
    Rings,
    Shards,
    Points,
}

impl SceneNode {
    pub const ALL: [SceneNode; 5] = [
        SceneNode::Root,
        SceneNode::Core,
        SceneNode::Rings,
        SceneNode::Shards,
        SceneNode::Points,
    ];
}
