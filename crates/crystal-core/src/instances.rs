//! Flattening of the scene graph into GPU sprite instances.
//!
//! The renderers draw every visible element as a camera-facing sprite. The
//! world position of each sprite is the composition root × group × local.

use crate::constants::*;
use crate::scene::{SceneGraph, Transform};
use glam::{EulerRot, Mat4, Vec3};
use std::f32::consts::TAU;

/// Per-sprite vertex data, matching slot 1 of `SCENE_WGSL`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub glow: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn from_camera(camera: &crate::state::Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
        }
    }
}

const OCTAHEDRON: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Upper bound of sprites a graph with the given populations produces.
pub fn instance_capacity(ring_count: usize, shard_count: usize, point_count: usize) -> usize {
    1 + OCTAHEDRON.len() + ring_count * RING_SPRITES + shard_count + point_count
}

/// Append the sprites for every attached node to `out` (cleared first).
pub fn build_instances(graph: &SceneGraph, out: &mut Vec<InstanceData>) {
    out.clear();
    let root = graph.root.as_ref().map_or(Mat4::IDENTITY, Transform::matrix);

    if let Some(core) = &graph.core {
        let world = root * core.matrix();
        let size = core.scale.abs().max_element() * CORE_RADIUS;
        out.push(sprite(world.transform_point3(Vec3::ZERO), size * 1.6, CORE_COLOR, 1.0));
        for v in OCTAHEDRON {
            out.push(sprite(
                world.transform_point3(v * CORE_RADIUS),
                size * 0.35,
                CORE_COLOR,
                0.6,
            ));
        }
    }

    if let Some(rings) = &graph.rings {
        let group = root * rings.group.matrix();
        let group_scale = rings.group.scale.abs().max_element();
        for ring in &rings.rings {
            let tilt = Mat4::from_euler(EulerRot::XYZ, ring.tilt.x, ring.tilt.y, ring.tilt.z);
            let world = group * tilt;
            for k in 0..RING_SPRITES {
                let a = k as f32 / RING_SPRITES as f32 * TAU;
                let local = Vec3::new(a.cos() * ring.radius, a.sin() * ring.radius, 0.0);
                out.push(sprite(
                    world.transform_point3(local),
                    0.08 * group_scale,
                    ring.color,
                    0.3,
                ));
            }
        }
    }

    if let Some(shards) = &graph.shards {
        let group = root * shards.group.matrix();
        for (i, shard) in shards.shards.iter().enumerate() {
            let world = group * shard.matrix();
            let [r, g, b] = hsl_to_rgb(200.0 + i as f32 * 60.0, 0.7, 0.6);
            out.push(sprite(
                world.transform_point3(Vec3::ZERO),
                SHARD_SIZE * shard.scale.abs().max_element(),
                [r, g, b, 0.8],
                0.5,
            ));
        }
    }

    if let Some(points) = &graph.points {
        for ((pos, col), size) in points
            .positions
            .iter()
            .zip(&points.colors)
            .zip(&points.sizes)
        {
            out.push(sprite(
                root.transform_point3(*pos),
                *size,
                [col.x, col.y, col.z, 0.8],
                0.2,
            ));
        }
    }
}

#[inline]
fn sprite(pos: Vec3, scale: f32, color: [f32; 4], glow: f32) -> InstanceData {
    InstanceData {
        pos: pos.to_array(),
        scale,
        color,
        glow,
    }
}

/// `hue` in degrees (wrapped), saturation and lightness in [0, 1].
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_shader_offsets() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 36);
        assert_eq!(std::mem::size_of::<Uniforms>(), 128);
    }

    #[test]
    fn hsl_primaries() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);
        let blue = hsl_to_rgb(240.0, 1.0, 0.5);
        assert!((blue[2] - 1.0).abs() < 1e-6 && blue[0].abs() < 1e-6);
    }

    #[test]
    fn empty_graph_has_no_sprites() {
        let mut out = vec![sprite(Vec3::ZERO, 1.0, [1.0; 4], 0.0)];
        build_instances(&SceneGraph::default(), &mut out);
        assert!(out.is_empty());
    }
}
