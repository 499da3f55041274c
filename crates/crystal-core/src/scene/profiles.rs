//! Per-section behaviour of the crystal core.
//!
//! Each page section gets one `SectionProfile`: how the core should scale and
//! rotate, how quickly it gets there, and which colour the point field drifts
//! toward. The driver looks profiles up by section index instead of branching.

use crate::constants::{ALPHA_CORE_NEUTRAL, NEUTRAL_COLOR, SECTION_COUNT};
use glam::{Vec2, Vec3};

/// Signals a profile formula may depend on.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProfileInputs {
    /// Seconds since the driver started.
    pub time: f32,
    /// Progress within the active section, [0, 1].
    pub section_progress: f32,
    /// Smoothed cursor in [-1, 1]².
    pub cursor: Vec2,
    /// Cursor-influence rotation offset (see `Influence`).
    pub rotation: Vec3,
    /// `1 + speed × CORE_VELOCITY_SCALE`.
    pub velocity_scale: f32,
}

/// Per-axis rotation targets; `None` leaves the axis where it is.
pub type AxisTargets = [Option<f32>; 3];

#[derive(Clone, Copy)]
pub struct SectionProfile {
    pub name: &'static str,
    pub alpha: f32,
    pub color: Vec3,
    pub scale: fn(&ProfileInputs) -> Vec3,
    pub rotation: fn(&ProfileInputs) -> AxisTargets,
}

impl std::fmt::Debug for SectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionProfile")
            .field("name", &self.name)
            .field("alpha", &self.alpha)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl SectionProfile {
    /// Fallback used when an index has no profile: relax to unit scale.
    pub const NEUTRAL: SectionProfile = SectionProfile {
        name: "neutral",
        alpha: ALPHA_CORE_NEUTRAL,
        color: Vec3::new(NEUTRAL_COLOR[0], NEUTRAL_COLOR[1], NEUTRAL_COLOR[2]),
        scale: neutral_scale,
        rotation: neutral_rotation,
    };
}

/// Profile table indexed by section.
#[derive(Clone, Debug)]
pub struct ProfileTable {
    profiles: Vec<SectionProfile>,
}

impl ProfileTable {
    pub fn new(profiles: Vec<SectionProfile>) -> Self {
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile for `index`, or the neutral fallback when there is none.
    pub fn get(&self, index: usize) -> &SectionProfile {
        self.profiles.get(index).unwrap_or(&SectionProfile::NEUTRAL)
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::new(default_profiles().to_vec())
    }
}

/// Section index for a scroll progress in [0, 1], always within
/// `[0, section_count - 1]` (progress 1 belongs to the last section).
#[inline]
pub fn section_index(progress: f32, section_count: usize) -> usize {
    if section_count == 0 {
        return 0;
    }
    let scaled = progress.clamp(0.0, 1.0) * section_count as f32;
    (scaled.floor() as usize).min(section_count - 1)
}

/// Progress within the active section, [0, 1].
#[inline]
pub fn section_progress(progress: f32, section_count: usize) -> f32 {
    if section_count == 0 {
        return 0.0;
    }
    let scaled = progress.clamp(0.0, 1.0) * section_count as f32;
    let index = section_index(progress, section_count) as f32;
    (scaled - index).clamp(0.0, 1.0)
}

pub fn default_profiles() -> [SectionProfile; SECTION_COUNT] {
    [
        SectionProfile {
            name: "hero",
            alpha: 0.08,
            color: Vec3::new(0.2, 0.5, 1.0),
            scale: hero_scale,
            rotation: hero_rotation,
        },
        SectionProfile {
            name: "services",
            alpha: 0.10,
            color: Vec3::new(0.5, 0.2, 1.0),
            scale: services_scale,
            rotation: services_rotation,
        },
        SectionProfile {
            name: "about",
            alpha: 0.09,
            color: Vec3::new(0.2, 1.0, 1.0),
            scale: about_scale,
            rotation: about_rotation,
        },
        SectionProfile {
            name: "projects",
            alpha: 0.11,
            color: Vec3::new(0.2, 1.0, 0.4),
            scale: projects_scale,
            rotation: projects_rotation,
        },
        SectionProfile {
            name: "contact",
            alpha: 0.12,
            color: Vec3::new(1.0, 0.8, 0.2),
            scale: contact_scale,
            rotation: contact_rotation,
        },
    ]
}

fn neutral_scale(_: &ProfileInputs) -> Vec3 {
    Vec3::ONE
}

fn neutral_rotation(_: &ProfileInputs) -> AxisTargets {
    [None, None, None]
}

// Gentle pulse.
fn hero_scale(p: &ProfileInputs) -> Vec3 {
    let s = (1.0 + (p.time * 2.0).sin() * 0.1 + p.cursor.x.abs() * 0.08) * p.velocity_scale;
    Vec3::splat(s)
}

fn hero_rotation(p: &ProfileInputs) -> AxisTargets {
    [
        Some(p.time * 0.3 + p.rotation.x * 0.7),
        None,
        Some(p.time * 0.2 + p.rotation.z * 0.5),
    ]
}

// Stretched diamond, widening through the section.
fn services_scale(p: &ProfileInputs) -> Vec3 {
    let s = (0.8 + p.section_progress * 0.4 + p.cursor.y.abs() * 0.12) * p.velocity_scale;
    Vec3::new(s, 1.2 * p.velocity_scale, s)
}

fn services_rotation(p: &ProfileInputs) -> AxisTargets {
    [
        Some(p.time * 0.5 + p.rotation.x * 0.8),
        Some(p.time * 0.8 + p.rotation.y * 0.9),
        None,
    ]
}

// Fluid morph, squashing one axis against the others.
fn about_scale(p: &ProfileInputs) -> Vec3 {
    let morph = (p.time * 1.5).sin() * 0.3 + p.cursor.x * 0.25;
    Vec3::new(1.0 + morph, 1.5 - morph * 0.5, 1.0 + morph)
}

fn about_rotation(p: &ProfileInputs) -> AxisTargets {
    [None, None, Some(p.time * 0.4 + p.rotation.z * 1.2)]
}

fn projects_scale(p: &ProfileInputs) -> Vec3 {
    let reach = p.cursor.x.abs() + p.cursor.y.abs();
    let s = (1.2 + (p.time * 1.2).cos() * 0.2 + reach * 0.15) * p.velocity_scale;
    Vec3::splat(s)
}

fn projects_rotation(p: &ProfileInputs) -> AxisTargets {
    [
        Some(p.time * 0.6 + p.rotation.x * 0.9),
        Some(p.time * 0.3 + p.rotation.y * 0.8),
        Some(p.time * 0.1 + p.rotation.z * 0.6),
    ]
}

// Strong glow pulse, most responsive to the cursor.
fn contact_scale(p: &ProfileInputs) -> Vec3 {
    let reach = p.cursor.x.abs() + p.cursor.y.abs();
    let s = (1.3 + (p.time * 3.0).sin() * 0.2 + reach * 0.2) * p.velocity_scale;
    Vec3::splat(s)
}

fn contact_rotation(p: &ProfileInputs) -> AxisTargets {
    [None, Some(p.time * 0.4 + p.rotation.y * 1.5), None]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_stay_in_range() {
        assert_eq!(section_index(0.0, 5), 0);
        assert_eq!(section_index(1.0, 5), 4);
        assert_eq!(section_index(0.2, 5), 1);
        assert_eq!(section_index(-3.0, 5), 0);
        assert_eq!(section_index(7.0, 5), 4);
        assert_eq!(section_index(0.5, 0), 0);
    }

    #[test]
    fn last_section_completes_at_full_progress() {
        assert!((section_progress(1.0, 5) - 1.0).abs() < 1e-6);
        assert!((section_progress(0.3, 5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn default_table_covers_every_section() {
        let table = ProfileTable::default();
        assert_eq!(table.len(), SECTION_COUNT);
        for i in 0..SECTION_COUNT {
            assert_ne!(table.get(i).name, "neutral");
        }
        assert_eq!(table.get(SECTION_COUNT).name, "neutral");
    }
}
