// Shared tuning constants for the animation drivers.
//
// Every per-frame easing factor below was tuned at 60 Hz; `blend::damp`
// rescales them for other frame intervals.

// Frame timing
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp for backgrounded tabs

// ---------------- Input sampling ----------------
pub const CURSOR_EASE_BASE: f32 = 0.12;
pub const CURSOR_EASE_VELOCITY_GAIN: f32 = 0.02;
pub const CURSOR_EASE_MAX: f32 = 0.2;
pub const CURSOR_IDLE_RESET_SEC: f32 = 0.1; // velocity resets after this long without movement
pub const SCROLL_PAGES: f32 = 4.0; // viewport heights mapped to progress 0..1

// ---------------- Particle field (2D canvas) ----------------
pub const FIELD_PARTICLE_COUNT: usize = 100;
pub const FIELD_SEED: u64 = 42;
pub const FIELD_LINK_DISTANCE_PX: f32 = 100.0;
pub const FIELD_LINK_MAX_OPACITY: f32 = 0.1;
pub const FIELD_LINK_WIDTH_PX: f32 = 0.5;
pub const FIELD_ATTRACT_RADIUS_PX: f32 = 100.0;
pub const FIELD_ATTRACT_STRENGTH: f32 = 0.000_01;
pub const FIELD_INITIAL_SPEED: f32 = 0.25; // max |v| per axis, px per frame
pub const FIELD_SIZE_MIN: f32 = 1.0;
pub const FIELD_SIZE_SPAN: f32 = 2.0;
pub const FIELD_OPACITY_MIN: f32 = 0.2;
pub const FIELD_OPACITY_SPAN: f32 = 0.5;
pub const FIELD_RGB: [u8; 3] = [59, 130, 246];

// ---------------- Scene driver ----------------
pub const SECTION_COUNT: usize = 5;

// Cursor influence
pub const INFLUENCE_FALLOFF: f32 = 0.5;
pub const INFLUENCE_FLOOR: f32 = 0.3;
pub const INFLUENCE_POS_X: f32 = 0.8;
pub const INFLUENCE_POS_Y: f32 = 0.6;
pub const INFLUENCE_ROT_X: f32 = 0.2;
pub const INFLUENCE_ROT_Y: f32 = 0.25;
pub const INFLUENCE_ROT_Z: f32 = 0.15;

// Root group
pub const ROOT_DESCENT: f32 = 3.0; // world units travelled over the full scroll
pub const ROOT_SPIN_SPEED: f32 = 0.2; // rad/s ambient spin
pub const ROOT_SCROLL_TURNS: f32 = 2.0; // full turns over the full scroll
pub const ROOT_VELOCITY_SPIN: f32 = 0.1;
pub const ALPHA_ROOT_DESCENT: f32 = 0.06;
pub const ALPHA_ROOT_SWAY: f32 = 0.08;
pub const ALPHA_ROOT_SPIN: f32 = 0.08;
pub const ALPHA_ROOT_TILT: f32 = 0.06;

// Core body
pub const CORE_VELOCITY_SCALE: f32 = 0.02;
pub const ALPHA_CORE_NEUTRAL: f32 = 0.08;
pub const NEUTRAL_COLOR: [f32; 3] = [0.2, 0.5, 1.0];

// Rings
pub const RING_RADII: [f32; 3] = [2.5, 2.0, 1.5];
pub const RING_TILTS: [[f32; 3]; 3] = [
    [std::f32::consts::FRAC_PI_2, 0.0, 0.0],
    [0.0, 0.0, std::f32::consts::FRAC_PI_3],
    [std::f32::consts::FRAC_PI_4, std::f32::consts::FRAC_PI_4, 0.0],
];
pub const RING_COLORS: [[f32; 4]; 3] = [
    [0.55, 0.36, 0.96, 0.6], // violet
    [0.02, 0.71, 0.83, 0.7], // cyan
    [0.06, 0.73, 0.51, 0.8], // emerald
];
pub const ALPHA_RING_SPIN: f32 = 0.08;
pub const ALPHA_RING_SCALE: f32 = 0.07;

// Orbiting shards
pub const SHARD_COUNT: usize = 6;
pub const SHARD_ORBIT_RADIUS: f32 = 3.0;
pub const ALPHA_SHARD_GROUP: f32 = 0.09;
pub const ALPHA_SHARD_SPIN: f32 = 0.1;
pub const ALPHA_SHARD_ORBIT: f32 = 0.08;

// Spatial point field
pub const POINT_COUNT: usize = 150;
pub const POINT_SEED: u64 = 7;
pub const POINT_RADIUS_MIN: f32 = 2.0;
pub const POINT_RADIUS_SPAN: f32 = 3.0;
pub const POINT_SIZE_MIN: f32 = 0.02;
pub const POINT_SIZE_SPAN: f32 = 0.05;
pub const ALPHA_POINT_ORBIT: f32 = 0.12;
pub const ALPHA_POINT_LIFT: f32 = 0.1;
pub const ALPHA_POINT_COLOR: f32 = 0.06;

// ---------------- Cursor follower (DOM cursor) ----------------
pub const FOLLOWER_DOT_SPRING: [f32; 3] = [200.0, 25.0, 0.5]; // stiffness, damping, mass
pub const FOLLOWER_RING_SPRING: [f32; 3] = [150.0, 20.0, 0.3];
pub const FOLLOWER_TRAIL_SPRING: [f32; 3] = [100.0, 30.0, 0.8];
pub const FOLLOWER_BURST_MIN_SPEED_PX: f32 = 5.0;
pub const ALPHA_FOLLOWER_STYLE: f32 = 0.2;
pub const FOLLOWER_SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0; // keeps the stiff springs stable at long frames

// ---------------- Rendering ----------------
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const RING_SPRITES: usize = 48;
pub const CORE_RADIUS: f32 = 1.2;
pub const CORE_COLOR: [f32; 4] = [0.23, 0.51, 0.96, 0.9];
pub const SHARD_SIZE: f32 = 0.2;
