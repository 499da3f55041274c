use crystal_core::*;
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn viewport() -> InputState {
    InputState::new(1280.0, 800.0)
}

fn scroll_to(input: &mut InputState, progress: f32) {
    let span = input.viewport().y * SCROLL_PAGES;
    input.scrolled(progress * span);
}

#[test]
fn idle_cursor_at_top_keeps_root_centred() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let input = viewport();
    for _ in 0..180 {
        driver.advance(DT, &input);
    }
    let root = driver.graph().root.unwrap();
    assert_eq!(root.position, Vec3::ZERO);
    assert_eq!(root.rotation.x, 0.0);
    assert_eq!(root.rotation.z, 0.0);
    assert!(root.rotation.y > 0.0, "ambient spin should advance");
}

#[test]
fn root_descends_monotonically_without_overshoot() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let mut input = viewport();
    scroll_to(&mut input, 1.0);
    let target = -ROOT_DESCENT;
    let mut prev = 0.0;
    for _ in 0..600 {
        driver.advance(DT, &input);
        let y = driver.graph().root.unwrap().position.y;
        assert!(y <= prev && y >= target, "y={y} prev={prev}");
        prev = y;
    }
    assert!((prev - target).abs() < 1e-3);
}

#[test]
fn blending_is_independent_of_frame_rate() {
    let mut fast = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let mut slow = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let mut input = viewport();
    scroll_to(&mut input, 0.5);
    for _ in 0..120 {
        fast.advance(1.0 / 120.0, &input);
    }
    for _ in 0..30 {
        slow.advance(1.0 / 30.0, &input);
    }
    let a = fast.graph().root.unwrap().position.y;
    let b = slow.graph().root.unwrap().position.y;
    assert!((a - b).abs() < 1e-3, "{a} vs {b}");
}

#[test]
fn section_index_covers_range() {
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        let idx = section_index(p, SECTION_COUNT);
        assert!(idx < SECTION_COUNT);
    }
    assert_eq!(section_index(0.0, SECTION_COUNT), 0);
    assert_eq!(section_index(1.0, SECTION_COUNT), SECTION_COUNT - 1);
}

#[test]
fn driver_tracks_active_section() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let mut input = viewport();
    scroll_to(&mut input, 0.65);
    driver.advance(DT, &input);
    assert_eq!(driver.signals().section, 3);
    assert_eq!(driver.active_profile().name, "projects");
}

#[test]
fn missing_profile_relaxes_core_to_unit_scale() {
    let contact = default_profiles()[4];
    let table = ProfileTable::new(vec![contact]);
    let mut driver = SceneDriver::new(SceneConfig::default(), table).unwrap();
    driver.attach(SceneNode::Core);
    let mut input = viewport();
    for _ in 0..120 {
        driver.advance(DT, &input);
    }
    assert!(driver.graph().core.unwrap().scale.x > 1.05);

    scroll_to(&mut input, 1.0);
    driver.advance(DT, &input);
    assert_eq!(driver.active_profile().name, "neutral");
    let rotation = driver.graph().core.unwrap().rotation;
    for _ in 0..600 {
        driver.advance(DT, &input);
    }
    let core = driver.graph().core.unwrap();
    assert!((core.scale - Vec3::ONE).abs().max_element() < 1e-3);
    assert_eq!(core.rotation, rotation);
}

#[test]
fn unattached_nodes_are_skipped() {
    let mut driver = SceneDriver::new(SceneConfig::default(), ProfileTable::default()).unwrap();
    driver.attach(SceneNode::Rings);
    let input = viewport();
    for _ in 0..30 {
        driver.advance(DT, &input);
    }
    let g = driver.graph();
    assert!(g.root.is_none() && g.core.is_none() && g.shards.is_none() && g.points.is_none());
    let rings = g.rings.as_ref().unwrap();
    assert_ne!(rings.group.rotation, Vec3::ZERO);
    assert_eq!(rings.rings.len(), RING_RADII.len());
}

#[test]
fn detach_removes_node() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    driver.detach(SceneNode::Points);
    driver.advance(DT, &viewport());
    assert!(driver.graph().points.is_none());
    assert!(driver.graph().shards.is_some());
}

#[test]
fn shards_orbit_near_their_radius() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let input = viewport();
    for _ in 0..600 {
        driver.advance(DT, &input);
    }
    let shards = driver.graph().shards.as_ref().unwrap();
    assert_eq!(shards.shards.len(), SHARD_COUNT);
    for s in &shards.shards {
        let r = Vec2::new(s.position.x, s.position.z).length();
        assert!(r > SHARD_ORBIT_RADIUS - 1.0 && r < SHARD_ORBIT_RADIUS + 1.0, "r={r}");
    }
}

#[test]
fn point_colours_drift_toward_section_colour() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let mut input = viewport();
    scroll_to(&mut input, 0.9);
    for _ in 0..600 {
        driver.advance(DT, &input);
    }
    let goal = driver.active_profile().color;
    let points = driver.graph().points.as_ref().unwrap();
    assert_eq!(points.len(), POINT_COUNT);
    for c in &points.colors {
        assert!((*c - goal).abs().max_element() < 0.01);
    }
}

#[test]
fn points_keep_their_xz_radius() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    let radii: Vec<f32> = driver
        .graph()
        .points
        .as_ref()
        .unwrap()
        .positions
        .iter()
        .map(|p| Vec2::new(p.x, p.z).length())
        .collect();
    let mut input = viewport();
    input.pointer_moved(1000.0, 200.0);
    for _ in 0..3600 {
        driver.advance(DT, &input);
    }
    let points = driver.graph().points.as_ref().unwrap();
    for (p, r0) in points.positions.iter().zip(&radii) {
        let r = Vec2::new(p.x, p.z).length();
        assert!((r - r0).abs() <= r0 * 0.01 + 1e-4, "radius {r0} drifted to {r}");
    }
}

#[test]
fn zero_sections_rejected() {
    let cfg = SceneConfig {
        section_count: 0,
        ..SceneConfig::default()
    };
    assert!(matches!(
        SceneDriver::mounted(cfg),
        Err(ConfigError::EmptyPopulation { .. })
    ));
}

#[test]
fn mounted_graph_flattens_into_sprites() {
    let mut driver = SceneDriver::mounted(SceneConfig::default()).unwrap();
    driver.advance(DT, &viewport());
    let mut out = Vec::new();
    build_instances(driver.graph(), &mut out);
    assert_eq!(
        out.len(),
        instance_capacity(RING_RADII.len(), SHARD_COUNT, POINT_COUNT)
    );
    assert!(out.iter().all(|i| i.scale > 0.0 && i.pos.iter().all(|v| v.is_finite())));
}
