use crystal_core::*;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn assert_in_bounds(field: &ParticleField) {
    let b = field.bounds();
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            p.position.x >= 0.0 && p.position.x <= b.x && p.position.y >= 0.0 && p.position.y <= b.y,
            "particle {i} escaped: {:?} not in {:?}",
            p.position,
            b
        );
    }
}

#[test]
fn particles_stay_inside_through_shrink_resize() {
    let mut field = ParticleField::new(FieldConfig::default(), 400.0, 300.0).unwrap();
    let mut input = InputState::new(400.0, 300.0);
    input.pointer_moved(390.0, 10.0);
    for _ in 0..300 {
        field.advance(DT, &input);
        assert_in_bounds(&field);
    }
    field.resize(120.0, 80.0);
    for _ in 0..300 {
        field.advance(0.1, &input);
        assert_in_bounds(&field);
    }
}

#[test]
fn population_is_fixed_and_deterministic() {
    let a = ParticleField::new(FieldConfig::default(), 500.0, 500.0).unwrap();
    let b = ParticleField::new(FieldConfig::default(), 500.0, 500.0).unwrap();
    assert_eq!(a.particles().len(), FIELD_PARTICLE_COUNT);
    assert_eq!(a.particles(), b.particles());
    for p in a.particles() {
        assert!(p.size >= FIELD_SIZE_MIN && p.size < FIELD_SIZE_MIN + FIELD_SIZE_SPAN);
        assert!(p.opacity >= FIELD_OPACITY_MIN && p.opacity < FIELD_OPACITY_MIN + FIELD_OPACITY_SPAN);
        assert!(p.velocity.x.abs() <= FIELD_INITIAL_SPEED);
        assert!(p.velocity.y.abs() <= FIELD_INITIAL_SPEED);
    }
}

#[test]
fn link_opacity_fades_with_distance() {
    assert!((link_opacity(0.0, 100.0, 0.1) - 0.1).abs() < 1e-7);
    assert_eq!(link_opacity(100.0, 100.0, 0.1), 0.0);
    assert_eq!(link_opacity(250.0, 100.0, 0.1), 0.0);
    let mut last = f32::MAX;
    for d in 0..=100 {
        let o = link_opacity(d as f32, 100.0, 0.1);
        assert!(o <= last);
        last = o;
    }
}

#[test]
fn centred_cursor_pulls_particles_inward() {
    let cfg = FieldConfig {
        initial_speed: 0.0,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(cfg, 200.0, 200.0).unwrap();
    let mut input = InputState::new(200.0, 200.0);
    let centre = Vec2::new(100.0, 100.0);
    input.pointer_moved(centre.x, centre.y);
    for _ in 0..60 {
        field.advance(DT, &input);
    }
    let mut total = 0.0;
    for p in field.particles() {
        let inward = p.velocity.dot(centre - p.position);
        assert!(inward >= 0.0);
        total += inward;
    }
    assert!(total / field.particles().len() as f32 > 0.0);
}

#[test]
fn seeded_drift_still_bends_toward_centred_cursor() {
    let mut field = ParticleField::new(FieldConfig::default(), 200.0, 200.0).unwrap();
    let mut input = InputState::new(200.0, 200.0);
    let centre = Vec2::new(100.0, 100.0);
    input.pointer_moved(centre.x, centre.y);
    for _ in 0..60 {
        field.advance(DT, &input);
    }
    let cosines: Vec<f32> = field
        .particles()
        .iter()
        .filter_map(|p| {
            let v = p.velocity.try_normalize()?;
            let inward = (centre - p.position).try_normalize()?;
            Some(v.dot(inward))
        })
        .collect();
    assert!(!cosines.is_empty());
    let mean = cosines.iter().sum::<f32>() / cosines.len() as f32;
    assert!(mean > 0.0, "mean inward cosine {mean}");
}

#[test]
fn attraction_only_acts_within_radius() {
    let mut with = ParticleField::new(FieldConfig::default(), 600.0, 600.0).unwrap();
    let mut without = ParticleField::new(FieldConfig::default(), 600.0, 600.0).unwrap();
    let target = Vec2::new(300.0, 300.0);
    let before: Vec<_> = with.particles().to_vec();
    with.step(Some(target), 1.0);
    without.step(None, 1.0);
    for ((p, q), old) in with.particles().iter().zip(without.particles()).zip(&before) {
        let pull = p.velocity - q.velocity;
        if old.position.distance(target) >= FIELD_ATTRACT_RADIUS_PX {
            assert_eq!(pull, Vec2::ZERO);
        } else {
            assert!(pull.dot(target - old.position) >= 0.0);
        }
    }
}

#[test]
fn no_attraction_before_first_pointer_move() {
    let mut a = ParticleField::new(FieldConfig::default(), 300.0, 300.0).unwrap();
    let mut b = ParticleField::new(FieldConfig::default(), 300.0, 300.0).unwrap();
    let input = InputState::new(300.0, 300.0);
    a.advance(DT, &input);
    b.step(None, crystal_core::blend::frames(DT));
    assert_eq!(a.particles(), b.particles());
}

#[derive(Default)]
struct Recorder {
    clears: usize,
    circles: usize,
    lines: Vec<f32>,
}

impl FieldSurface for Recorder {
    fn clear(&mut self, _w: f32, _h: f32) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, _c: Vec2, _r: f32, _o: f32) {
        self.circles += 1;
    }
    fn stroke_line(&mut self, _a: Vec2, _b: Vec2, opacity: f32) {
        self.lines.push(opacity);
    }
}

#[test]
fn draw_clears_then_emits_every_particle_and_link() {
    let field = ParticleField::new(FieldConfig::default(), 250.0, 250.0).unwrap();
    let mut rec = Recorder::default();
    field.draw(&mut rec);
    assert_eq!(rec.clears, 1);
    assert_eq!(rec.circles, field.particles().len());
    assert_eq!(rec.lines.len(), field.links().len());
    assert!(rec
        .lines
        .iter()
        .all(|&o| o > 0.0 && o <= FIELD_LINK_MAX_OPACITY));
}

#[test]
fn invalid_distances_are_rejected() {
    let cfg = FieldConfig {
        link_distance: -1.0,
        ..FieldConfig::default()
    };
    assert!(matches!(
        ParticleField::new(cfg, 100.0, 100.0),
        Err(ConfigError::NonPositive { name: "link_distance", .. })
    ));
}

#[test]
fn non_finite_tuning_is_rejected() {
    let cfg = FieldConfig {
        attract_strength: f32::NAN,
        ..FieldConfig::default()
    };
    assert!(matches!(
        ParticleField::new(cfg, 100.0, 100.0),
        Err(ConfigError::NonFinite { name: "attract_strength", .. })
    ));
    let cfg = FieldConfig {
        link_max_opacity: f32::INFINITY,
        ..FieldConfig::default()
    };
    assert!(matches!(
        ParticleField::new(cfg, 100.0, 100.0),
        Err(ConfigError::NonFinite { name: "link_max_opacity", .. })
    ));
}
