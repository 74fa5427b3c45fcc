// Integration tests for the bubble pool lifecycle, driven by a simulated clock.

use folio_core::constants::{BURST_FADE_STEP, POOL_SIZE, RESPAWN_DELAY_MS};
use folio_core::{ray_sphere, Activation, FieldError, FieldParams, ParticleField, Theme};
use glam::Vec3;

fn make_field(seed: u64) -> ParticleField {
    ParticleField::new(Theme::Violet.palette(), FieldParams::default(), seed)
}

fn in_spawn_cube(v: Vec3) -> bool {
    [v.x, v.y, v.z].iter().all(|c| (-12.5..=12.5).contains(c))
}

#[test]
fn initial_pool_matches_generation_distribution() {
    for seed in 0..8 {
        let field = make_field(seed);
        assert_eq!(field.len(), POOL_SIZE);
        for (i, p) in field.particles().iter().enumerate() {
            assert_eq!(p.id as usize, i, "ids are 0..N in order");
            assert!((0.3..=0.8).contains(&p.size), "size {}", p.size);
            assert!(in_spawn_cube(p.position), "position {:?}", p.position);
            assert!(field.palette().contains(p.color));
            assert!(!p.bursting());
            assert_eq!(p.opacity(), 1.0);
            assert_eq!(p.scale(), 1.0);
        }
    }
}

#[test]
fn same_seed_gives_same_pool() {
    let a = make_field(42);
    let b = make_field(42);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.color, pb.color);
        assert_eq!(pa.size, pb.size);
    }
}

#[test]
fn activation_bursts_then_respawns_after_delay() {
    let mut field = make_field(1);
    let before = field.get(5).unwrap().clone();

    assert_eq!(field.activate(5, 1000.0), Ok(Activation::Burst));
    assert!(field.get(5).unwrap().bursting());
    assert_eq!(field.respawn_due_at(5), Some(1000.0 + RESPAWN_DELAY_MS));

    // Just before the deadline nothing changes
    field.advance(1000.0 + RESPAWN_DELAY_MS - 1.0);
    assert!(field.get(5).unwrap().bursting());

    field.advance(1000.0 + RESPAWN_DELAY_MS);
    let after = field.get(5).unwrap();
    assert!(!after.bursting());
    assert_ne!(after.position, before.position);
    assert!(in_spawn_cube(after.position));
    assert!(field.palette().contains(after.color));
    assert_eq!(after.size, before.size, "size survives respawn");
    assert_eq!(after.opacity(), 1.0);
    assert_eq!(after.scale(), 1.0);
    assert_eq!(field.pending_respawns(), 0);
}

#[test]
fn activating_a_bursting_particle_is_a_noop() {
    let mut field = make_field(2);
    field.activate(3, 0.0).unwrap();
    field.advance(16.0);
    let frames = field.get(3).unwrap().burst().unwrap().frames;

    assert_eq!(field.activate(3, 2000.0), Ok(Activation::AlreadyBursting));
    assert_eq!(field.pending_respawns(), 1);
    assert_eq!(field.respawn_due_at(3), Some(RESPAWN_DELAY_MS));
    assert_eq!(field.get(3).unwrap().burst().unwrap().frames, frames);
}

#[test]
fn unknown_ids_are_rejected() {
    let mut field = make_field(3);
    assert_eq!(
        field.activate(POOL_SIZE as u32, 0.0),
        Err(FieldError::UnknownParticle(POOL_SIZE as u32))
    );
    assert_eq!(field.pending_respawns(), 0);
}

#[test]
fn burst_fades_and_grows_each_frame_until_invisible() {
    let mut field = make_field(4);
    field.activate(0, 0.0).unwrap();
    let mut prev_opacity = field.get(0).unwrap().opacity();
    let mut prev_scale = field.get(0).unwrap().scale();
    let mut frame = 1;
    while prev_opacity > 0.0 {
        field.advance(frame as f64 * 16.0);
        let p = field.get(0).unwrap();
        assert!(p.opacity() < prev_opacity, "frame {frame}");
        assert!(p.scale() > prev_scale, "frame {frame}");
        prev_opacity = p.opacity();
        prev_scale = p.scale();
        frame += 1;
    }
    assert!(frame as f32 <= (1.0 / BURST_FADE_STEP).ceil() + 1.0);

    // Invisible but still addressable until the respawn fires
    field.advance(frame as f64 * 16.0);
    let p = field.get(0).unwrap();
    assert!(!p.visible());
    assert!(p.bursting());
    assert_eq!(p.id, 0);
}

#[test]
fn respawned_particle_is_not_left_faded() {
    let mut field = make_field(5);
    field.activate(9, 0.0).unwrap();
    for f in 1..40 {
        field.advance(f as f64 * 16.0);
    }
    assert!(!field.get(9).unwrap().visible());
    field.advance(RESPAWN_DELAY_MS);
    let p = field.get(9).unwrap();
    assert!(p.visible());
    assert_eq!(p.opacity(), 1.0);

    // A second burst starts from a fresh fade
    field.activate(9, RESPAWN_DELAY_MS + 10.0).unwrap();
    assert_eq!(field.get(9).unwrap().burst().unwrap().frames, 0);
    assert_eq!(field.get(9).unwrap().opacity(), 1.0);
}

#[test]
fn theme_switch_replaces_pool_and_drops_pending_respawns() {
    let mut field = make_field(6);
    let generation = field.generation();
    field.activate(3, 0.0).unwrap();
    field.activate(7, 0.0).unwrap();

    assert!(field.set_palette(Theme::Ember.palette()));
    assert_eq!(field.generation(), generation + 1);
    assert_eq!(field.len(), POOL_SIZE);
    assert_eq!(field.pending_respawns(), 0);
    assert!(field.particles().iter().all(|p| !p.bursting()));
    assert!(field
        .particles()
        .iter()
        .all(|p| Theme::Ember.palette().contains(p.color)));

    // The old deadline passing must not touch the new particle
    let snapshot = field.get(3).unwrap().clone();
    field.advance(RESPAWN_DELAY_MS + 1.0);
    let p = field.get(3).unwrap();
    assert_eq!(p.position, snapshot.position);
    assert_eq!(p.color, snapshot.color);
}

#[test]
fn same_palette_does_not_regenerate() {
    let mut field = make_field(7);
    let generation = field.generation();
    assert!(!field.set_palette(Theme::Violet.palette()));
    assert_eq!(field.generation(), generation);
}

#[test]
fn respawn_order_relative_to_frames_is_irrelevant() {
    // Firing the respawn explicitly before the frame, or letting the frame
    // fire it, ends in the same state.
    let mut a = make_field(8);
    let mut b = make_field(8);
    for f in [&mut a, &mut b] {
        f.activate(1, 0.0).unwrap();
    }
    assert_eq!(a.fire_due(RESPAWN_DELAY_MS), 1);
    a.advance(RESPAWN_DELAY_MS);
    b.advance(RESPAWN_DELAY_MS);
    let (pa, pb) = (a.get(1).unwrap(), b.get(1).unwrap());
    assert_eq!(pa.position, pb.position);
    assert_eq!(pa.color, pb.color);
    assert!(!pa.bursting() && !pb.bursting());
}

#[test]
fn pick_returns_nearest_of_several_hits() {
    for seed in 0..50 {
        let field = make_field(seed);
        // Ray from beyond particle 0, through its centre, on to particle 1
        let p0 = field.get(0).unwrap().world_position();
        let p1 = field.get(1).unwrap().world_position();
        let dir = (p1 - p0).normalize();
        let origin = p0 - dir * 50.0;

        let hits: Vec<(u32, f32)> = field
            .particles()
            .iter()
            .filter_map(|p| ray_sphere(origin, dir, p.world_position(), p.radius()).map(|t| (p.id, t)))
            .collect();
        assert!(hits.len() >= 2, "seed {}: ray passes through particles 0 and 1", seed);
        let nearest = hits
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|h| h.0);
        assert_eq!(field.pick(origin, dir), nearest, "seed {}", seed);
    }
}

#[test]
fn faded_particles_cannot_be_picked() {
    let mut field = make_field(9);
    let target = field.get(4).unwrap().world_position();
    let origin = target + Vec3::new(0.0, 0.0, 100.0);
    let picked = field.pick(origin, Vec3::NEG_Z).unwrap();

    field.activate(picked, 0.0).unwrap();
    for f in 1..40 {
        field.advance(f as f64);
    }
    assert_ne!(field.pick(origin, Vec3::NEG_Z), Some(picked));
}
