// Host-side tests for frame composition using a recording surface.

use glam::Vec2;
use particle_core::*;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(f32, f32),
    Circle { center: Vec2, radius: f32, paint: Paint },
    Line { from: Vec2, to: Vec2, width: f32, paint: Paint },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.ops.push(Op::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        self.ops.push(Op::Line {
            from,
            to,
            width,
            paint: paint.clone(),
        });
    }
}

fn two_particles(distance: f32) -> ParticleField {
    let params = FieldParams {
        particle_count: 2,
        ..FieldParams::default()
    };
    let mut f = ParticleField::seeded(params, 3).unwrap();
    f.reset(800.0, 600.0);
    let ps = f.particles_mut();
    ps[0] = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 2.0, Hue::Ember);
    ps[1] = Particle::new(Vec2::new(100.0 + distance, 100.0), Vec2::ZERO, 2.0, Hue::Cyan);
    f
}

fn radial_stops(op: &Op) -> &[ColorStop] {
    match op {
        Op::Circle {
            paint: Paint::Radial { stops, .. },
            ..
        } => stops,
        other => panic!("expected radial circle, got {other:?}"),
    }
}

#[test]
fn frame_order_without_pointer() {
    let f = two_particles(90.0);
    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &PointerState::default(), 0);

    // clear, centre glow, 2 x (glow + core), one line
    assert_eq!(s.ops.len(), 7);
    assert_eq!(s.ops[0], Op::Clear(800.0, 600.0));
    match &s.ops[1] {
        Op::Circle { center, radius, .. } => {
            assert_eq!(*center, Vec2::new(400.0, 300.0));
            assert!((radius - 240.0).abs() < 1e-4);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(s.ops[6], Op::Line { .. }));
}

#[test]
fn centre_glow_breathes_with_frame_count() {
    assert!((glow_intensity(0) - 0.3).abs() < 1e-6);
    let peak_frame = (std::f32::consts::FRAC_PI_2 / 0.02).round() as u64;
    assert!((glow_intensity(peak_frame) - 0.4).abs() < 1e-3);

    let f = two_particles(500.0);
    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &PointerState::default(), 0);
    let stops = radial_stops(&s.ops[1]);
    assert!((stops[0].color.alpha() - 0.3 * 0.15).abs() < 1e-6);
    assert!((stops[1].color.alpha() - 0.3 * 0.08).abs() < 1e-6);
    assert_eq!(stops[2].color.alpha(), 0.0);
}

#[test]
fn spotlight_drawn_only_with_pointer_and_trail_needs_two_points() {
    let f = two_particles(500.0);
    let mut pointer = PointerState::default();
    pointer.move_to(Vec2::new(300.0, 200.0));

    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &pointer, 1);
    // clear, glow, spotlight, 2 x 2 particle circles; single-point trail is skipped
    assert_eq!(s.ops.len(), 7);
    match &s.ops[2] {
        Op::Circle { center, radius, .. } => {
            assert_eq!(*center, Vec2::new(300.0, 200.0));
            assert_eq!(*radius, 200.0);
        }
        other => panic!("unexpected {other:?}"),
    }

    pointer.move_to(Vec2::new(310.0, 200.0));
    pointer.move_to(Vec2::new(320.0, 200.0));
    pointer.move_to(Vec2::new(330.0, 200.0));
    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &pointer, 1);
    assert_eq!(s.ops.len(), 7 + 4);
}

#[test]
fn trail_fades_from_newest_to_oldest() {
    let f = two_particles(500.0);
    let mut pointer = PointerState::default();
    for i in 0..4 {
        pointer.move_to(Vec2::new(10.0 * i as f32, 0.0));
    }
    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &pointer, 1);
    let trail = &s.ops[3..7];
    let expected_fade = [1.0, 0.75, 0.5, 0.25];
    for (op, fade) in trail.iter().zip(expected_fade) {
        match op {
            Op::Circle { radius, .. } => {
                assert!((radius - fade * 24.0).abs() < 1e-5);
                assert!((radial_stops(op)[0].color.alpha() - fade * 0.6).abs() < 1e-6);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    // newest first
    match &trail[0] {
        Op::Circle { center, .. } => assert_eq!(*center, Vec2::new(30.0, 0.0)),
        _ => unreachable!(),
    }
}

#[test]
fn particle_glow_then_core() {
    let f = two_particles(500.0);
    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &PointerState::default(), 0);
    let p = &f.particles()[0];
    match (&s.ops[2], &s.ops[3]) {
        (
            Op::Circle {
                radius: glow_r,
                paint: Paint::Radial { stops, .. },
                ..
            },
            Op::Circle {
                radius: core_r,
                paint: Paint::Solid(core),
                ..
            },
        ) => {
            assert_eq!(*glow_r, p.radius * 4.0);
            assert_eq!(*core_r, p.radius);
            assert_eq!(stops[0].color, Color::hsla(22.0, 100.0, 55.0, p.alpha));
            assert_eq!(*core, Color::hsla(22.0, 100.0, 75.0, p.alpha + 0.3));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn connection_line_carries_both_hues_and_opacity() {
    let f = two_particles(90.0);
    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &PointerState::default(), 0);
    match s.ops.last() {
        Some(Op::Line {
            from,
            to,
            width,
            paint: Paint::Linear { stops, .. },
        }) => {
            assert_eq!(*from, Vec2::new(100.0, 100.0));
            assert_eq!(*to, Vec2::new(190.0, 100.0));
            assert!((width - 0.75).abs() < 1e-6);
            assert_eq!(stops[0].color, Color::hsla(22.0, 100.0, 60.0, 0.15));
            assert_eq!(stops[1].color, Color::hsla(195.0, 100.0, 60.0, 0.15));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn no_line_at_or_beyond_connect_distance() {
    for d in [180.0, 250.0] {
        let f = two_particles(d);
        let mut s = Recorder::default();
        draw_frame(&mut s, &f, &PointerState::default(), 0);
        assert!(!s.ops.iter().any(|op| matches!(op, Op::Line { .. })), "d={d}");
    }
}

#[test]
fn rendering_does_not_mutate_state() {
    let f = two_particles(90.0);
    let before = f.particles().to_vec();
    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &PointerState::default(), 5);
    draw_frame(&mut s, &f, &PointerState::default(), 5);
    assert_eq!(f.particles(), &before[..]);
    let half = s.ops.len() / 2;
    assert_eq!(s.ops[..half], s.ops[half..]);
}

#[test]
fn spotlight_size_ignores_pointer_radius_setting() {
    let params = FieldParams {
        particle_count: 1,
        pointer_radius: 320.0,
        ..FieldParams::default()
    };
    let mut f = ParticleField::seeded(params, 9).unwrap();
    f.reset(800.0, 600.0);
    let mut pointer = PointerState::default();
    pointer.move_to(Vec2::new(100.0, 100.0));

    let mut s = Recorder::default();
    draw_frame(&mut s, &f, &pointer, 1);
    match &s.ops[2] {
        Op::Circle { radius, .. } => assert_eq!(*radius, constants::SPOTLIGHT_RADIUS),
        other => panic!("unexpected {other:?}"),
    }
}
