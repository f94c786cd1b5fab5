// Host-side tests for connection search: grid and pairwise scan must agree.

use glam::Vec2;
use particle_core::connect::{connections_brute, connections_grid};
use particle_core::*;
use rand::prelude::*;

fn scatter(n: usize, w: f32, h: f32, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| Particle::spawn(&mut rng, w, h, 0.8)).collect()
}

#[test]
fn grid_matches_pairwise_scan() {
    for seed in 0..4 {
        let ps = scatter(600, 1920.0, 1080.0, seed);
        let brute = connections_brute(&ps, 180.0);
        let grid = connections_grid(&ps, 180.0);
        assert!(!brute.is_empty());
        assert_eq!(brute.len(), grid.len(), "seed {seed}");
        for (b, g) in brute.iter().zip(&grid) {
            assert_eq!((b.a, b.b), (g.a, g.b));
            assert!((b.opacity - g.opacity).abs() < 1e-6);
        }
    }
}

#[test]
fn grid_handles_pairs_across_cell_edges() {
    let mut ps = scatter(3, 10.0, 10.0, 1);
    // 179.0 apart, straddling the x = 180 cell boundary
    ps[0].position = Vec2::new(179.5, 10.0);
    ps[1].position = Vec2::new(358.5, 10.0);
    ps[2].position = Vec2::new(1000.0, 1000.0);
    let grid = connections_grid(&ps, 180.0);
    assert_eq!(grid.len(), 1);
    assert_eq!((grid[0].a, grid[0].b), (0, 1));
}

#[test]
fn opacity_falls_off_linearly() {
    let mut ps = scatter(2, 10.0, 10.0, 2);
    for d in [0.0f32, 45.0, 90.0, 135.0, 179.9] {
        ps[0].position = Vec2::new(0.0, 0.0);
        ps[1].position = Vec2::new(0.0, d);
        let c = connections_brute(&ps, 180.0);
        assert_eq!(c.len(), 1, "distance {d}");
        assert!((c[0].opacity - (1.0 - d / 180.0)).abs() < 1e-6);
    }
}

#[test]
fn large_fields_switch_to_grid_with_same_result() {
    let params = FieldParams {
        particle_count: 500,
        grid_threshold: 100,
        ..FieldParams::default()
    };
    let mut f = ParticleField::seeded(params, 8).unwrap();
    f.reset(1600.0, 900.0);
    assert_eq!(f.connections(), connections_brute(f.particles(), 180.0));
}
