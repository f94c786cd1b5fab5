//! Proximity search for connection lines.
//!
//! Small fields use the plain pairwise scan. Larger ones bucket particles
//! into a uniform grid whose cells are as wide as the connect distance, so
//! each particle only has to look at its own cell and the eight around it.

use crate::particle::Particle;
use fnv::FnvHashMap;
use glam::Vec2;

/// A line between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// `1 - distance / connect_distance`, in (0, 1].
    pub opacity: f32,
}

#[inline]
fn link(i: usize, j: usize, pi: Vec2, pj: Vec2, max_distance: f32) -> Option<Connection> {
    let distance = pi.distance(pj);
    (distance < max_distance).then(|| Connection {
        a: i,
        b: j,
        distance,
        opacity: 1.0 - distance / max_distance,
    })
}

pub fn connections_brute(particles: &[Particle], max_distance: f32) -> Vec<Connection> {
    let mut out = Vec::new();
    for (i, pi) in particles.iter().enumerate() {
        for (j, pj) in particles.iter().enumerate().skip(i + 1) {
            if let Some(c) = link(i, j, pi.position, pj.position, max_distance) {
                out.push(c);
            }
        }
    }
    out
}

struct SpatialGrid {
    cell_size: f32,
    cells: FnvHashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FnvHashMap::default(),
        }
    }

    #[inline]
    fn cell_of(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    fn insert(&mut self, index: usize, pos: Vec2) {
        let cell = self.cell_of(pos);
        self.cells.entry(cell).or_default().push(index);
    }
}

pub fn connections_grid(particles: &[Particle], max_distance: f32) -> Vec<Connection> {
    let mut grid = SpatialGrid::new(max_distance);
    for (i, p) in particles.iter().enumerate() {
        grid.insert(i, p.position);
    }
    let mut out = Vec::new();
    for (i, pi) in particles.iter().enumerate() {
        let (cx, cy) = grid.cell_of(pi.position);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(bucket) = grid.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &j in bucket {
                    if j <= i {
                        continue;
                    }
                    if let Some(c) = link(i, j, pi.position, particles[j].position, max_distance) {
                        out.push(c);
                    }
                }
            }
        }
    }
    // Match the pairwise scan's ordering
    out.sort_unstable_by_key(|c| (c.a, c.b));
    out
}
