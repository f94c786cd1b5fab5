//! The particle field: a fixed-size population advanced once per frame.
//!
//! Per frame every particle pulses, may swap hue, moves, bounces off the
//! surface edges and, while a pointer is present, is pulled towards it (or
//! pushed away when very close). Randomness comes from the injected RNG so
//! tests can run with a seeded generator.

use crate::config::{ConfigError, FieldParams};
use crate::connect::{self, Connection};
use crate::particle::Particle;
use crate::pointer::PointerState;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField<R = StdRng> {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    params: FieldParams,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn seeded(params: FieldParams, seed: u64) -> Result<Self, ConfigError> {
        Self::new(params, StdRng::seed_from_u64(seed))
    }
}

impl<R> ParticleField<R> {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Every pair closer than the connect distance.
    pub fn connections(&self) -> Vec<Connection> {
        let max = self.params.connect_distance;
        if self.particles.len() > self.params.grid_threshold {
            connect::connections_grid(&self.particles, max)
        } else {
            connect::connections_brute(&self.particles, max)
        }
    }
}

impl<R: Rng> ParticleField<R> {
    /// Empty field; call [`reset`](Self::reset) to populate it.
    pub fn new(params: FieldParams, rng: R) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            particles: Vec::with_capacity(params.particle_count),
            width: 0.0,
            height: 0.0,
            params,
            rng,
        })
    }

    /// Discard all particles and spawn a fresh population for a new surface size.
    pub fn reset(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
        let (w, h, speed) = (self.width, self.height, self.params.spawn_speed);
        self.particles.clear();
        for _ in 0..self.params.particle_count {
            self.particles
                .push(Particle::spawn(&mut self.rng, w, h, speed));
        }
        log::debug!(
            "[field] reset {} particles on {:.0}x{:.0}",
            self.particles.len(),
            w,
            h
        );
    }

    /// Advance every particle by `dt` reference frames.
    pub fn advance(&mut self, pointer: &PointerState, dt: f32) {
        let params = &self.params;
        let pointer_pos = pointer.position();
        let flip_chance = step_chance(params.hue_flip_chance, dt);
        for p in &mut self.particles {
            p.pulse(dt);
            if self.rng.gen::<f64>() < flip_chance {
                p.hue = p.hue.flipped();
            }
            p.position += p.velocity * dt;
            p.bounce(self.width, self.height, params.bounce_damping);

            if let Some(target) = pointer_pos {
                apply_pointer(p, target, params, dt);
                p.velocity = p.velocity.clamp_length_max(params.max_speed);
            }
        }
    }
}

/// Chance of at least one event in `dt` frames, given `per_frame` odds.
fn step_chance(per_frame: f64, dt: f32) -> f64 {
    if per_frame <= 0.0 || dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - per_frame).powf(dt as f64)
}

fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Pull towards the pointer inside the pointer radius, push away inside the
/// repel radius, and brighten with proximity. A particle exactly on the
/// pointer has no direction, so only the brightening applies.
fn apply_pointer(p: &mut Particle, target: Vec2, params: &FieldParams, dt: f32) {
    let delta = target - p.position;
    let distance = delta.length();
    if distance >= params.pointer_radius {
        return;
    }
    let force = (params.pointer_radius - distance) / params.pointer_radius;
    if distance > 0.0 {
        let dir = delta / distance;
        if distance > params.repel_radius {
            p.velocity += dir * force * params.attract_strength * dt;
        } else {
            p.velocity -= dir * force * params.repel_strength * dt;
        }
    }
    p.alpha = (p.alpha + force * params.pointer_alpha_boost).min(params.max_alpha);
}
