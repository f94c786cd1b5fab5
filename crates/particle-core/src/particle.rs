use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// The two brand hues a particle can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
    Ember,
    Cyan,
}

impl Hue {
    pub const fn degrees(self) -> f32 {
        match self {
            Hue::Ember => 22.0,
            Hue::Cyan => 195.0,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Hue::Ember => Hue::Cyan,
            Hue::Cyan => Hue::Ember,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Hue::Ember
        } else {
            Hue::Cyan
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_radius: f32,
    pub hue: Hue,
    pub alpha: f32,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, base_radius: f32, hue: Hue) -> Self {
        Self {
            position,
            velocity,
            radius: base_radius,
            base_radius,
            hue,
            alpha: PULSE_ALPHA_BASE,
            pulse_phase: 0.0,
            pulse_speed: PULSE_SPEED_MIN,
        }
    }

    /// Random particle somewhere inside a `width` x `height` surface.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, spawn_speed: f32) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        let velocity = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * spawn_speed;
        let base_radius = BASE_RADIUS_MIN + rng.gen::<f32>() * BASE_RADIUS_SPAN;
        Self {
            position,
            velocity,
            radius: base_radius,
            base_radius,
            hue: Hue::random(rng),
            alpha: SPAWN_ALPHA_MIN + rng.gen::<f32>() * SPAWN_ALPHA_SPAN,
            pulse_phase: rng.gen::<f32>() * std::f32::consts::TAU,
            pulse_speed: PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN,
        }
    }

    /// Advance the pulse and derive radius and alpha from the new phase.
    pub fn pulse(&mut self, dt: f32) {
        self.pulse_phase += self.pulse_speed * dt;
        let s = self.pulse_phase.sin();
        self.radius = self.base_radius + s * PULSE_RADIUS_AMPLITUDE;
        self.alpha = PULSE_ALPHA_BASE + s * PULSE_ALPHA_AMPLITUDE;
    }

    /// Reflect off the surface edges, losing energy on each contact.
    ///
    /// Returns true if either axis touched a wall this step.
    pub fn bounce(&mut self, width: f32, height: f32, damping: f32) -> bool {
        let mut hit = false;
        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x *= -damping;
            self.position.x = self.position.x.clamp(0.0, width);
            hit = true;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y *= -damping;
            self.position.y = self.position.y.clamp(0.0, height);
            hit = true;
        }
        hit
    }
}
