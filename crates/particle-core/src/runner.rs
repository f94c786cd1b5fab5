//! Lifecycle of the particle effect: activation, per-frame ticks, host
//! events and teardown. The host owns the scheduling primitive and calls
//! [`FieldRunner::tick`] once per display refresh.

use crate::config::{ConfigError, FieldParams};
use crate::field::ParticleField;
use crate::pointer::PointerState;
use crate::render::{draw_frame, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;

/// Host environment sampled once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation {
    pub reduced_motion: bool,
    pub width: f32,
    pub height: f32,
}

pub struct FieldRunner<R = StdRng> {
    field: Option<ParticleField<R>>,
    pointer: PointerState,
    frame: u64,
}

impl<R: Rng> FieldRunner<R> {
    /// Build the field unless the host asked for reduced motion, in which
    /// case the runner stays inert and never allocates particles.
    pub fn activate(env: Activation, params: FieldParams, rng: R) -> Result<Self, ConfigError> {
        if env.reduced_motion {
            log::info!("[field] reduced motion requested; particle field disabled");
            return Ok(Self::inert(params.max_trail));
        }
        let pointer = PointerState::new(params.max_trail);
        let mut field = ParticleField::new(params, rng)?;
        field.reset(env.width, env.height);
        log::info!(
            "[field] active: {} particles on {:.0}x{:.0}",
            field.len(),
            field.width(),
            field.height()
        );
        Ok(Self {
            field: Some(field),
            pointer,
            frame: 0,
        })
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        if let Some(field) = &mut self.field {
            field.reset(width, height);
        }
    }

    /// Advance and draw one frame. Returns false once the runner is
    /// inactive, telling the host to stop scheduling.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, elapsed: Duration) -> bool {
        let Some(field) = &mut self.field else {
            return false;
        };
        self.frame += 1;
        let dt = field.params().time_step.frame_delta(elapsed);
        field.advance(&self.pointer, dt);
        draw_frame(surface, field, &self.pointer, self.frame);
        true
    }
}

impl<R> FieldRunner<R> {
    fn inert(max_trail: usize) -> Self {
        Self {
            field: None,
            pointer: PointerState::new(max_trail),
            frame: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some()
    }

    pub fn field(&self) -> Option<&ParticleField<R>> {
        self.field.as_ref()
    }

    pub fn field_mut(&mut self) -> Option<&mut ParticleField<R>> {
        self.field.as_mut()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if self.is_active() {
            self.pointer.move_to(pos);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Drop the particles and pointer history; later ticks do nothing.
    pub fn stop(&mut self) {
        if self.field.take().is_some() {
            log::info!("[field] stopped after {} frames", self.frame);
        }
        self.pointer.leave();
    }
}
