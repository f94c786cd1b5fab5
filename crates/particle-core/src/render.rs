//! Frame composition against an abstract 2D surface.
//!
//! Drawing never mutates simulation state. Gradients are plain values built
//! fresh for every call; the surface decides how to realise them.

use crate::color::{Color, CYAN, EMBER, TRANSPARENT};
use crate::constants::*;
use crate::field::ParticleField;
use crate::particle::Particle;
use crate::pointer::PointerState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

#[inline]
pub const fn stop(offset: f32, color: Color) -> ColorStop {
    ColorStop { offset, color }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Radial gradient from a zero-radius centre out to `radius`.
    Radial {
        center: Vec2,
        radius: f32,
        stops: Vec<ColorStop>,
    },
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
    },
}

/// The drawing operations the particle field needs from a 2D raster.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint);
}

/// Draw one full frame: background glows, trail, particles, then connections.
pub fn draw_frame<S, R>(surface: &mut S, field: &ParticleField<R>, pointer: &PointerState, frame: u64)
where
    S: Surface + ?Sized,
{
    surface.clear(field.width(), field.height());
    draw_center_glow(surface, field.size(), frame);
    if let Some(pos) = pointer.position() {
        draw_spotlight(surface, pos, SPOTLIGHT_RADIUS);
    }
    draw_trail(surface, pointer);
    for p in field.particles() {
        draw_particle(surface, p);
    }
    draw_connections(surface, field);
}

/// Slowly breathing intensity of the centre glow.
pub fn glow_intensity(frame: u64) -> f32 {
    GLOW_BASE + (frame as f32 * GLOW_PHASE_RATE).sin() * GLOW_SWING
}

fn draw_center_glow<S: Surface + ?Sized>(surface: &mut S, size: Vec2, frame: u64) {
    let radius = size.x.min(size.y) * GLOW_RADIUS_FRACTION;
    if radius <= 0.0 {
        return;
    }
    let center = size * 0.5;
    let intensity = glow_intensity(frame);
    let paint = Paint::Radial {
        center,
        radius,
        stops: vec![
            stop(0.0, EMBER.with_alpha(intensity * 0.15)),
            stop(0.5, CYAN.with_alpha(intensity * 0.08)),
            stop(1.0, TRANSPARENT),
        ],
    };
    surface.fill_circle(center, radius, &paint);
}

fn draw_spotlight<S: Surface + ?Sized>(surface: &mut S, center: Vec2, radius: f32) {
    let paint = Paint::Radial {
        center,
        radius,
        stops: vec![
            stop(0.0, EMBER.with_alpha(0.1)),
            stop(0.5, CYAN.with_alpha(0.05)),
            stop(1.0, TRANSPARENT),
        ],
    };
    surface.fill_circle(center, radius, &paint);
}

fn draw_trail<S: Surface + ?Sized>(surface: &mut S, pointer: &PointerState) {
    let len = pointer.trail_len();
    if len < 2 {
        return;
    }
    for (i, point) in pointer.trail().enumerate() {
        let fade = 1.0 - i as f32 / len as f32;
        let radius = fade * TRAIL_DOT_RADIUS * TRAIL_GLOW_SCALE;
        let paint = Paint::Radial {
            center: point,
            radius,
            stops: vec![
                stop(0.0, EMBER.with_alpha(fade * 0.6)),
                stop(0.5, EMBER.with_alpha(fade * 0.2)),
                stop(1.0, EMBER.with_alpha(0.0)),
            ],
        };
        surface.fill_circle(point, radius, &paint);
    }
}

fn particle_color(p: &Particle, lightness: f32, alpha: f32) -> Color {
    Color::hsla(p.hue.degrees(), PARTICLE_SATURATION, lightness, alpha.clamp(0.0, 1.0))
}

fn draw_particle<S: Surface + ?Sized>(surface: &mut S, p: &Particle) {
    let glow_radius = p.radius * PARTICLE_GLOW_SCALE;
    let glow = Paint::Radial {
        center: p.position,
        radius: glow_radius,
        stops: vec![
            stop(0.0, particle_color(p, PARTICLE_LIGHTNESS, p.alpha)),
            stop(0.4, particle_color(p, PARTICLE_LIGHTNESS, p.alpha * 0.4)),
            stop(1.0, particle_color(p, PARTICLE_LIGHTNESS, 0.0)),
        ],
    };
    surface.fill_circle(p.position, glow_radius, &glow);

    let core = Paint::Solid(particle_color(
        p,
        PARTICLE_LIGHTNESS + CORE_LIGHTNESS_BOOST,
        p.alpha + CORE_ALPHA_BOOST,
    ));
    surface.fill_circle(p.position, p.radius, &core);
}

fn draw_connections<S: Surface + ?Sized, R>(surface: &mut S, field: &ParticleField<R>) {
    let particles = field.particles();
    for c in field.connections() {
        let (pa, pb) = (&particles[c.a], &particles[c.b]);
        let alpha = c.opacity * LINE_ALPHA_SCALE;
        let paint = Paint::Linear {
            from: pa.position,
            to: pb.position,
            stops: vec![
                stop(0.0, particle_color(pa, LINE_LIGHTNESS, alpha)),
                stop(1.0, particle_color(pb, LINE_LIGHTNESS, alpha)),
            ],
        };
        surface.stroke_line(pa.position, pb.position, c.opacity * LINE_WIDTH_SCALE, &paint);
    }
}
