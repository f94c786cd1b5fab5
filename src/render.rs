//! `CanvasRenderingContext2d` backend for the particle field.

use glam::Vec2;
use particle_core::{ColorStop, Paint, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` if the canvas has no 2D context to give.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
        for s in stops {
            if let Err(e) = gradient.add_color_stop(s.offset, &s.color.to_string()) {
                log::warn!("[render] bad colour stop {:?}: {:?}", s, e);
            }
        }
    }

    fn gradient(&self, paint: &Paint) -> Option<web::CanvasGradient> {
        match paint {
            Paint::Solid(_) => None,
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                let g = self
                    .ctx
                    .create_radial_gradient(x, y, 0.0, x, y, *radius as f64)
                    .ok()?;
                Self::add_stops(&g, stops);
                Some(g)
            }
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                Self::add_stops(&g, stops);
                Some(g)
            }
        }
    }

    fn set_fill(&self, paint: &Paint) -> bool {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_string()),
            _ => match self.gradient(paint) {
                Some(g) => self.ctx.set_fill_style_canvas_gradient(&g),
                None => return false,
            },
        }
        true
    }

    fn set_stroke(&self, paint: &Paint) -> bool {
        match paint {
            Paint::Solid(c) => self.ctx.set_stroke_style_str(&c.to_string()),
            _ => match self.gradient(paint) {
                Some(g) => self.ctx.set_stroke_style_canvas_gradient(&g),
                None => return false,
            },
        }
        true
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius.is_nan() || radius <= 0.0 || !self.set_fill(paint) {
            return;
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        if !self.set_stroke(paint) {
            return;
        }
        self.ctx.begin_path();
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
