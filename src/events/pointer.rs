use crate::dom;
use crate::input;
use glam::Vec2;
use particle_core::FieldRunner;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub runner: Rc<RefCell<FieldRunner>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerout(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let rect = dom::element_rect(&w.canvas);
        let canvas_px = Vec2::new(w.canvas.width() as f32, w.canvas.height() as f32);
        let mut runner = w.runner.borrow_mut();
        match input::pointer_on_canvas(client, rect, canvas_px) {
            Some(pos) => runner.on_pointer_move(pos),
            None => runner.on_pointer_leave(),
        }
    });
}

// Leaving the page entirely shows up as a pointerout with no related target.
fn wire_pointerout(w: &PointerWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let runner = w.runner.clone();
    dom::add_listener(&document, "pointerout", move |ev: web::PointerEvent| {
        if ev.related_target().is_none() {
            runner.borrow_mut().on_pointer_leave();
        }
    });
}
