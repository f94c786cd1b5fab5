use crate::dom;
use particle_core::FieldRunner;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas backing store at viewport size and respawn the field
/// whenever it changes.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, runner: &Rc<RefCell<FieldRunner>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let runner = runner.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        log::debug!("[resize] canvas {w}x{h}");
        runner.borrow_mut().on_resize(w, h);
    });
}
