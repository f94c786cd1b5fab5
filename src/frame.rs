use crate::render::CanvasSurface;
use instant::Instant;
use particle_core::FieldRunner;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub runner: Rc<RefCell<FieldRunner>>,
    pub surface: CanvasSurface,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Tick the field once. Returns false when there is nothing left to animate.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now - self.last_instant;
        self.last_instant = now;
        self.runner.borrow_mut().tick(&mut self.surface, elapsed)
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(window: &web::Window, cb: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

/// The requestAnimationFrame chain driving one [`FrameContext`]. Ticks run
/// strictly one after another until the context reports it is done or
/// [`stop`](Self::stop) is called.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(mut ctx: FrameContext) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            if !ctx.frame() {
                running_tick.set(false);
                log::info!("[frame] field inactive; loop finished");
                return;
            }
            if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                pending_tick.set(request_frame(&w, cb));
            }
        }) as Box<dyn FnMut()>));

        if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
            pending.set(request_frame(&w, cb));
        }
        Self {
            pending,
            running,
            tick,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the tick closure (and with it
    /// the frame context). Must not be called from inside a tick.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

/// Run `step` with the frame timestamp (ms) on every animation frame until
/// it returns false. The closure stays alive for the page's lifetime, like
/// the other page listeners.
pub fn animate_until<F>(mut step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !step(timestamp) {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), slot_inner.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
