#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::frame::{FrameContext, FrameLoop};
use instant::Instant;
use particle_core::{Activation, FieldParams, FieldRunner};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod motion;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let reduced_motion = dom::prefers_reduced_motion(&window);

    let plan = motion::EffectPlan::for_motion(reduced_motion);

    if plan.hover {
        effects::wire_hover_effects(&document);
    }
    effects::wire_scroll_effects(&window, &document, plan);
    effects::wire_faq(&document);
    effects::wire_carousel(&document);
    effects::wire_forms(&document);

    start_field(&window, &document, reduced_motion)
}

fn field_params(canvas: &web::HtmlCanvasElement) -> FieldParams {
    let overrides = dom::read_overrides(canvas);
    let (params, rejected) = FieldParams::default()
        .with_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str())));
    for e in rejected {
        log::warn!("[config] ignoring override: {e}");
    }
    params
}

fn start_field(
    window: &web::Window,
    document: &web::Document,
    reduced_motion: bool,
) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::info!("no #{CANVAS_ID}; particle field disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{CANVAS_ID} is not a canvas: {:?}", e)))?;

    let (width, height) = if reduced_motion {
        (canvas.width() as f32, canvas.height() as f32)
    } else {
        dom::sync_canvas_to_viewport(&canvas)
    };
    let env = Activation {
        reduced_motion,
        width,
        height,
    };
    let runner = FieldRunner::activate(env, field_params(&canvas), StdRng::from_entropy())?;
    if !runner.is_active() {
        return Ok(());
    }
    let Some(surface) = render::CanvasSurface::new(&canvas) else {
        log::info!("no 2d context on #{CANVAS_ID}; particle field disabled");
        return Ok(());
    };
    log::info!("[field] {}x{} active", width, height);

    let runner = Rc::new(RefCell::new(runner));
    events::wire_canvas_resize(&canvas, &runner);
    events::wire_pointer_handlers(events::pointer::PointerWiring {
        canvas: canvas.clone(),
        runner: runner.clone(),
    });

    let frame_loop = Rc::new(FrameLoop::start(FrameContext {
        runner: runner.clone(),
        surface,
        last_instant: Instant::now(),
    }));

    dom::add_listener(window, "pagehide", move |_: web::Event| {
        let was_running = frame_loop.is_running();
        frame_loop.stop();
        runner.borrow_mut().stop();
        log::info!("[field] stopped on pagehide (loop running={was_running})");
    });
    Ok(())
}
