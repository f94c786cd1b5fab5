use crate::constants::{OVERRIDE_ATTR_PREFIX, REDUCED_MOTION_QUERY};
use particle_core::interactions::ElementRect;
use particle_core::OVERRIDE_KEYS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// True when the user asked the OS/browser to minimise motion.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Match the canvas backing store to the viewport and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let Some(window) = web::window() else {
        return (canvas.width() as f32, canvas.height() as f32);
    };
    let (w, h) = viewport_size(&window);
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
    (canvas.width() as f32, canvas.height() as f32)
}

pub fn element_rect(el: &web::Element) -> ElementRect {
    let r = el.get_bounding_client_rect();
    ElementRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// `data-*` overrides present on the canvas, keyed without the prefix.
pub fn read_overrides(el: &web::Element) -> Vec<(&'static str, String)> {
    OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            el.get_attribute(&format!("{OVERRIDE_ATTR_PREFIX}{key}"))
                .map(|v| (*key, v))
        })
        .collect()
}

pub fn query_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

pub fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(el, property, value);
    }
}

pub fn create_html_element(document: &web::Document, tag: &str) -> Option<web::HtmlElement> {
    document
        .create_element(tag)
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

pub fn query_html_element(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// Add a `<style>` block to `<head>` unless one with `id` already exists.
pub fn inject_style_once(document: &web::Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let (Some(style), Some(head)) = (create_html_element(document, "style"), document.head())
    else {
        log::warn!("[dom] could not inject style #{id}");
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    _ = head.append_child(&style);
}

/// Run `f` once after `ms`. The callback is freed after it runs.
pub fn set_timeout<F: FnOnce() + 'static>(ms: i32, f: F) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
    {
        log::warn!("[dom] setTimeout failed: {e:?}");
    }
}

/// Elements under `root` matching `selector`.
pub fn query_within(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}
