use crate::constants::*;
use crate::dom;
use crate::frame;
use crate::motion::EffectPlan;
use particle_core::interactions::{parallax_offset, parallax_speed, scroll_progress, Counter};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_scroll_effects(window: &web::Window, document: &web::Document, plan: EffectPlan) {
    if plan.scroll_progress {
        wire_scroll_progress(window, document);
    }
    if plan.parallax {
        wire_parallax(window, document);
    }
    if plan.reveal_on_scroll {
        wire_reveal(document);
    } else {
        reveal_all(document);
    }
    if plan.animate_counters {
        wire_counters(document);
    } else {
        finish_counters(document);
    }
}

fn progress_bar(document: &web::Document) -> Option<web::HtmlElement> {
    let selector = format!(".{SCROLL_PROGRESS_CLASS}");
    if let Some(existing) = document.query_selector(&selector).ok().flatten() {
        return existing.dyn_into::<web::HtmlElement>().ok();
    }
    let bar = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    bar.set_class_name(SCROLL_PROGRESS_CLASS);
    dom::set_style(&bar, "width", "0%");
    dom::set_style(&bar, "transition", SCROLL_PROGRESS_TRANSITION);
    document.body()?.append_child(&bar).ok()?;
    Some(bar)
}

fn wire_scroll_progress(window: &web::Window, document: &web::Document) {
    let Some(bar) = progress_bar(document) else {
        log::warn!("[effects] no body for scroll progress bar");
        return;
    };
    let win = window.clone();
    let doc = document.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let top = win.scroll_y().unwrap_or(0.0) as f32;
        let doc_height = doc
            .document_element()
            .map(|e| e.scroll_height() as f32)
            .unwrap_or(0.0);
        let (_, viewport_height) = dom::viewport_size(&win);
        let pct = scroll_progress(top, doc_height, viewport_height);
        dom::set_style(&bar, "width", &format!("{pct:.2}%"));
    });
}

fn wire_parallax(window: &web::Window, document: &web::Document) {
    let layers: Vec<(web::HtmlElement, f32)> = dom::query_html_elements(document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|el| {
            let speed = parallax_speed(el.get_attribute(PARALLAX_ATTR).as_deref());
            (el, speed)
        })
        .collect();
    if layers.is_empty() {
        return;
    }
    log::info!("[effects] parallax layers={}", layers.len());
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0) as f32;
        for (el, speed) in &layers {
            let y = parallax_offset(scroll_y, *speed);
            dom::set_style(el, "transform", &format!("translateY({y:.2}px)"));
        }
    });
}

fn counter_for(el: &web::Element) -> Counter {
    Counter::from_attrs(
        el.get_attribute(COUNT_ATTR).as_deref(),
        el.get_attribute(COUNT_SUFFIX_ATTR).as_deref(),
    )
    .with_easing_attr(el.get_attribute(COUNT_EASING_ATTR).as_deref())
}

fn finish_counters(document: &web::Document) {
    for el in dom::query_html_elements(document, COUNTER_SELECTOR) {
        let counter = counter_for(&el);
        el.set_text_content(Some(&counter.text_at(counter.duration_ms)));
    }
}

fn run_counter(el: web::Element) {
    let counter = counter_for(&el);
    let mut started: Option<f64> = None;
    frame::animate_until(move |now| {
        let elapsed = now - *started.get_or_insert(now);
        el.set_text_content(Some(&counter.text_at(elapsed)));
        !counter.is_finished(elapsed)
    });
}

/// Call `on_visible` once per element the first time it is at least
/// `threshold` visible. Returns false if observers are unavailable.
fn observe_once<F>(elements: &[web::HtmlElement], threshold: f64, mut on_visible: F) -> bool
where
    F: FnMut(web::Element) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in elements {
                observer.observe(el);
            }
            callback.forget();
            true
        }
        Err(e) => {
            log::warn!("[effects] IntersectionObserver unavailable: {e:?}");
            false
        }
    }
}

fn reveal_all(document: &web::Document) {
    for el in dom::query_html_elements(document, REVEAL_SELECTOR) {
        _ = el.class_list().add_1(REVEAL_CLASS);
    }
}

fn wire_reveal(document: &web::Document) {
    let targets = dom::query_html_elements(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(ANIMATE_READY_CLASS);
    }
    let observed = observe_once(&targets, REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1(REVEAL_CLASS);
    });
    if observed {
        log::info!("[effects] reveal targets={}", targets.len());
    } else {
        reveal_all(document);
    }
}

fn wire_counters(document: &web::Document) {
    let counters = dom::query_html_elements(document, COUNTER_SELECTOR);
    if counters.is_empty() {
        return;
    }
    if observe_once(&counters, COUNTER_THRESHOLD, run_counter) {
        log::info!("[effects] counters={}", counters.len());
    } else {
        finish_counters(document);
    }
}
