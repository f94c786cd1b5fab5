use crate::constants::*;
use crate::dom;
use particle_core::interactions::{
    carousel_gap, swipe, Accordion, Carousel, CAROUSEL_AUTOPLAY_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- FAQ accordion ----------------

fn set_open(item: &web::HtmlElement, open: bool) {
    _ = item.class_list().toggle_with_force(ACTIVE_CLASS, open);
    if let Some(answer) = dom::query_html_element(item, FAQ_ANSWER_SELECTOR) {
        let height = if open {
            format!("{}px", answer.scroll_height())
        } else {
            "0".to_string()
        };
        dom::set_style(&answer, "max-height", &height);
    }
}

pub fn wire_faq(document: &web::Document) {
    let items = dom::query_html_elements(document, FAQ_ITEM_SELECTOR);
    if items.is_empty() {
        return;
    }
    let initially_open = items
        .iter()
        .position(|item| item.class_list().contains(ACTIVE_CLASS));
    let state = Rc::new(RefCell::new(Accordion::new(initially_open)));
    let items = Rc::new(items);

    for (index, item) in items.iter().enumerate() {
        let Some(question) = dom::query_html_element(item, FAQ_QUESTION_SELECTOR) else {
            continue;
        };
        if dom::query_html_element(item, FAQ_ANSWER_SELECTOR).is_none() {
            continue;
        }
        let state = state.clone();
        let items = items.clone();
        dom::add_listener(&question, "click", move |_: web::MouseEvent| {
            let open = state.borrow_mut().toggle(index);
            for (j, it) in items.iter().enumerate() {
                set_open(it, open == Some(j));
            }
        });
    }
    log::info!("[faq] items={}", items.len());
}

// ---------------- Portfolio carousel ----------------

struct CarouselView {
    track: web::HtmlElement,
    first_slide: web::HtmlElement,
    dots: Vec<web::HtmlElement>,
    state: Carousel,
}

impl CarouselView {
    fn gap(&self) -> f32 {
        let computed = web::window()
            .and_then(|w| w.get_computed_style(&self.track).ok().flatten())
            .and_then(|style| style.get_property_value("gap").ok());
        carousel_gap(computed.as_deref())
    }

    fn update(&self) {
        let width = self.first_slide.offset_width() as f32;
        let offset = self.state.offset_px(width, self.gap());
        dom::set_style(&self.track, "transform", &format!("translateX({offset}px)"));
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, i == self.state.index());
        }
    }
}

struct Autoplay {
    handle: Cell<Option<i32>>,
    tick: Closure<dyn FnMut()>,
}

impl Autoplay {
    fn start(&self) {
        self.stop();
        let Some(w) = web::window() else {
            return;
        };
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            self.tick.as_ref().unchecked_ref(),
            CAROUSEL_AUTOPLAY_MS,
        ) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::warn!("[carousel] setInterval failed: {e:?}"),
        }
    }

    fn stop(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

type View = Rc<RefCell<CarouselView>>;

/// Stop autoplay, apply `step`, redraw, then restart autoplay.
fn on_user<F>(view: &View, autoplay: &Rc<Autoplay>, step: F) -> impl FnMut(web::MouseEvent)
where
    F: Fn(&mut Carousel) + 'static,
{
    let view = view.clone();
    let autoplay = autoplay.clone();
    move |_| {
        autoplay.stop();
        {
            let mut v = view.borrow_mut();
            step(&mut v.state);
            v.update();
        }
        autoplay.start();
    }
}

fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.changed_touches().get(0).map(|t| t.screen_x() as f32)
}

pub fn wire_carousel(document: &web::Document) {
    let Some(track) = document
        .query_selector(CAROUSEL_TRACK_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let slides = dom::query_html_elements(document, CAROUSEL_SLIDE_SELECTOR);
    let (Some(first_slide), Some(state)) = (slides.first().cloned(), Carousel::new(slides.len()))
    else {
        return;
    };
    let dots = dom::query_html_elements(document, CAROUSEL_DOT_SELECTOR);
    let view: View = Rc::new(RefCell::new(CarouselView {
        track: track.clone(),
        first_slide,
        dots: dots.clone(),
        state,
    }));

    let tick_view = view.clone();
    let autoplay = Rc::new(Autoplay {
        handle: Cell::new(None),
        tick: Closure::wrap(Box::new(move || {
            let mut v = tick_view.borrow_mut();
            v.state.next();
            v.update();
        }) as Box<dyn FnMut()>),
    });

    if let Some(prev) = document.query_selector(CAROUSEL_PREV_SELECTOR).ok().flatten() {
        dom::add_listener(&prev, "click", on_user(&view, &autoplay, |c| {
            c.prev();
        }));
    }
    if let Some(next) = document.query_selector(CAROUSEL_NEXT_SELECTOR).ok().flatten() {
        dom::add_listener(&next, "click", on_user(&view, &autoplay, |c| {
            c.next();
        }));
    }
    for (i, dot) in dots.iter().enumerate() {
        dom::add_listener(dot, "click", on_user(&view, &autoplay, move |c| {
            c.go_to(i);
        }));
    }

    let a = autoplay.clone();
    dom::add_listener(&track, "mouseenter", move |_: web::MouseEvent| a.stop());
    let a = autoplay.clone();
    dom::add_listener(&track, "mouseleave", move |_: web::MouseEvent| a.start());

    let touch_start = Rc::new(Cell::new(0.0_f32));
    let (start, a) = (touch_start.clone(), autoplay.clone());
    dom::add_listener(&track, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            start.set(x);
        }
        a.stop();
    });
    let (v, a) = (view.clone(), autoplay.clone());
    dom::add_listener(&track, "touchend", move |ev: web::TouchEvent| {
        if let Some(dir) = first_touch_x(&ev).and_then(|end| swipe(touch_start.get(), end)) {
            let mut view = v.borrow_mut();
            view.state.apply(dir);
            view.update();
        }
        a.start();
    });

    if let Some(window) = web::window() {
        let v = view.clone();
        dom::add_listener(&window, "resize", move |_: web::Event| v.borrow().update());
    }

    autoplay.start();
    log::info!("[carousel] slides={} dots={}", slides.len(), dots.len());
}
