use crate::constants::*;
use crate::dom;
use glam::Vec2;
use particle_core::interactions::{ripple_origin, Magnetic, Tilt};
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_hover_effects(document: &web::Document) {
    let magnetic = dom::query_html_elements(document, MAGNETIC_SELECTOR);
    let tilt = dom::query_html_elements(document, TILT_SELECTOR);
    let ripple = dom::query_html_elements(document, RIPPLE_SELECTOR);
    log::info!(
        "[effects] hover: magnetic={} tilt={} ripple={}",
        magnetic.len(),
        tilt.len(),
        ripple.len()
    );
    for el in magnetic {
        wire_magnetic(el, Magnetic::default());
    }
    for el in tilt {
        wire_tilt(document, el, Tilt::default());
    }
    if !ripple.is_empty() {
        dom::inject_style_once(document, RIPPLE_STYLE_ID, RIPPLE_KEYFRAMES);
    }
    for el in ripple {
        wire_ripple(document, el);
    }
}

fn wire_magnetic(el: web::HtmlElement, magnetic: Magnetic) {
    dom::set_style(&el, "transition", MAGNETIC_TRANSITION);

    let target = el.clone();
    dom::add_listener(&el, "mousemove", move |ev: web::MouseEvent| {
        let offset = magnetic.offset(dom::element_rect(&target), client_pos(&ev));
        dom::set_style(&target, "transform", &Magnetic::transform_css(offset));
    });

    let target = el.clone();
    dom::add_listener(&el, "mouseleave", move |_: web::MouseEvent| {
        dom::set_style(&target, "transform", &Magnetic::transform_css(Vec2::ZERO));
    });
}

fn create_glare(document: &web::Document, card: &web::HtmlElement) -> Option<web::HtmlElement> {
    let glare = dom::create_html_element(document, "div")?;
    glare.set_class_name(TILT_GLARE_CLASS);
    dom::set_styles(
        &glare,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("pointer-events", "none"),
            ("background", TILT_GLARE_BASE),
            ("border-radius", "inherit"),
            ("opacity", "0"),
            ("transition", "opacity 0.3s ease"),
            ("z-index", TILT_GLARE_Z_INDEX),
        ],
    );
    contain(card);
    card.append_child(&glare).ok()?;
    Some(glare)
}

// Absolutely positioned overlays must stay inside the host.
fn contain(host: &web::HtmlElement) {
    dom::set_styles(host, &[("position", "relative"), ("overflow", "hidden")]);
}

fn wire_tilt(document: &web::Document, el: web::HtmlElement, tilt: Tilt) {
    dom::set_style(&el, "transition", TILT_TRANSITION);
    dom::set_style(&el, "transform-style", "preserve-3d");
    let glare = create_glare(document, &el);
    if glare.is_none() {
        log::warn!("[effects] could not add tilt glare");
    }

    let target = el.clone();
    let glare_move = glare.clone();
    dom::add_listener(&el, "mousemove", move |ev: web::MouseEvent| {
        let pose = tilt.pose(dom::element_rect(&target), client_pos(&ev));
        dom::set_style(&target, "transform", &tilt.transform_css(&pose));
        if let Some(g) = &glare_move {
            dom::set_style(g, "background", &Tilt::glare_css(&pose));
            dom::set_style(g, "opacity", "1");
        }
    });

    let target = el.clone();
    dom::add_listener(&el, "mouseleave", move |_: web::MouseEvent| {
        dom::set_style(&target, "transform", &tilt.transform_css(&tilt.rest()));
        if let Some(g) = &glare {
            dom::set_style(g, "opacity", "0");
        }
    });
}

fn spawn_ripple(document: &web::Document, host: &web::HtmlElement, origin: Vec2) -> Option<()> {
    let ripple = dom::create_html_element(document, "span")?;
    ripple.set_class_name(RIPPLE_CLASS);
    let half = format!("-{}px", RIPPLE_SEED_PX / 2.0);
    let seed = format!("{RIPPLE_SEED_PX}px");
    let left = format!("{:.1}px", origin.x);
    let top = format!("{:.1}px", origin.y);
    dom::set_styles(
        &ripple,
        &[
            ("position", "absolute"),
            ("border-radius", "50%"),
            ("background", RIPPLE_BACKGROUND),
            ("transform", "scale(0)"),
            ("animation", RIPPLE_ANIMATION),
            ("pointer-events", "none"),
            ("left", left.as_str()),
            ("top", top.as_str()),
            ("width", seed.as_str()),
            ("height", seed.as_str()),
            ("margin-left", half.as_str()),
            ("margin-top", half.as_str()),
        ],
    );
    host.append_child(&ripple).ok()?;
    dom::set_timeout(RIPPLE_DURATION_MS, move || ripple.remove());
    Some(())
}

fn wire_ripple(document: &web::Document, el: web::HtmlElement) {
    contain(&el);
    let document = document.clone();
    let host = el.clone();
    dom::add_listener(&el, "click", move |ev: web::MouseEvent| {
        let origin = ripple_origin(dom::element_rect(&host), client_pos(&ev));
        if spawn_ripple(&document, &host, origin).is_none() {
            log::warn!("[effects] ripple failed");
        }
    });
}
