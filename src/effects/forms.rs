use crate::constants::*;
use crate::dom;
use particle_core::interactions::{validate_required, FieldError, FieldKind};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_forms(document: &web::Document) {
    let forms = dom::query_html_elements(document, FORM_SELECTOR);
    if forms.is_empty() {
        return;
    }
    log::info!("[forms] validating {} form(s)", forms.len());
    for form in forms {
        wire_form(document, form);
    }
}

fn field_value(el: &web::Element) -> Option<(String, FieldKind)> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.value(), FieldKind::from_type_attr(Some(&input.type_()))));
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return Some((area.value(), FieldKind::Text));
    }
    el.dyn_ref::<web::HtmlSelectElement>()
        .map(|select| (select.value(), FieldKind::Text))
}

fn clear_errors(form: &web::Element) {
    for el in dom::query_within(form, &format!(".{FORM_ERROR_CLASS}")) {
        el.remove();
    }
    for el in dom::query_within(form, &format!(".{INPUT_ERROR_CLASS}")) {
        _ = el.class_list().remove_1(INPUT_ERROR_CLASS);
    }
}

fn show_error(document: &web::Document, input: &web::Element, error: FieldError) {
    _ = input.class_list().add_1(INPUT_ERROR_CLASS);
    let (Some(message), Some(parent)) = (
        dom::create_html_element(document, "div"),
        input.parent_node(),
    ) else {
        return;
    };
    message.set_class_name(FORM_ERROR_CLASS);
    message.set_text_content(Some(error.message()));
    _ = parent.append_child(&message);
}

/// Mark every failing required field. True when all pass.
fn validate_form(document: &web::Document, form: &web::Element) -> bool {
    clear_errors(form);
    let mut valid = true;
    for el in dom::query_within(form, REQUIRED_SELECTOR) {
        let Some((value, kind)) = field_value(&el) else {
            continue;
        };
        if let Err(error) = validate_required(kind, &value) {
            show_error(document, &el, error);
            valid = false;
        }
    }
    valid
}

fn submit(document: &web::Document, form: &web::HtmlElement) {
    let button = dom::query_html_element(form, SUBMIT_SELECTOR);
    let label = button.as_ref().and_then(|b| b.text_content());
    if let Some(b) = &button {
        _ = b.set_attribute("disabled", "");
        b.set_inner_html(FORM_SENDING_HTML);
    }

    let document = document.clone();
    let form = form.clone();
    dom::set_timeout(FORM_SEND_DELAY_MS, move || {
        if let Some(success) = dom::create_html_element(&document, "div") {
            success.set_class_name(FORM_SUCCESS_CLASS);
            success.set_text_content(Some(FORM_SUCCESS_TEXT));
            _ = form.insert_before(&success, form.first_child().as_ref());
            dom::set_timeout(FORM_SUCCESS_MS, move || success.remove());
        }
        if let Some(f) = form.dyn_ref::<web::HtmlFormElement>() {
            f.reset();
        }
        if let Some(b) = &button {
            _ = b.remove_attribute("disabled");
            b.set_text_content(label.as_deref());
        }
        log::info!("[forms] submitted");
    });
}

fn wire_form(document: &web::Document, form: web::HtmlElement) {
    let document = document.clone();
    let target = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if validate_form(&document, &target) {
            submit(&document, &target);
        }
    });
}
