use crate::constants::HIDDEN_CLASS;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if visible {
        show(document, id);
    } else {
        hide(document, id);
    }
}

#[inline]
pub fn set_pressed(document: &web::Document, id: &str, pressed: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
    }
}

/// Replace the content of a panel body.
pub fn set_html(document: &web::Document, id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
