use crate::constants::{CONFIG_ATTR_PREFIX, NODE_ID_ATTR, NODE_ID_SELECTOR};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Delegated click listener: `handler` receives the `data-node-id` of the
/// clicked descendant, if any.
pub fn add_node_click_listener(
    document: &web::Document,
    container_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(container) = document.get_element_by_id(container_id) else {
        log::warn!("[dom] missing #{}", container_id);
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(id) = clicked_node_id(&ev) {
            ev.prevent_default();
            handler(id);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn clicked_node_id(ev: &web::Event) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let el = target.closest(NODE_ID_SELECTOR).ok().flatten()?;
    el.get_attribute(NODE_ID_ATTR)
}

/// True when keyboard focus is in a field that takes text.
pub fn is_text_entry(target: Option<web::EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_into::<web::HtmlElement>().ok()) else {
        return false;
    };
    if el.is_content_editable() {
        return true;
    }
    matches!(
        el.tag_name().to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

/// Read a `data-*` setting from `<body>`.
pub fn body_setting(document: &web::Document, key: &str) -> Option<String> {
    document
        .body()
        .and_then(|b| b.get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}")))
}
