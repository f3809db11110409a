use super::Wiring;
use crate::constants::*;
use crate::dom;
use tour_core::{MusicControl, TourStore};
use wasm_bindgen::JsCast;
use web_sys as web;

fn bind_store_button(w: &Wiring, id: &str, action: fn(&mut TourStore)) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, id, move || {
        action(&mut w2.store.borrow_mut());
        w2.refresh();
    });
}

pub fn wire_control_bar(w: &Wiring) {
    bind_store_button(w, BTN_PREVIOUS_ID, TourStore::go_previous);
    bind_store_button(w, BTN_NEXT_ID, TourStore::go_next);
    bind_store_button(w, BTN_MINIMAP_ID, TourStore::toggle_minimap);
    bind_store_button(w, BTN_GALLERY_ID, TourStore::toggle_gallery);
    bind_store_button(w, BTN_MENU_ID, TourStore::toggle_navigation_menu);
    bind_store_button(w, BTN_FULLSCREEN_ID, TourStore::toggle_fullscreen);
    bind_store_button(w, BTN_HIDE_ID, TourStore::toggle_all_overlays);
    bind_store_button(w, BTN_CONTROLS_ID, TourStore::toggle_controls);

    let w2 = w.clone();
    dom::add_click_listener(&w.document, BTN_MUSIC_ID, move || {
        w2.music.borrow_mut().toggle();
        w2.refresh();
    });

    let w3 = w.clone();
    dom::add_click_listener(&w.document, BTN_INFO_ID, move || {
        {
            let mut shortcuts = w3.shortcuts.borrow_mut();
            let open = shortcuts.info_open();
            shortcuts.set_info_open(!open);
        }
        w3.refresh();
    });
}

/// Gallery, navigation menu and minimap entries all carry `data-node-id`.
pub fn wire_panel_lists(w: &Wiring) {
    for container in [GALLERY_BODY_ID, NAVIGATION_MENU_BODY_ID, MINIMAP_BODY_ID] {
        let w2 = w.clone();
        dom::add_node_click_listener(&w.document, container, move |id| {
            log::info!("[ui] {} -> {}", container, id);
            w2.store.borrow_mut().set_current_node(&id);
            w2.refresh();
        });
    }
}

/// Keep the fullscreen flag honest when the browser leaves fullscreen on its
/// own (Esc handled by the browser, F11, ...) or refuses a request.
pub fn wire_fullscreen_change(w: Wiring) {
    for event in ["fullscreenchange", "fullscreenerror"] {
        let w = w.clone();
        let document = w.document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
            let on = w.document.fullscreen_element().is_some();
            let Ok(mut store) = w.store.try_borrow_mut() else {
                return;
            };
            if store.set_fullscreen(on) {
                drop(store);
                log::info!("[ui] {} -> fullscreen={}", event, on);
                w.refresh();
            }
        }) as Box<dyn FnMut(_)>);
        _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
