use super::Wiring;
use crate::dom;
use tour_core::{KeyInput, KeyOutcome, ShortcutTargets};
use wasm_bindgen::JsCast;
use web_sys as web;

fn key_input(ev: &web::KeyboardEvent) -> KeyInput {
    KeyInput {
        key: ev.key(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        alt: ev.alt_key(),
        in_text_input: dom::is_text_entry(ev.target()),
    }
}

fn confirm_with_user(message: &str) -> bool {
    web::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &Wiring) {
    if ev.repeat() && !matches!(ev.key().as_str(), "ArrowUp" | "ArrowDown") {
        return;
    }
    let input = key_input(ev);
    let outcome = {
        let mut store = w.store.borrow_mut();
        let mut music = w.music.borrow_mut();
        let mut confirm = confirm_with_user;
        w.shortcuts.borrow_mut().dispatch(
            &input,
            ShortcutTargets {
                store: &mut store,
                music: &mut *music,
                confirm: &mut confirm,
            },
        )
    };
    if outcome == KeyOutcome::Handled {
        ev.prevent_default();
        w.refresh();
    }
}

pub fn wire_global_keydown(w: Wiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
