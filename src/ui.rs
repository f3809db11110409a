// Push the current navigation state into the DOM.

use crate::constants::*;
use crate::events::Wiring;
use crate::markup::{self, PanelKey};
use crate::overlay;
use glam::Vec2;
use tour_core::{menu, minimap, NavigationState, TourStore, MINIMAP_PADDING};
use web_sys as web;

pub fn refresh(w: &Wiring) {
    let store = w.store.borrow();
    let state = store.state();
    let doc = &w.document;

    overlay::set_visible(doc, MINIMAP_PANEL_ID, state.show_minimap);
    overlay::set_visible(doc, GALLERY_PANEL_ID, state.show_gallery);
    overlay::set_visible(doc, CONTROLS_PANEL_ID, state.show_controls);
    overlay::set_visible(doc, NAVIGATION_MENU_PANEL_ID, state.show_navigation_menu);
    let info_open = w.shortcuts.borrow().info_open();
    overlay::set_visible(doc, INFO_PANEL_ID, info_open);

    overlay::set_pressed(doc, BTN_MINIMAP_ID, state.show_minimap);
    overlay::set_pressed(doc, BTN_GALLERY_ID, state.show_gallery);
    overlay::set_pressed(doc, BTN_MENU_ID, state.show_navigation_menu);
    overlay::set_pressed(doc, BTN_FULLSCREEN_ID, state.fullscreen);
    overlay::set_pressed(doc, BTN_INFO_ID, info_open);
    overlay::set_pressed(doc, BTN_HIDE_ID, state.all_overlays_hidden());
    overlay::set_pressed(doc, BTN_MUSIC_ID, w.music.borrow().state().playing);

    let title = store.current_node().map(|n| n.name.as_str()).unwrap_or("");
    overlay::set_text(doc, TITLE_ID, title);

    let load_error = w.load_error.borrow();
    let key = PanelKey::of(&store, load_error.as_deref());
    let mut rendered = w.rendered_panels.borrow_mut();
    if rendered.as_ref() != Some(&key) {
        render_panels(doc, &store, load_error.as_deref());
        *rendered = Some(key);
    }
    sync_fullscreen(doc, state);
}

fn render_panels(doc: &web::Document, store: &TourStore, load_error: Option<&str>) {
    let catalog = store.catalog();
    let current = store.current_node_id();
    let bodies = [GALLERY_BODY_ID, NAVIGATION_MENU_BODY_ID, MINIMAP_BODY_ID];

    if catalog.is_empty() {
        let html = match load_error {
            Some(msg) => markup::error_html(msg),
            None => markup::loading_html().to_owned(),
        };
        for id in bodies {
            overlay::set_html(doc, id, &html);
        }
        overlay::set_html(doc, INFO_BODY_ID, &markup::info_html(None, 0));
        return;
    }

    let state = store.state();
    if state.show_gallery {
        let items = menu::gallery_items(catalog, current);
        overlay::set_html(doc, GALLERY_BODY_ID, &markup::gallery_html(&items));
    }
    if state.show_navigation_menu {
        let categories = menu::categorize(catalog, current);
        overlay::set_html(doc, NAVIGATION_MENU_BODY_ID, &markup::menu_html(&categories));
    }
    if state.show_minimap {
        let size = Vec2::new(MINIMAP_WIDTH, MINIMAP_HEIGHT);
        let view = minimap::layout(catalog, current, size, MINIMAP_PADDING);
        overlay::set_html(doc, MINIMAP_BODY_ID, &markup::minimap_svg(&view, size));
    }
    let info = markup::info_html(store.current_node(), catalog.hotspots_for(current).len());
    overlay::set_html(doc, INFO_BODY_ID, &info);
}

fn sync_fullscreen(doc: &web::Document, state: &NavigationState) {
    let in_fullscreen = doc.fullscreen_element().is_some();
    if state.fullscreen && !in_fullscreen {
        if let Some(root) = doc.document_element() {
            if let Err(e) = root.request_fullscreen() {
                log::warn!("[ui] fullscreen request failed: {:?}", e);
            }
        }
    } else if !state.fullscreen && in_fullscreen {
        doc.exit_fullscreen();
    }
}
