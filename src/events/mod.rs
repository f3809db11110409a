pub mod controls;
pub mod keyboard;

use crate::audio::BackgroundMusic;
use crate::markup::PanelKey;
use std::cell::RefCell;
use std::rc::Rc;
use tour_core::{ShortcutDispatcher, TourStore};
use web_sys as web;

/// Shared handles every listener needs. Cloning is cheap.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub store: Rc<RefCell<TourStore>>,
    pub shortcuts: Rc<RefCell<ShortcutDispatcher>>,
    pub music: Rc<RefCell<BackgroundMusic>>,
    /// Set when the panorama list could not be loaded.
    pub load_error: Rc<RefCell<Option<String>>>,
    /// Inputs of the last panel render.
    pub rendered_panels: Rc<RefCell<Option<PanelKey>>>,
}

impl Wiring {
    pub fn refresh(&self) {
        crate::ui::refresh(self);
    }
}

pub fn wire_all(w: &Wiring) {
    keyboard::wire_global_keydown(w.clone());
    controls::wire_control_bar(w);
    controls::wire_panel_lists(w);
    controls::wire_fullscreen_change(w.clone());
    let w2 = w.clone();
    crate::viewer::wire_scene_change(w.store.clone(), move || w2.refresh());
}
