// Binding to the external panorama viewer (`window.tourViewer`).
//
// The viewer owns rendering and hotspot hit-testing. We tell it which
// scenes exist, which one to show and which hotspots belong to it; it tells
// us about hotspot navigation through a `tour:scenechange` CustomEvent.

use crate::constants::SCENE_CHANGE_EVENT;
use crate::data;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tour_core::{Hotspot, PanoramaCatalog, SceneRenderer, TourConfig, TourStore};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = tourViewer, js_name = registerScenes, catch)]
    fn js_register_scenes(scenes: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = tourViewer, js_name = loadScene, catch)]
    fn js_load_scene(node_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = tourViewer, js_name = setHotspots, catch)]
    fn js_set_hotspots(node_id: &str, hotspots: &JsValue) -> Result<(), JsValue>;
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Hand the full scene list to the viewer before any scene is loaded.
pub fn register_scenes(catalog: &PanoramaCatalog) {
    let result = to_js(catalog.list())
        .and_then(|scenes| js_register_scenes(&scenes).map_err(|e| anyhow::anyhow!("{:?}", e)));
    match result {
        Ok(()) => log::info!("[viewer] registered {} scenes", catalog.len()),
        Err(e) => log::error!("[viewer] registerScenes failed: {:?}", e),
    }
}

fn push_hotspots(node_id: &str, hotspots: &[Hotspot]) {
    let result = to_js(hotspots)
        .and_then(|js| js_set_hotspots(node_id, &js).map_err(|e| anyhow::anyhow!("{:?}", e)));
    if let Err(e) = result {
        log::error!("[viewer] setHotspots({}) failed: {:?}", node_id, e);
    }
}

/// Late-bound handle to the store, filled in once the store exists.
#[derive(Clone, Default)]
pub struct StoreSlot(Rc<RefCell<Weak<RefCell<TourStore>>>>);

impl StoreSlot {
    pub fn bind(&self, store: &Rc<RefCell<TourStore>>) {
        *self.0.borrow_mut() = Rc::downgrade(store);
    }

    fn get(&self) -> Option<Rc<RefCell<TourStore>>> {
        self.0.borrow().upgrade()
    }
}

/// `SceneRenderer` backed by the JS viewer. Loading a scene also makes sure
/// its hotspots reach the viewer, fetching them on first visit.
pub struct ViewerBinding {
    config: Rc<TourConfig>,
    store: StoreSlot,
}

impl ViewerBinding {
    pub fn new(config: Rc<TourConfig>) -> (Self, StoreSlot) {
        let store = StoreSlot::default();
        (
            Self {
                config,
                store: store.clone(),
            },
            store,
        )
    }
}

impl SceneRenderer for ViewerBinding {
    fn load_scene(&mut self, node_id: &str) {
        if let Err(e) = js_load_scene(node_id) {
            log::error!("[viewer] loadScene({}) failed: {:?}", node_id, e);
            return;
        }
        log::info!("[viewer] scene {}", node_id);

        // Runs after the store borrow that triggered this call is released.
        let config = self.config.clone();
        let slot = self.store.clone();
        let node_id = node_id.to_owned();
        spawn_local(async move {
            let Some(store) = slot.get() else { return };
            let cached = {
                let s = store.borrow();
                s.catalog()
                    .has_hotspots(&node_id)
                    .then(|| s.catalog().hotspots_for(&node_id).to_vec())
            };
            let hotspots = match cached {
                Some(h) => h,
                None => match data::list_hotspots(&config, &node_id).await {
                    Ok(h) => {
                        store.borrow_mut().set_hotspots(&node_id, h.clone());
                        h
                    }
                    Err(e) => {
                        log::error!("[data] hotspots for {} failed: {:?}", node_id, e);
                        return;
                    }
                },
            };
            push_hotspots(&node_id, &hotspots);
        });
    }
}

/// Route viewer-side navigation into the store, then run `on_change`.
pub fn wire_scene_change(store: Rc<RefCell<TourStore>>, mut on_change: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(id) = ev
            .dyn_ref::<web::CustomEvent>()
            .and_then(|ce| ce.detail().as_string())
        else {
            log::warn!("[viewer] {} without a node id", SCENE_CHANGE_EVENT);
            return;
        };
        // A synchronous echo of our own loadScene arrives while the store is
        // still borrowed; the store already holds that node.
        let Ok(mut s) = store.try_borrow_mut() else {
            log::debug!("[viewer] echo for {} ignored", id);
            return;
        };
        s.sync_from_viewer(&id);
        drop(s);
        on_change();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback(SCENE_CHANGE_EVENT, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
