#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use tour_core::{ShortcutDispatcher, TourConfig, TourStore};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod data;
mod dom;
mod events;
mod markup;
mod overlay;
mod storage;
mod ui;
mod viewer;

fn read_config(document: &web::Document) -> TourConfig {
    let cfg = TourConfig::from_lookup(|key| dom::body_setting(document, key));
    log::info!(
        "[config] api={} default={} music={}",
        cfg.api_base,
        cfg.default_node_id,
        cfg.music_src
    );
    cfg
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tour-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = Rc::new(read_config(&document));

    let (renderer, store_slot) = viewer::ViewerBinding::new(config.clone());
    let store = Rc::new(RefCell::new(TourStore::new(
        &config,
        Box::new(renderer),
        Box::new(storage::LocalStoragePersistence::new(&config.storage_key)),
    )));
    store_slot.bind(&store);

    let music = audio::BackgroundMusic::new(&config.music_src)?;

    let wiring = events::Wiring {
        document: document.clone(),
        store: store.clone(),
        shortcuts: Rc::new(RefCell::new(ShortcutDispatcher::new())),
        music: Rc::new(RefCell::new(music)),
        load_error: Rc::new(RefCell::new(None)),
        rendered_panels: Rc::new(RefCell::new(None)),
    };
    events::wire_all(&wiring);
    let w = wiring.clone();
    wiring.music.borrow().set_on_revert(move || w.refresh());
    wiring.refresh();

    match data::list_panoramas(&config).await {
        Ok(catalog) => {
            viewer::register_scenes(&catalog);
            store.borrow_mut().set_catalog(catalog);
        }
        Err(e) => {
            // navigation keeps working on the default node; panels show the error
            log::error!("[data] panorama list failed: {:?}", e);
            *wiring.load_error.borrow_mut() = Some(format!("Could not load panoramas: {}", e));
        }
    }
    wiring.refresh();

    Ok(())
}
