// Shared fixtures for the host-side store tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use tour_core::{
    GeoCoord, MemoryPersistence, NavigationState, PanoramaCatalog, PanoramaNode, SceneRenderer,
    StatePersistence, TourConfig, TourError, TourStore,
};

/// Renderer that records every scene it was asked to load.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub loaded: Rc<RefCell<Vec<String>>>,
}

impl SceneRenderer for RecordingRenderer {
    fn load_scene(&mut self, node_id: &str) {
        self.loaded.borrow_mut().push(node_id.to_owned());
    }
}

/// Persistence whose every call fails.
pub struct BrokenPersistence;

impl StatePersistence for BrokenPersistence {
    fn save(&mut self, _state: &NavigationState) -> tour_core::Result<()> {
        Err(TourError::Persistence("quota exceeded".into()))
    }

    fn clear(&mut self) -> tour_core::Result<()> {
        Err(TourError::Persistence("storage disabled".into()))
    }
}

pub fn node(id: &str, lat: f64, lng: f64, links: &[&str]) -> PanoramaNode {
    PanoramaNode {
        id: id.to_owned(),
        name: format!("Panorama {id}"),
        image: format!("/images/{id}.jpg"),
        thumbnail: format!("/thumbs/{id}.jpg"),
        links: links.iter().map(|s| s.to_string()).collect(),
        coordinates: GeoCoord::new(lat, lng),
    }
}

pub fn catalog(ids: &[&str]) -> PanoramaCatalog {
    PanoramaCatalog::from_nodes(
        ids.iter()
            .enumerate()
            .map(|(i, id)| node(id, -6.2 + i as f64 * 0.001, 106.8 + i as f64 * 0.001, &[])),
    )
}

pub fn make_store(ids: &[&str]) -> (TourStore, RecordingRenderer, MemoryPersistence) {
    let renderer = RecordingRenderer::default();
    let persistence = MemoryPersistence::new();
    let mut store = TourStore::new(
        &TourConfig::default(),
        Box::new(renderer.clone()),
        Box::new(persistence.clone()),
    );
    store.set_catalog(catalog(ids));
    renderer.loaded.borrow_mut().clear();
    (store, renderer, persistence)
}
