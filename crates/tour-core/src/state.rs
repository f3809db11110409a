//! Navigation store: where the user is and which panels are open.
//!
//! `TourStore` is the only writer of `NavigationState`. It is created once
//! by the frontend and handed to every component that needs it, together
//! with the collaborators it talks to (scene renderer, persistence).

use crate::config::TourConfig;
use crate::constants::{
    DEFAULT_FULLSCREEN, DEFAULT_SHOW_CONTROLS, DEFAULT_SHOW_GALLERY, DEFAULT_SHOW_MINIMAP,
    DEFAULT_SHOW_NAVIGATION_MENU,
};
use crate::error::{Result, TourError};
use crate::navigation::{next_node, previous_node};
use crate::node::{Hotspot, PanoramaCatalog, PanoramaNode};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of the navigation state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub current_node_id: String,
    pub show_minimap: bool,
    pub show_gallery: bool,
    pub show_controls: bool,
    pub fullscreen: bool,
    pub show_navigation_menu: bool,
}

impl NavigationState {
    pub fn initial(default_node_id: &str) -> Self {
        Self {
            current_node_id: default_node_id.to_owned(),
            show_minimap: DEFAULT_SHOW_MINIMAP,
            show_gallery: DEFAULT_SHOW_GALLERY,
            show_controls: DEFAULT_SHOW_CONTROLS,
            fullscreen: DEFAULT_FULLSCREEN,
            show_navigation_menu: DEFAULT_SHOW_NAVIGATION_MENU,
        }
    }

    /// True when minimap, gallery and navigation menu are all hidden.
    #[inline]
    pub fn all_overlays_hidden(&self) -> bool {
        !self.show_minimap && !self.show_gallery && !self.show_navigation_menu
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| TourError::Persistence(e.to_string()))
    }
}

/// Loads panorama scenes. Implemented by the external viewer binding.
pub trait SceneRenderer {
    fn load_scene(&mut self, node_id: &str);
}

/// Write-only snapshot storage. The store never reads a snapshot back.
pub trait StatePersistence {
    fn save(&mut self, state: &NavigationState) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// In-process persistence; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StatePersistence for MemoryPersistence {
    fn save(&mut self, state: &NavigationState) -> Result<()> {
        *self.slot.borrow_mut() = Some(state.to_json()?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

pub struct TourStore {
    state: NavigationState,
    catalog: PanoramaCatalog,
    /// Bumped whenever catalog content (nodes or hotspots) changes.
    catalog_revision: u64,
    default_node_id: String,
    renderer: Box<dyn SceneRenderer>,
    persistence: Box<dyn StatePersistence>,
}

impl TourStore {
    /// Create the store at the default node and drop any stale snapshot
    /// left by a previous session.
    pub fn new(
        config: &TourConfig,
        renderer: Box<dyn SceneRenderer>,
        persistence: Box<dyn StatePersistence>,
    ) -> Self {
        let mut store = Self {
            state: NavigationState::initial(&config.default_node_id),
            catalog: PanoramaCatalog::default(),
            catalog_revision: 0,
            default_node_id: config.default_node_id.clone(),
            renderer,
            persistence,
        };
        if let Err(e) = store.persistence.clear() {
            log::warn!("[store] could not clear stale state: {}", e);
        }
        store
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn catalog(&self) -> &PanoramaCatalog {
        &self.catalog
    }

    pub fn catalog_revision(&self) -> u64 {
        self.catalog_revision
    }

    pub fn default_node_id(&self) -> &str {
        &self.default_node_id
    }

    pub fn current_node_id(&self) -> &str {
        &self.state.current_node_id
    }

    pub fn current_node(&self) -> Option<&PanoramaNode> {
        self.catalog.get(&self.state.current_node_id)
    }

    /// Known ids pass through; anything else becomes the default node.
    fn resolve(&self, id: &str) -> String {
        if self.catalog.contains(id) {
            id.to_owned()
        } else {
            log::debug!(
                "[store] unknown node '{}', falling back to '{}'",
                id,
                self.default_node_id
            );
            self.default_node_id.clone()
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(&self.state) {
            log::warn!("[store] snapshot not saved: {}", e);
        }
    }

    pub fn set_current_node(&mut self, id: &str) {
        let resolved = self.resolve(id);
        self.renderer.load_scene(&resolved);
        self.state.current_node_id = resolved;
        self.persist();
    }

    /// Commit a transition that started inside the viewer (hotspot click).
    /// The viewer is only told to load a scene when it landed on an unknown
    /// node.
    pub fn sync_from_viewer(&mut self, id: &str) {
        let resolved = self.resolve(id);
        if resolved != id {
            self.renderer.load_scene(&resolved);
        }
        if resolved != self.state.current_node_id {
            self.state.current_node_id = resolved;
            self.persist();
        }
    }

    /// Install a freshly loaded catalog and re-check the current node.
    pub fn set_catalog(&mut self, catalog: PanoramaCatalog) {
        log::info!("[store] catalog loaded: {} panoramas", catalog.len());
        self.catalog = catalog;
        self.catalog_revision += 1;
        let current = self.state.current_node_id.clone();
        self.set_current_node(&current);
    }

    pub fn set_hotspots(&mut self, panorama_id: &str, hotspots: Vec<Hotspot>) {
        if self.catalog.contains(panorama_id) {
            self.catalog_revision += 1;
        }
        self.catalog.set_hotspots(panorama_id, hotspots);
    }

    pub fn go_previous(&mut self) {
        let order: Vec<&str> = self.catalog.ids().collect();
        let target = previous_node(&order, &self.state.current_node_id, &self.default_node_id);
        self.set_current_node(&target);
    }

    pub fn go_next(&mut self) {
        let order: Vec<&str> = self.catalog.ids().collect();
        let target = next_node(&order, &self.state.current_node_id, &self.default_node_id);
        self.set_current_node(&target);
    }

    pub fn toggle_minimap(&mut self) {
        self.state.show_minimap = !self.state.show_minimap;
        self.persist();
    }

    pub fn toggle_gallery(&mut self) {
        self.state.show_gallery = !self.state.show_gallery;
        self.persist();
    }

    pub fn toggle_controls(&mut self) {
        self.state.show_controls = !self.state.show_controls;
        self.persist();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.state.fullscreen = !self.state.fullscreen;
        self.persist();
    }

    pub fn toggle_navigation_menu(&mut self) {
        self.state.show_navigation_menu = !self.state.show_navigation_menu;
        self.persist();
    }

    /// Record the browser's actual fullscreen status, e.g. after it left
    /// fullscreen on its own or refused a request. Returns whether the flag
    /// changed.
    pub fn set_fullscreen(&mut self, on: bool) -> bool {
        if self.state.fullscreen == on {
            return false;
        }
        self.state.fullscreen = on;
        self.persist();
        true
    }

    /// Hide minimap, gallery and navigation menu. Controls and fullscreen
    /// are left alone.
    pub fn hide_all_overlays(&mut self) {
        self.state.show_minimap = false;
        self.state.show_gallery = false;
        self.state.show_navigation_menu = false;
        self.persist();
    }

    /// Hide every overlay, or bring them back to their defaults when they
    /// are already all hidden.
    pub fn toggle_all_overlays(&mut self) {
        if self.state.all_overlays_hidden() {
            self.state.show_minimap = DEFAULT_SHOW_MINIMAP;
            self.state.show_gallery = DEFAULT_SHOW_GALLERY;
            self.state.show_navigation_menu = DEFAULT_SHOW_NAVIGATION_MENU;
            self.persist();
        } else {
            self.hide_all_overlays();
        }
    }

    pub fn reset_to_default(&mut self) {
        self.apply_defaults();
        self.persist();
    }

    /// Drop the persisted snapshot, then reset. A failed clear is logged and
    /// the reset still happens. No new snapshot is written.
    pub fn clear_persisted_state(&mut self) {
        if let Err(e) = self.persistence.clear() {
            log::error!("[store] clearing persisted state failed: {}", e);
        }
        self.apply_defaults();
        log::info!("[store] state cleared and reset");
    }

    fn apply_defaults(&mut self) {
        let initial = NavigationState::initial(&self.default_node_id);
        if self.state.current_node_id != initial.current_node_id {
            self.renderer.load_scene(&initial.current_node_id);
        }
        self.state = initial;
    }
}
