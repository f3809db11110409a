pub mod config;
pub mod constants;
pub mod error;
pub mod keys;
pub mod menu;
pub mod minimap;
pub mod music;
pub mod navigation;
pub mod node;
pub mod state;

pub use config::TourConfig;
pub use constants::*;
pub use error::{Result, TourError};
pub use keys::{
    commands_for_key, Command, KeyInput, KeyOutcome, ShortcutDispatcher, ShortcutTargets,
};
pub use music::{MusicControl, MusicState};
pub use navigation::{next_node, previous_node, Step};
pub use node::{GeoCoord, Hotspot, PanoramaCatalog, PanoramaNode};
pub use state::{MemoryPersistence, NavigationState, SceneRenderer, StatePersistence, TourStore};
