// Shared tour tuning constants used by the core store and the web frontend.

// Navigation
pub const DEFAULT_NODE_ID: &str = "kawasan-1"; // fallback for unknown ids and the "next" wrap target

// Persistence
pub const STORAGE_KEY: &str = "tour-navigation-state"; // key of the persisted snapshot

// Initial overlay visibility
pub const DEFAULT_SHOW_MINIMAP: bool = true;
pub const DEFAULT_SHOW_GALLERY: bool = false;
pub const DEFAULT_SHOW_CONTROLS: bool = true;
pub const DEFAULT_FULLSCREEN: bool = false;
pub const DEFAULT_SHOW_NAVIGATION_MENU: bool = false;

// Music
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;
pub const MUSIC_VOLUME_STEP: f32 = 0.05; // ArrowUp/ArrowDown increment
pub const DEFAULT_MUSIC_SRC: &str = "/audio/background.mp3";

// Data
pub const DEFAULT_API_BASE: &str = "/api";

// Minimap
pub const MINIMAP_PADDING: f32 = 12.0; // px kept clear around the outermost markers
