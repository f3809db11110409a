// DOM contract between the page markup and the wasm frontend.

// Panels toggled from the navigation state
pub const MINIMAP_PANEL_ID: &str = "minimap-panel";
pub const GALLERY_PANEL_ID: &str = "gallery-panel";
pub const CONTROLS_PANEL_ID: &str = "control-bar";
pub const NAVIGATION_MENU_PANEL_ID: &str = "navigation-menu";
pub const INFO_PANEL_ID: &str = "info-panel";

// Containers the frontend renders into
pub const MINIMAP_BODY_ID: &str = "minimap-map";
pub const GALLERY_BODY_ID: &str = "gallery-list";
pub const NAVIGATION_MENU_BODY_ID: &str = "navigation-menu-list";
pub const INFO_BODY_ID: &str = "info-panel-body";
pub const TITLE_ID: &str = "scene-title";

// Control bar buttons
pub const BTN_PREVIOUS_ID: &str = "btn-previous";
pub const BTN_NEXT_ID: &str = "btn-next";
pub const BTN_MINIMAP_ID: &str = "btn-minimap";
pub const BTN_GALLERY_ID: &str = "btn-gallery";
pub const BTN_MENU_ID: &str = "btn-menu";
pub const BTN_FULLSCREEN_ID: &str = "btn-fullscreen";
pub const BTN_MUSIC_ID: &str = "btn-music";
pub const BTN_INFO_ID: &str = "btn-info";
pub const BTN_HIDE_ID: &str = "btn-hide";
pub const BTN_CONTROLS_ID: &str = "btn-controls";

// Classes and attributes
pub const HIDDEN_CLASS: &str = "hidden";
pub const NODE_ID_ATTR: &str = "data-node-id";
pub const NODE_ID_SELECTOR: &str = "[data-node-id]";
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// Viewer integration
pub const SCENE_CHANGE_EVENT: &str = "tour:scenechange"; // CustomEvent, detail = node id

// Minimap viewport (px)
pub const MINIMAP_WIDTH: f32 = 220.0;
pub const MINIMAP_HEIGHT: f32 = 160.0;
pub const MINIMAP_MARKER_RADIUS: f32 = 6.0;
pub const MINIMAP_ACTIVE_MARKER_RADIUS: f32 = 9.0;
