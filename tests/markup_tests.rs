// Host-side tests for panel markup builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod markup {
    include!("../src/markup.rs");
}

use glam::Vec2;
use markup::*;
use tour_core::menu::{categorize, gallery_items};
use tour_core::minimap::layout;
use tour_core::{
    GeoCoord, MemoryPersistence, PanoramaCatalog, PanoramaNode, SceneRenderer, TourConfig,
    TourStore,
};

fn node(id: &str, name: &str, lat: f64, lng: f64, links: &[&str]) -> PanoramaNode {
    PanoramaNode {
        id: id.to_owned(),
        name: name.to_owned(),
        image: format!("/img/{id}.jpg"),
        thumbnail: format!("/thumb/{id}.jpg"),
        links: links.iter().map(|s| s.to_string()).collect(),
        coordinates: GeoCoord::new(lat, lng),
    }
}

fn sample() -> PanoramaCatalog {
    PanoramaCatalog::from_nodes([
        node("kawasan-1", "Gate", 0.0, 0.0, &["kawasan-2"]),
        node("kawasan-2", "Garden <north>", 1.0, 1.0, &["kawasan-1"]),
        node("lobby", "Lobby & Hall", 0.5, 0.5, &[]),
    ])
}

#[test]
fn escape_covers_html_specials() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn gallery_marks_active_item_and_escapes_names() {
    let html = gallery_html(&gallery_items(&sample(), "kawasan-2"));
    assert_eq!(html.matches("<button").count(), 3);
    assert_eq!(html.matches("gallery-item active").count(), 1);
    assert!(html.contains("data-node-id=\"kawasan-2\""));
    assert!(html.contains("Garden &lt;north&gt;"));
    assert!(!html.contains("<north>"));
}

#[test]
fn menu_groups_by_category() {
    let html = menu_html(&categorize(&sample(), "lobby"));
    assert_eq!(html.matches("<section").count(), 2);
    assert!(html.contains("<h3>Kawasan</h3>"));
    assert!(html.contains("menu-entry active\" data-node-id=\"lobby\""));
    assert!(html.contains("Lobby &amp; Hall"));
}

#[test]
fn minimap_draws_links_and_active_marker_last() {
    let size = Vec2::new(100.0, 100.0);
    let view = layout(&sample(), "kawasan-1", size, 10.0);
    let svg = minimap_svg(&view, size);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<line").count(), 1);
    assert_eq!(svg.matches("<circle").count(), 3);
    let active_at = svg.find("minimap-marker active").expect("active marker");
    let last_circle = svg.rfind("<circle").expect("circles");
    assert!(active_at > last_circle);
}

#[test]
fn info_panel_and_error_states() {
    let cat = sample();
    let html = info_html(cat.get("kawasan-1"), 2);
    assert!(html.contains("<h2>Gate</h2>"));
    assert!(html.contains("<dd>1</dd>"));
    assert!(html.contains("<dd>2</dd>"));
    assert!(info_html(None, 0).contains("panel-empty"));
    let err = error_html("HTTP 500 <oops>");
    assert!(err.contains("role=\"alert\""));
    assert!(err.contains("HTTP 500 &lt;oops&gt;"));
}

struct NoViewer;

impl SceneRenderer for NoViewer {
    fn load_scene(&mut self, _node_id: &str) {}
}

#[test]
fn panel_key_ignores_changes_panels_do_not_show() {
    let mut store = TourStore::new(
        &TourConfig::default(), 
        Box::new(NoViewer),
        Box::new(MemoryPersistence::new()),
    );
    store.set_catalog(sample());
    let key = PanelKey::of(&store, None);

    store.toggle_controls();
    store.toggle_fullscreen();
    assert_eq!(PanelKey::of(&store, None), key);

    store.toggle_gallery();
    assert_ne!(PanelKey::of(&store, None), key);
    store.toggle_gallery();
    assert_eq!(PanelKey::of(&store, None), key);

    store.go_next();
    assert_ne!(PanelKey::of(&store, None), key);
    store.go_previous();
    assert_eq!(PanelKey::of(&store, None), key);

    store.set_hotspots("kawasan-1", Vec::new());
    assert_ne!(PanelKey::of(&store, None), key);
    assert_ne!(PanelKey::of(&store, Some("offline")), PanelKey::of(&store, None));
}
