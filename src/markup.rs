// HTML builders for the tour panels. Pure string functions so they can be
// exercised on the host.

use crate::constants::{MINIMAP_ACTIVE_MARKER_RADIUS, MINIMAP_MARKER_RADIUS};
use glam::Vec2;
use tour_core::menu::{GalleryItem, MenuCategory};
use tour_core::minimap::MinimapView;
use tour_core::{PanoramaNode, TourStore};

/// Everything the gallery, menu, minimap and info bodies are built from.
/// Equal keys mean the panel HTML would come out the same.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelKey {
    pub node_id: String,
    pub catalog_revision: u64,
    pub show_gallery: bool,
    pub show_navigation_menu: bool,
    pub show_minimap: bool,
    pub load_error: Option<String>,
}

impl PanelKey {
    pub fn of(store: &TourStore, load_error: Option<&str>) -> Self {
        let state = store.state();
        Self {
            node_id: state.current_node_id.clone(),
            catalog_revision: store.catalog_revision(),
            show_gallery: state.show_gallery,
            show_navigation_menu: state.show_navigation_menu,
            show_minimap: state.show_minimap,
            load_error: load_error.map(str::to_owned),
        }
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[inline]
fn active_class(active: bool) -> &'static str {
    if active {
        " active"
    } else {
        ""
    }
}

pub fn gallery_html(items: &[GalleryItem]) -> String {
    let mut html = String::new();
    for item in items {
        html.push_str(&format!(
            "<button class=\"gallery-item{}\" data-node-id=\"{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"><span>{}</span></button>",
            active_class(item.active),
            escape(&item.node_id),
            escape(&item.thumbnail),
            escape(&item.name),
            escape(&item.name),
        ));
    }
    html
}

pub fn menu_html(categories: &[MenuCategory]) -> String {
    let mut html = String::new();
    for cat in categories {
        html.push_str(&format!(
            "<section class=\"menu-category\"><h3>{}</h3><ul>",
            escape(&cat.label)
        ));
        for entry in &cat.entries {
            html.push_str(&format!(
                "<li class=\"menu-entry{}\" data-node-id=\"{}\">{}</li>",
                active_class(entry.active),
                escape(&entry.node_id),
                escape(&entry.name),
            ));
        }
        html.push_str("</ul></section>");
    }
    html
}

pub fn minimap_svg(view: &MinimapView, size: Vec2) -> String {
    let mut svg = format!(
        "<svg class=\"minimap-svg\" viewBox=\"0 0 {:.0} {:.0}\" width=\"{:.0}\" height=\"{:.0}\">",
        size.x, size.y, size.x, size.y
    );
    for c in &view.connections {
        let (a, b) = view.segment(*c);
        svg.push_str(&format!(
            "<line class=\"minimap-link\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\"/>",
            a.x, a.y, b.x, b.y
        ));
    }
    // active marker last so it draws on top
    let (active, idle): (Vec<_>, Vec<_>) = view.markers.iter().partition(|m| m.active);
    for m in idle.into_iter().chain(active) {
        let r = if m.active {
            MINIMAP_ACTIVE_MARKER_RADIUS
        } else {
            MINIMAP_MARKER_RADIUS
        };
        svg.push_str(&format!(
            "<circle class=\"minimap-marker{}\" data-node-id=\"{}\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.0}\"><title>{}</title></circle>",
            active_class(m.active),
            escape(&m.node_id),
            m.position.x,
            m.position.y,
            r,
            escape(&m.name),
        ));
    }
    svg.push_str("</svg>");
    svg
}

pub fn info_html(node: Option<&PanoramaNode>, hotspot_count: usize) -> String {
    match node {
        Some(n) => format!(
            "<h2>{}</h2><dl><dt>Location</dt><dd>{:.5}, {:.5}</dd><dt>Connections</dt><dd>{}</dd><dt>Hotspots</dt><dd>{}</dd></dl>",
            escape(&n.name),
            n.coordinates.lat,
            n.coordinates.lng,
            n.links.len(),
            hotspot_count,
        ),
        None => "<p class=\"panel-empty\">Panorama data is not available yet.</p>".to_owned(),
    }
}

pub fn error_html(message: &str) -> String {
    format!("<div class=\"panel-error\" role=\"alert\">{}</div>", escape(message))
}

pub fn loading_html() -> &'static str {
    "<div class=\"panel-loading\">Loading…</div>"
}
