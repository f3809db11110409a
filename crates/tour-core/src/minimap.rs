//! Minimap layout: node coordinates projected into a pixel viewport.

use crate::node::PanoramaCatalog;
use fnv::FnvHashSet;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct MinimapMarker {
    pub node_id: String,
    pub name: String,
    pub position: Vec2,
    pub active: bool,
}

/// Undirected edge between two linked nodes, by marker index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MinimapConnection {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MinimapView {
    pub markers: Vec<MinimapMarker>,
    pub connections: Vec<MinimapConnection>,
}

impl MinimapView {
    pub fn segment(&self, c: MinimapConnection) -> (Vec2, Vec2) {
        (self.markers[c.from].position, self.markers[c.to].position)
    }

    pub fn active_marker(&self) -> Option<&MinimapMarker> {
        self.markers.iter().find(|m| m.active)
    }
}

/// Map one axis value into `[lo, hi]`; a zero-width source range lands in
/// the middle.
#[inline]
fn project_axis(v: f64, min: f64, max: f64, lo: f32, hi: f32) -> f32 {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (lo + hi) * 0.5;
    }
    let t = ((v - min) / span) as f32;
    lo + t * (hi - lo)
}

/// Lay out every catalog node inside `size` (pixels), keeping `padding`
/// clear on each side. Longitude grows to the right, latitude grows up.
pub fn layout(catalog: &PanoramaCatalog, current_id: &str, size: Vec2, padding: f32) -> MinimapView {
    let nodes = catalog.list();
    if nodes.is_empty() {
        return MinimapView::default();
    }

    let (mut min_lat, mut max_lat) = (f64::MAX, f64::MIN);
    let (mut min_lng, mut max_lng) = (f64::MAX, f64::MIN);
    for n in nodes {
        min_lat = min_lat.min(n.coordinates.lat);
        max_lat = max_lat.max(n.coordinates.lat);
        min_lng = min_lng.min(n.coordinates.lng);
        max_lng = max_lng.max(n.coordinates.lng);
    }

    let pad = padding.min(size.x * 0.5).min(size.y * 0.5).max(0.0);
    let lo = Vec2::splat(pad);
    let hi = size - Vec2::splat(pad);

    let markers = nodes
        .iter()
        .map(|n| MinimapMarker {
            node_id: n.id.clone(),
            name: n.name.clone(),
            position: Vec2::new(
                project_axis(n.coordinates.lng, min_lng, max_lng, lo.x, hi.x),
                // screen y grows downward
                project_axis(n.coordinates.lat, min_lat, max_lat, hi.y, lo.y),
            ),
            active: n.id == current_id,
        })
        .collect();

    let mut seen = FnvHashSet::default();
    let mut connections = Vec::new();
    for (from, n) in nodes.iter().enumerate() {
        for target in &n.links {
            let Some(to) = catalog.position(target) else {
                continue;
            };
            if to == from {
                continue;
            }
            let edge = MinimapConnection {
                from: from.min(to),
                to: from.max(to),
            };
            if seen.insert(edge) {
                connections.push(edge);
            }
        }
    }

    MinimapView {
        markers,
        connections,
    }
}
