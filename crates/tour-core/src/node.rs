//! Panorama data as delivered by the backend.
//!
//! The catalog is the in-memory authority on which node ids exist. It keeps
//! the backend's ordering, which is also the previous/next stepping order.

use crate::error::{Result, TourError};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoord {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One panorama scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanoramaNode {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Outbound links in display order, by target node id.
    #[serde(default)]
    pub links: SmallVec<[String; 4]>,
    pub coordinates: GeoCoord,
}

/// Clickable region inside a panorama that leads to another node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub id: String,
    pub panorama_id: String,
    pub target_node_id: String,
    pub yaw: f32,
    pub pitch: f32,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct PanoramaCatalog {
    nodes: Vec<PanoramaNode>,
    index: FnvHashMap<String, usize>,
    hotspots: FnvHashMap<String, Vec<Hotspot>>,
}

impl PanoramaCatalog {
    /// Build a catalog keeping the given order. A repeated id keeps its first
    /// occurrence.
    pub fn from_nodes(nodes: impl IntoIterator<Item = PanoramaNode>) -> Self {
        let mut catalog = Self::default();
        for node in nodes {
            if catalog.index.contains_key(&node.id) {
                log::warn!("[data] duplicate panorama id '{}' ignored", node.id);
                continue;
            }
            catalog.index.insert(node.id.clone(), catalog.nodes.len());
            catalog.nodes.push(node);
        }
        catalog
    }

    /// Decode the `GET /panoramas` payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let nodes: Vec<PanoramaNode> = serde_json::from_str(json).map_err(|source| {
            TourError::Decode {
                what: "panorama list",
                source,
            }
        })?;
        Ok(Self::from_nodes(nodes))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn list(&self) -> &[PanoramaNode] {
        &self.nodes
    }

    pub fn get(&self, id: &str) -> Option<&PanoramaNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Replace the hotspots of one panorama. Ignored for unknown panoramas.
    pub fn set_hotspots(&mut self, panorama_id: &str, hotspots: Vec<Hotspot>) {
        if !self.contains(panorama_id) {
            log::debug!("[data] hotspots for unknown panorama '{}' dropped", panorama_id);
            return;
        }
        self.hotspots.insert(panorama_id.to_owned(), hotspots);
    }

    pub fn hotspots_for(&self, panorama_id: &str) -> &[Hotspot] {
        self.hotspots
            .get(panorama_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_hotspots(&self, panorama_id: &str) -> bool {
        self.hotspots.contains_key(panorama_id)
    }
}

/// Decode the `GET /panoramas/{id}/hotspots` payload.
pub fn hotspots_from_json(json: &str) -> Result<Vec<Hotspot>> {
    serde_json::from_str(json).map_err(|source| TourError::Decode {
        what: "hotspot list",
        source,
    })
}
