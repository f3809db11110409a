//! Listings for the navigation menu and the gallery.

use crate::node::PanoramaCatalog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub node_id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuCategory {
    pub key: String,
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub node_id: String,
    pub name: String,
    pub thumbnail: String,
    pub active: bool,
}

/// Category of a node id: the id without a trailing `-<digits>` suffix.
/// `kawasan-2` → `kawasan`, `lobby` → `lobby`.
pub fn category_key(node_id: &str) -> &str {
    match node_id.rsplit_once('-') {
        Some((prefix, suffix))
            if !prefix.is_empty()
                && !suffix.is_empty()
                && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            prefix
        }
        _ => node_id,
    }
}

/// Human label for a category key: dashes become spaces, words capitalised.
pub fn category_label(key: &str) -> String {
    key.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group catalog nodes by category. Categories appear in order of their
/// first node; nodes keep catalog order.
pub fn categorize(catalog: &PanoramaCatalog, current_id: &str) -> Vec<MenuCategory> {
    let mut categories: Vec<MenuCategory> = Vec::new();
    for node in catalog.list() {
        let key = category_key(&node.id);
        let entry = MenuEntry {
            node_id: node.id.clone(),
            name: node.name.clone(),
            active: node.id == current_id,
        };
        match categories.iter_mut().find(|c| c.key == key) {
            Some(cat) => cat.entries.push(entry),
            None => categories.push(MenuCategory {
                key: key.to_owned(),
                label: category_label(key),
                entries: vec![entry],
            }),
        }
    }
    categories
}

pub fn gallery_items(catalog: &PanoramaCatalog, current_id: &str) -> Vec<GalleryItem> {
    catalog
        .list()
        .iter()
        .map(|n| GalleryItem {
            node_id: n.id.clone(),
            name: n.name.clone(),
            thumbnail: if n.thumbnail.is_empty() {
                n.image.clone()
            } else {
                n.thumbnail.clone()
            },
            active: n.id == current_id,
        })
        .collect()
}
