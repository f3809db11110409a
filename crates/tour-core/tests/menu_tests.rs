// Host-side tests for navigation menu and gallery listings.

mod common;

use common::catalog;
use tour_core::menu::{categorize, category_key, category_label, gallery_items};

#[test]
fn category_key_strips_numeric_suffix_only() {
    assert_eq!(category_key("kawasan-1"), "kawasan");
    assert_eq!(category_key("kawasan-12"), "kawasan");
    assert_eq!(category_key("taman-bunga-3"), "taman-bunga");
    assert_eq!(category_key("lobby"), "lobby");
    assert_eq!(category_key("gate-b"), "gate-b");
    assert_eq!(category_key("-1"), "-1");
    assert_eq!(category_key("room-"), "room-");
}

#[test]
fn category_label_capitalises_words() {
    assert_eq!(category_label("kawasan"), "Kawasan");
    assert_eq!(category_label("taman-bunga"), "Taman Bunga");
    assert_eq!(category_label("main_hall"), "Main Hall");
}

#[test]
fn categories_follow_first_appearance() {
    let cat = catalog(&["kawasan-1", "taman-1", "kawasan-2", "lobby", "taman-2"]);
    let menu = categorize(&cat, "kawasan-2");
    let keys: Vec<&str> = menu.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["kawasan", "taman", "lobby"]);

    let kawasan: Vec<&str> = menu[0].entries.iter().map(|e| e.node_id.as_str()).collect();
    assert_eq!(kawasan, vec!["kawasan-1", "kawasan-2"]);
    assert!(menu[0].entries[1].active);
    assert!(!menu[0].entries[0].active);
    assert_eq!(menu[1].entries.len(), 2);
}

#[test]
fn gallery_flags_current_and_falls_back_to_image() {
    let mut nodes = catalog(&["kawasan-1", "kawasan-2"]).list().to_vec();
    nodes[1].thumbnail.clear();
    let cat = tour_core::PanoramaCatalog::from_nodes(nodes);
    let items = gallery_items(&cat, "kawasan-1");
    assert_eq!(items.len(), 2);
    assert!(items[0].active);
    assert_eq!(items[0].thumbnail, "/thumbs/kawasan-1.jpg");
    assert_eq!(items[1].thumbnail, "/images/kawasan-2.jpg");
}
