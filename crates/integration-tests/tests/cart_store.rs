//! Integration tests for the cart facade.
//!
//! These exercise `CartStore` exactly as the presentation layer uses it,
//! backed by in-memory storage.

use std::sync::Arc;

use album_viewer_cart::{CartConfig, CartStore, MemoryStorage};
use album_viewer_core::{Album, AlbumId, Price};
use album_viewer_integration_tests::{album, sample_albums};

fn empty_cart() -> CartStore<Album> {
    CartStore::initialize(Arc::new(MemoryStorage::new()), &CartConfig::default())
}

fn price(s: &str) -> Price {
    s.parse().unwrap_or(Price::ZERO)
}

// =============================================================================
// add
// =============================================================================

#[tokio::test]
async fn test_add_album() {
    let mut cart = empty_cart();
    let [album1, _, _] = sample_albums();

    assert!(cart.add(album1.clone()));
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].record, album1);
    assert_eq!(cart.items()[0].quantity, 1);
}

#[tokio::test]
async fn test_duplicate_add_changes_nothing() {
    let mut cart = empty_cart();
    let [album1, album2, _] = sample_albums();
    cart.add(album1.clone());
    cart.add(album2);

    let items = cart.items().to_vec();
    let total_items = cart.total_items();
    let total_price = cart.total_price();

    assert!(!cart.add(album1));
    assert_eq!(cart.items(), items.as_slice());
    assert_eq!(cart.total_items(), total_items);
    assert_eq!(cart.total_price(), total_price);
}

#[tokio::test]
async fn test_add_many_distinct_albums() {
    let mut cart = empty_cart();
    for album in sample_albums() {
        assert!(cart.add(album));
    }
    assert_eq!(cart.items().len(), 3);
}

#[tokio::test]
async fn test_added_at_is_stamped_at_insertion() {
    let mut cart = empty_cart();
    let before = std::time::SystemTime::now();
    cart.add(album(1, 1999));
    let after = std::time::SystemTime::now();

    let added_at = std::time::SystemTime::from(cart.items()[0].added_at);
    assert!(added_at >= before);
    assert!(added_at <= after);
}

// =============================================================================
// remove / clear / queries
// =============================================================================

#[tokio::test]
async fn test_add_then_remove_leaves_cart_empty() {
    let mut cart = empty_cart();

    assert!(cart.add(album(7, 999)));
    assert!(cart.remove(AlbumId::new(7)));
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
}

#[tokio::test]
async fn test_remove_keeps_other_albums_in_order() {
    let mut cart = empty_cart();
    for album in sample_albums() {
        cart.add(album);
    }

    assert!(cart.remove(AlbumId::new(2)));
    let ids: Vec<_> = cart.items().iter().map(|i| i.record.id).collect();
    assert_eq!(ids, [AlbumId::new(1), AlbumId::new(3)]);
}

#[tokio::test]
async fn test_remove_from_empty_cart() {
    let mut cart = empty_cart();
    assert!(!cart.remove(AlbumId::new(1)));
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_remove_absent_album() {
    let mut cart = empty_cart();
    cart.add(album(1, 1999));
    let items = cart.items().to_vec();

    assert!(!cart.remove(AlbumId::new(999)));
    assert_eq!(cart.items(), items.as_slice());
}

#[tokio::test]
async fn test_clear() {
    let mut cart = empty_cart();
    for album in sample_albums() {
        cart.add(album);
    }

    cart.clear();
    assert!(cart.is_empty());

    // Clearing an empty cart is fine too.
    cart.clear();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_has_and_get() {
    let mut cart = empty_cart();
    assert!(!cart.has(AlbumId::new(1)));

    cart.add(album(1, 1999));
    assert!(cart.has(AlbumId::new(1)));
    assert!(!cart.has(AlbumId::new(2)));

    let item = cart.get(AlbumId::new(1));
    assert_eq!(item.map(|i| i.record.title.as_str()), Some("Test Album 1"));
    assert!(cart.get(AlbumId::new(999)).is_none());
}

// =============================================================================
// Totals
// =============================================================================

#[tokio::test]
async fn test_totals_on_empty_cart() {
    let cart = empty_cart();
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), Price::ZERO);
}

#[tokio::test]
async fn test_total_items_tracks_adds_and_removes() {
    let mut cart = empty_cart();
    for (n, album) in (1..).zip(sample_albums()) {
        cart.add(album);
        assert_eq!(cart.total_items(), n);
        assert_eq!(Some(cart.total_items()), u32::try_from(cart.items().len()).ok());
    }

    cart.remove(AlbumId::new(1));
    assert_eq!(cart.total_items(), 2);
}

#[tokio::test]
async fn test_total_price() {
    let mut cart = empty_cart();
    let [album1, album2, album3] = sample_albums();

    cart.add(album1);
    assert_eq!(cart.total_price(), price("19.99"));

    cart.add(album2);
    assert_eq!(cart.total_price(), price("44.98"));

    cart.add(album3);
    assert_eq!(cart.total_price(), price("59.97"));

    cart.remove(AlbumId::new(1));
    assert_eq!(cart.total_price(), price("39.98"));
}

#[tokio::test]
async fn test_total_price_after_removing_cheaper_album() {
    let mut cart = empty_cart();
    cart.add(album(1, 1999));
    cart.add(album(2, 2499));
    assert_eq!(cart.total_price().to_string(), "$44.98");

    cart.remove(AlbumId::new(1));
    assert_eq!(cart.total_price().to_string(), "$24.99");
}

#[tokio::test]
async fn test_cart_keeps_price_at_time_of_add() {
    let mut cart = empty_cart();
    let mut original = album(1, 1999);
    cart.add(original.clone());

    // A later catalog price change does not reach the cart line.
    original.price = Price::from_cents(999);
    assert!(!cart.add(original));
    assert_eq!(cart.total_price(), Price::from_cents(1999));
}
