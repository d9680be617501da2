//! Integration tests for the album viewer cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p album-viewer-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Facade behaviour: deduplication, removal, totals
//! - `cart_persistence` - Debounced saves, restarts, corrupt and failing storage
//!
//! Shared fixtures live here so each test file can build the same albums.

use album_viewer_core::{Album, AlbumId, Price};

/// Build a test album priced at `cents`.
#[must_use]
pub fn album(id: i32, cents: i64) -> Album {
    Album {
        id: AlbumId::new(id),
        title: format!("Test Album {id}"),
        artist: format!("Test Artist {id}"),
        price: Price::from_cents(cents),
        image_url: format!("https://example.com/image{id}.jpg"),
    }
}

/// The three albums used throughout the suite: 19.99, 24.99 and 14.99.
#[must_use]
pub fn sample_albums() -> [Album; 3] {
    [album(1, 1999), album(2, 2499), album(3, 1499)]
}
