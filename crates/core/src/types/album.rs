//! Album catalog record as served by the album API.

use serde::{Deserialize, Serialize};

use super::{AlbumId, Price};

/// An album from the catalog.
///
/// The cart keeps a copy of this record exactly as it was when the album was
/// added; it is never re-fetched, so a later price change in the catalog does
/// not reach albums already in someone's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    /// Unit price charged when the album is bought.
    pub price: Price,
    pub image_url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_album_matches_api_shape() {
        let json = r#"{
            "id": 1,
            "title": "Blue Train",
            "artist": "John Coltrane",
            "price": 19.99,
            "image_url": "https://example.com/blue-train.jpg"
        }"#;

        let album: Album = serde_json::from_str(json).unwrap();
        assert_eq!(album.id, AlbumId::new(1));
        assert_eq!(album.artist, "John Coltrane");
        assert_eq!(album.price, Price::from_cents(1999));

        let back = serde_json::to_value(&album).unwrap();
        assert_eq!(back["id"], 1);
        assert_eq!(back["image_url"], "https://example.com/blue-train.jpg");
    }

    #[test]
    fn test_album_missing_price_is_rejected() {
        let json = r#"{"id": 2, "title": "t", "artist": "a", "image_url": ""}"#;
        assert!(serde_json::from_str::<Album>(json).is_err());
    }
}
