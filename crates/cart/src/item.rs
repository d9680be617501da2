//! A single line in the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::CartRecord;

/// A catalog record captured into the cart, plus cart metadata.
///
/// Serialized as `{"record": …, "quantity": 1, "addedAt": "<RFC 3339>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem<R> {
    /// Snapshot of the record at the time it was added.
    pub record: R,
    /// Always at least 1.
    pub quantity: u32,
    /// Wall-clock time of insertion.
    pub added_at: DateTime<Utc>,
}

impl<R: CartRecord> CartItem<R> {
    /// Capture `record` as a new line with quantity 1, stamped now.
    #[must_use]
    pub fn new(record: R) -> Self {
        Self {
            record,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Identifier of the wrapped record.
    #[must_use]
    pub fn id(&self) -> R::Id {
        self.record.id()
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> album_viewer_core::Price {
        self.record.price().times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use album_viewer_core::{Album, AlbumId, Price};

    fn album() -> Album {
        Album {
            id: AlbumId::new(1),
            title: "Kind of Blue".to_string(),
            artist: "Miles Davis".to_string(),
            price: Price::from_cents(1999),
            image_url: "https://example.com/kob.jpg".to_string(),
        }
    }

    #[test]
    fn test_new_item_has_quantity_one_and_current_time() {
        let before = Utc::now();
        let item = CartItem::new(album());
        let after = Utc::now();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.id(), AlbumId::new(1));
        assert!(item.added_at >= before && item.added_at <= after);
    }

    #[test]
    fn test_item_serializes_with_camel_case_timestamp() {
        let item = CartItem::new(album());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["record"]["id"], 1);
        assert_eq!(json["quantity"], 1);
        assert!(json["addedAt"].is_string());
        assert!(json.get("added_at").is_none());
    }

    #[test]
    fn test_item_timestamp_round_trips() {
        let item = CartItem::new(album());
        let json = serde_json::to_string(&item).unwrap();
        let back: CartItem<Album> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, item);
    }

    #[test]
    fn test_item_with_bad_timestamp_fails_to_parse() {
        let json = r#"{
            "record": {"id": 1, "title": "t", "artist": "a", "price": 1.0, "image_url": ""},
            "quantity": 1,
            "addedAt": "yesterday-ish"
        }"#;

        assert!(serde_json::from_str::<CartItem<Album>>(json).is_err());
    }

    #[test]
    fn test_line_total() {
        let mut item = CartItem::new(album());
        item.quantity = 2;
        assert_eq!(item.line_total(), Price::from_cents(3998));
    }
}
