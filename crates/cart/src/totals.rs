//! Aggregates derived from the cart's current lines.
//!
//! Nothing here is cached. Carts hold tens of lines, so summing on every read
//! is cheap and can never go stale.

use album_viewer_core::Price;

use crate::item::CartItem;
use crate::record::CartRecord;

/// Sum of quantities across all lines, saturating at `u32::MAX`.
#[must_use]
pub fn total_items<R>(items: &[CartItem<R>]) -> u32 {
    items
        .iter()
        .fold(0, |total: u32, item| total.saturating_add(item.quantity))
}

/// Sum of unit price times quantity across all lines.
#[must_use]
pub fn total_price<R: CartRecord>(items: &[CartItem<R>]) -> Price {
    items.iter().map(CartItem::line_total).sum()
}
