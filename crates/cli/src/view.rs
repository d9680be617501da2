//! Plain-text rendering of the cart.

use std::io::{self, Write};

use album_viewer_cart::{CartItem, CartStore};
use album_viewer_core::Album;

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub added_at: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&CartItem<Album>> for CartItemView {
    fn from(item: &CartItem<Album>) -> Self {
        Self {
            id: item.record.id.as_i32(),
            title: item.record.title.clone(),
            artist: item.record.artist.clone(),
            quantity: item.quantity,
            price: item.record.price.to_string(),
            line_price: item.line_total().to_string(),
            added_at: item.added_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl From<&CartStore<Album>> for CartView {
    fn from(cart: &CartStore<Album>) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.total_price().to_string(),
            item_count: cart.total_items(),
        }
    }
}

impl CartView {
    /// Write the cart as a table followed by its totals.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if self.items.is_empty() {
            return writeln!(out, "Your cart is empty. Start adding some albums!");
        }

        for item in &self.items {
            writeln!(
                out,
                "#{:<4} {} - {}  {} x{}  {}  (added {})",
                item.id,
                item.title,
                item.artist,
                item.price,
                item.quantity,
                item.line_price,
                item.added_at
            )?;
        }

        let noun = if self.item_count == 1 { "item" } else { "items" };
        writeln!(out, "{} {noun}, total {}", self.item_count, self.subtotal)
    }
}
