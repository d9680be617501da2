//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! # Add an album
//! album-cart add --id 1 --title "Blue Train" --artist "John Coltrane" --price 19.99
//!
//! # Show the cart
//! album-cart show
//!
//! # Remove an album, or empty the cart
//! album-cart remove 1
//! album-cart clear
//! ```
//!
//! # Environment Variables
//!
//! - `CART_STORAGE_DIR` - Directory the cart file is kept in
//! - `CART_STORAGE_KEY` - Name of the cart file (without `.json`)
//! - `CART_SAVE_DEBOUNCE_MS` - Quiet period before the cart is written

use std::io::{self, Write};
use std::sync::Arc;

use album_viewer_cart::{CartConfig, CartStore, ConfigError, FileStorage};
use album_viewer_core::{Album, AlbumId};
use thiserror::Error;

use crate::view::CartView;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing to the terminal failed.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// A single operation on the cart.
#[derive(Debug, Clone)]
pub enum CartCommand {
    Add(Album),
    Remove(AlbumId),
    Has(AlbumId),
    Show,
    Clear,
}

/// Open the cart stored under `config`, apply `command`, print the result,
/// and wait for the resulting save to land.
///
/// # Errors
///
/// Returns `CommandError::Output` if writing to `out` fails. Storage problems
/// are logged by the store and never fail the command.
pub async fn run(
    command: CartCommand,
    config: &CartConfig,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let storage = Arc::new(FileStorage::new(&config.storage_dir));
    tracing::debug!(dir = %storage.root().display(), "Opening cart storage");

    let mut cart: CartStore<Album> = CartStore::initialize(storage, config);
    let result = execute(&mut cart, command, out);

    // The save is debounced; stay alive until it has been written.
    cart.settle().await;
    cart.shutdown();

    result.map_err(CommandError::from)
}

/// Apply `command` to `cart` and describe the outcome on `out`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn execute(
    cart: &mut CartStore<Album>,
    command: CartCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        CartCommand::Add(album) => {
            let title = album.title.clone();
            if cart.add(album) {
                tracing::info!(%title, "Album added to cart");
                writeln!(out, "Added \"{title}\" to your cart.")?;
            } else {
                writeln!(out, "\"{title}\" is already in your cart.")?;
            }
        }
        CartCommand::Remove(id) => {
            let title = cart
                .get(id)
                .map(|item| item.record.title.clone())
                .unwrap_or_default();
            if cart.remove(id) {
                tracing::info!(%id, "Album removed from cart");
                writeln!(out, "Removed \"{title}\" from your cart.")?;
            } else {
                writeln!(out, "Album {id} is not in your cart.")?;
            }
        }
        CartCommand::Has(id) => {
            let answer = if cart.has(id) { "yes" } else { "no" };
            writeln!(out, "{answer}")?;
            return Ok(());
        }
        CartCommand::Show => {}
        CartCommand::Clear => {
            cart.clear();
            tracing::info!("Cart cleared");
            writeln!(out, "Cart cleared.")?;
            return Ok(());
        }
    }

    CartView::from(&*cart).write_to(out)
}
