//! Album Viewer Cart - Client-side shopping cart store.
//!
//! The cart is an in-memory, insertion-ordered list of albums that survives
//! restarts by being written to a durable key-value slot. Writes are
//! debounced: a burst of changes produces a single save of the final state.
//!
//! # Architecture
//!
//! - [`CartStore`] - the facade callers use; hides storage and scheduling
//! - `container` - the authoritative in-memory lines and change listeners
//! - [`totals`] - item count and price, recomputed on every read
//! - `scheduler` - cancel-and-reschedule timer for the deferred save
//! - [`storage`] - durable slots ([`MemoryStorage`], [`FileStorage`])
//! - [`config`] - environment-driven settings
//!
//! Storage failures never reach callers. A corrupt saved cart is discarded at
//! startup and a failed save is dropped; both are logged through `tracing`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use album_viewer_cart::{CartConfig, CartStore, FileStorage};
//! use album_viewer_core::{Album, AlbumId, Price};
//!
//! # async fn demo() {
//! let config = CartConfig::default();
//! let storage = Arc::new(FileStorage::new(&config.storage_dir));
//! let mut cart: CartStore<Album> = CartStore::initialize(storage, &config);
//!
//! cart.add(Album {
//!     id: AlbumId::new(1),
//!     title: "Blue Train".to_string(),
//!     artist: "John Coltrane".to_string(),
//!     price: Price::from_cents(1999),
//!     image_url: String::new(),
//! });
//! assert_eq!(cart.total_items(), 1);
//!
//! cart.settle().await;
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
mod container;
pub mod item;
mod persistence;
pub mod record;
mod scheduler;
pub mod storage;
pub mod store;
pub mod totals;

pub use config::{CartConfig, ConfigError};
pub use container::ChangeListener;
pub use item::CartItem;
pub use record::CartRecord;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::CartStore;
