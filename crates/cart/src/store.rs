//! The cart store: the single entry point for reading and changing the cart.
//!
//! [`CartStore`] owns the in-memory cart, seeds it from storage once at
//! [`initialize`](CartStore::initialize), and writes it back through a
//! debounced save after every change. Callers never see storage or the save
//! timer; they get the same answers whether or not the last write succeeded.

use std::sync::Arc;

use album_viewer_core::Price;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::CartConfig;
use crate::container::{CartContainer, ChangeListener};
use crate::item::CartItem;
use crate::persistence::CartPersistence;
use crate::record::CartRecord;
use crate::scheduler::Debouncer;
use crate::storage::Storage;
use crate::totals;

/// A shopping cart backed by durable storage.
///
/// Mutations take `&mut self`; there is exactly one writer. Every successful
/// mutation schedules a save of the whole cart after the configured quiet
/// period, replacing any save that has not fired yet. Writes that fail are
/// logged and dropped, and the in-memory cart remains authoritative.
///
/// Dropping the store cancels a pending save, as does [`shutdown`].
///
/// [`shutdown`]: CartStore::shutdown
pub struct CartStore<R: CartRecord> {
    container: CartContainer<R>,
    scheduler: Debouncer,
}

impl<R> CartStore<R>
where
    R: CartRecord + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Load the cart from `storage` and wire up persistence.
    ///
    /// Storage is read exactly once, here. A missing, unreadable or corrupt
    /// cart yields an empty store; this never fails.
    pub fn initialize(storage: Arc<dyn Storage>, config: &CartConfig) -> Self {
        let persistence = CartPersistence::new(storage, config.storage_key.clone());
        let mut container = CartContainer::new(persistence.load());
        let scheduler = Debouncer::new(config.save_debounce);

        // Registered first so the save is armed before any other listener runs.
        let writer = scheduler.clone();
        container.subscribe(Box::new(move |items: &[CartItem<R>]| {
            // One copy per mutation; a superseded save drops its copy unused.
            let snapshot = items.to_vec();
            let persistence = persistence.clone();
            writer.trigger(move || persistence.save(&snapshot));
        }));

        info!(
            items = container.items().len(),
            key = %config.storage_key,
            "Cart store initialized"
        );

        Self {
            container,
            scheduler,
        }
    }
}

impl<R: CartRecord> CartStore<R> {
    /// The cart lines, in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[CartItem<R>] {
        self.container.items()
    }

    /// Total quantity across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        totals::total_items(self.items())
    }

    /// Total price across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        totals::total_price(self.items())
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Add `record` to the cart.
    ///
    /// Returns `false` if a line for the same id is already present; the
    /// existing line is left alone and nothing is saved.
    pub fn add(&mut self, record: R) -> bool {
        self.container.add(record)
    }

    /// Remove the line for `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: R::Id) -> bool {
        self.container.remove(id)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.container.clear();
    }

    /// Whether a line for `id` exists.
    #[must_use]
    pub fn has(&self, id: R::Id) -> bool {
        self.container.has(id)
    }

    /// The line for `id`, if any.
    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<&CartItem<R>> {
        self.container.get(id)
    }

    /// Observe changes. `listener` runs after each successful mutation, after
    /// the save has been scheduled and after any earlier listeners.
    pub fn subscribe(&mut self, listener: ChangeListener<R>) {
        self.container.subscribe(listener);
    }

    /// Wait until a scheduled save, if any, has run.
    ///
    /// The save still fires only when its quiet period is over; this just
    /// lets a short-lived process stay alive long enough to see it happen.
    pub async fn settle(&self) {
        self.scheduler.settle().await;
    }

    /// Tear the store down, cancelling any save that has not fired yet.
    pub fn shutdown(self) {
        if self.scheduler.cancel() {
            info!("Cart store shut down with an unsaved change discarded");
        } else {
            debug!("Cart store shut down");
        }
    }
}

impl<R: CartRecord> Drop for CartStore<R> {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}

impl<R: CartRecord + std::fmt::Debug> std::fmt::Debug for CartStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("container", &self.container)
            .field("scheduler", &self.scheduler)
            .finish()
    }
}
