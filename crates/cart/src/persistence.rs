//! Reads and writes the whole cart under one storage key.
//!
//! Storage is treated as unreliable. A cart that cannot be read is discarded
//! and the store starts empty; a write that fails is dropped. Both cases are
//! logged and neither reaches the caller.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::item::CartItem;
use crate::record::CartRecord;
use crate::storage::{Storage, StorageError};

/// Why a persisted cart could not be read or written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The stored value is not a valid serialized cart.
    #[error("malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The stored value parsed but breaks a cart invariant.
    #[error("invalid cart data: {0}")]
    Invalid(String),
}

/// Adapter between the in-memory cart and its storage slot.
#[derive(Debug, Clone)]
pub(crate) struct CartPersistence {
    storage: Arc<dyn Storage>,
    key: String,
}

impl CartPersistence {
    pub(crate) fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the persisted cart, or an empty one if there is nothing usable.
    #[instrument(skip(self), fields(key = %self.key))]
    pub(crate) fn load<R>(&self) -> Vec<CartItem<R>>
    where
        R: CartRecord + DeserializeOwned,
    {
        match self.try_load() {
            Ok(Some(items)) => {
                info!(items = items.len(), "Restored cart from storage");
                items
            }
            Ok(None) => {
                debug!("No saved cart, starting empty");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "Failed to load cart from storage, starting empty");
                Vec::new()
            }
        }
    }

    /// Write `items` to storage, logging and swallowing any failure.
    #[instrument(skip_all, fields(key = %self.key, items = items.len()))]
    pub(crate) fn save<R>(&self, items: &[CartItem<R>])
    where
        R: Serialize,
    {
        match self.try_save(items) {
            Ok(()) => debug!("Saved cart to storage"),
            Err(e) => error!(error = %e, "Failed to save cart to storage"),
        }
    }

    pub(crate) fn try_load<R>(&self) -> Result<Option<Vec<CartItem<R>>>, PersistenceError>
    where
        R: CartRecord + DeserializeOwned,
    {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        let items: Vec<CartItem<R>> = serde_json::from_str(&raw)?;
        validate(&items)?;
        Ok(Some(items))
    }

    pub(crate) fn try_save<R>(&self, items: &[CartItem<R>]) -> Result<(), PersistenceError>
    where
        R: Serialize,
    {
        let raw = serde_json::to_string(items)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }
}

/// Check a loaded cart against the invariants the container maintains.
fn validate<R: CartRecord>(items: &[CartItem<R>]) -> Result<(), PersistenceError> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut total: u32 = 0;
    for item in items {
        if item.quantity == 0 {
            return Err(PersistenceError::Invalid(format!(
                "item {:?} has quantity 0",
                item.id()
            )));
        }
        total = total.checked_add(item.quantity).ok_or_else(|| {
            PersistenceError::Invalid(format!(
                "total quantity overflows at item {:?}",
                item.id()
            ))
        })?;
        if !seen.insert(item.id()) {
            return Err(PersistenceError::Invalid(format!(
                "item {:?} appears more than once",
                item.id()
            )));
        }
    }
    Ok(())
}
