//! The authoritative in-memory cart.

use tracing::debug;

use crate::item::CartItem;
use crate::record::CartRecord;

/// Callback run after every successful mutation with the new contents.
pub type ChangeListener<R> = Box<dyn FnMut(&[CartItem<R>]) + Send>;

/// Insertion-ordered cart lines with at most one line per record.
///
/// All mutation goes through [`add`](Self::add), [`remove`](Self::remove) and
/// [`clear`](Self::clear). Each successful mutation calls the registered
/// listeners synchronously, in registration order. Mutations that change
/// nothing (a duplicate add, removing an absent id) notify no one.
pub struct CartContainer<R: CartRecord> {
    items: Vec<CartItem<R>>,
    listeners: Vec<ChangeListener<R>>,
}

impl<R: CartRecord> Default for CartContainer<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: CartRecord> std::fmt::Debug for CartContainer<R>
where
    R: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartContainer")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<R: CartRecord> CartContainer<R> {
    /// Seed the container with previously persisted lines.
    ///
    /// The caller is responsible for `items` already having unique ids.
    #[must_use]
    pub const fn new(items: Vec<CartItem<R>>) -> Self {
        Self {
            items,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners run in the order they were added.
    pub fn subscribe(&mut self, listener: ChangeListener<R>) {
        self.listeners.push(listener);
    }

    /// Read-only view of the lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem<R>] {
        &self.items
    }

    /// Add `record` as a new line with quantity 1.
    ///
    /// Returns `false` and changes nothing if a line for the same id exists.
    pub fn add(&mut self, record: R) -> bool {
        let id = record.id();
        if self.has(id) {
            debug!(?id, "Record already in cart");
            return false;
        }

        self.items.push(CartItem::new(record));
        self.notify();
        true
    }

    /// Remove the line for `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: R::Id) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.items.remove(index);
        self.notify();
        true
    }

    /// Remove every line. Always notifies, even when already empty.
    pub fn clear(&mut self) {
        self.items.clear();
        self.notify();
    }

    /// Whether a line for `id` exists.
    #[must_use]
    pub fn has(&self, id: R::Id) -> bool {
        self.position(id).is_some()
    }

    /// The line for `id`, if any.
    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<&CartItem<R>> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn position(&self, id: R::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.items);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use album_viewer_core::{Album, AlbumId, Price};
    use proptest::prelude::*;

    fn album(id: i32, cents: i64) -> Album {
        Album {
            id: AlbumId::new(id),
            title: format!("Album {id}"),
            artist: "Various".to_string(),
            price: Price::from_cents(cents),
            image_url: String::new(),
        }
    }

    /// Records every notification as the list of ids it carried.
    fn recorder(container: &mut CartContainer<Album>) -> Arc<Mutex<Vec<Vec<i32>>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        container.subscribe(Box::new(move |items: &[CartItem<Album>]| {
            let ids: Vec<i32> = items.iter().map(|i| i.id().as_i32()).collect();
            sink.lock().unwrap().push(ids);
        }));
        log
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = CartContainer::default();
        assert!(cart.add(album(1, 1999)));
        assert!(cart.add(album(2, 2499)));
        assert!(cart.add(album(3, 1499)));

        let ids: Vec<_> = cart.items().iter().map(CartItem::id).collect();
        assert_eq!(ids, [AlbumId::new(1), AlbumId::new(2), AlbumId::new(3)]);
        assert!(cart.items().iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn test_duplicate_add_is_rejected_without_notifying() {
        let mut cart = CartContainer::default();
        let log = recorder(&mut cart);

        assert!(cart.add(album(1, 1999)));
        let before = cart.items().to_vec();

        // Same id, different snapshot: still a duplicate.
        assert!(!cart.add(album(1, 999)));
        assert_eq!(cart.items(), before.as_slice());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = CartContainer::default();
        cart.add(album(1, 1999));
        cart.add(album(2, 2499));

        assert!(cart.remove(AlbumId::new(1)));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id(), AlbumId::new(2));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartContainer::default();
        let log = recorder(&mut cart);

        assert!(!cart.remove(AlbumId::new(1)));

        cart.add(album(1, 1999));
        assert!(!cart.remove(AlbumId::new(999)));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_always_notifies() {
        let mut cart = CartContainer::default();
        let log = recorder(&mut cart);

        cart.clear();
        cart.add(album(1, 1999));
        cart.clear();

        assert!(cart.items().is_empty());
        assert_eq!(*log.lock().unwrap(), vec![vec![], vec![1], vec![]]);
    }

    #[test]
    fn test_has_and_get() {
        let mut cart = CartContainer::default();
        assert!(!cart.has(AlbumId::new(1)));
        assert!(cart.get(AlbumId::new(1)).is_none());

        cart.add(album(1, 1999));
        assert!(cart.has(AlbumId::new(1)));
        assert!(!cart.has(AlbumId::new(2)));
        assert_eq!(
            cart.get(AlbumId::new(1)).unwrap().record.price,
            Price::from_cents(1999)
        );
        assert!(cart.get(AlbumId::new(999)).is_none());
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let mut cart = CartContainer::default();
        let order = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let order = order.clone();
            cart.subscribe(Box::new(move |_: &[CartItem<Album>]| {
                order.lock().unwrap().push(name);
            }));
        }

        cart.add(album(1, 100));
        assert_eq!(*order.lock().unwrap(), ["first", "second", "third"]);
    }

    #[test]
    fn test_listener_sees_post_mutation_state() {
        let mut cart = CartContainer::default();
        let log = recorder(&mut cart);

        cart.add(album(1, 100));
        cart.add(album(2, 100));
        cart.remove(AlbumId::new(1));

        assert_eq!(*log.lock().unwrap(), vec![vec![1], vec![1, 2], vec![2]]);
    }

    proptest! {
        #[test]
        fn prop_ids_stay_unique(ids in proptest::collection::vec(0i32..20, 0..60)) {
            let mut cart = CartContainer::default();
            for id in &ids {
                cart.add(album(*id, 100));
            }

            let mut seen = std::collections::HashSet::new();
            for item in cart.items() {
                prop_assert!(seen.insert(item.id()));
            }

            let distinct: std::collections::HashSet<_> = ids.iter().collect();
            prop_assert_eq!(cart.items().len(), distinct.len());
        }

        #[test]
        fn prop_add_result_matches_prior_membership(ids in proptest::collection::vec(0i32..10, 0..40)) {
            let mut cart = CartContainer::default();
            for id in ids {
                let was_present = cart.has(AlbumId::new(id));
                prop_assert_eq!(cart.add(album(id, 100)), !was_present);
            }
        }
    }
}
