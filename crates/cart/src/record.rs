//! The view the cart has of a catalog record.

use core::fmt::Debug;
use core::hash::Hash;

use album_viewer_core::{Album, AlbumId, Price};

/// A catalog record that can be put in the cart.
///
/// The store only ever looks at a record's identifier and its price. The rest
/// of the record is carried along untouched so the presentation layer can
/// render it.
pub trait CartRecord {
    /// Stable identifier; no two cart lines may share one.
    type Id: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// The unit price to charge. Taken as-is; the cart never recomputes it.
    fn price(&self) -> Price;
}

impl CartRecord for Album {
    type Id = AlbumId;

    fn id(&self) -> AlbumId {
        self.id
    }

    fn price(&self) -> Price {
        self.price
    }
}
