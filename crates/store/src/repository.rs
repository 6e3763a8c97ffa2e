use std::sync::Arc;

use inventory_core::ItemId;
use inventory_items::Item;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operation error.
///
/// `NotFound` is kept distinct so callers can tell "no such item" apart from
/// "the store is broken" instead of falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(ItemId),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Item repository abstraction.
pub trait ItemsRepository: Send + Sync {
    /// All stored items, ordered by name and then id.
    fn list(&self) -> StoreResult<Vec<Item>>;

    /// Fetch a single item.
    fn get(&self, id: ItemId) -> StoreResult<Item>;

    /// Store a new item. The incoming id is ignored and a fresh one assigned.
    fn insert(&self, item: Item) -> StoreResult<Item>;

    /// Replace an existing item (matched by id).
    fn update(&self, item: Item) -> StoreResult<Item>;

    /// Remove an item.
    fn delete(&self, id: ItemId) -> StoreResult<()>;
}

impl<R> ItemsRepository for Arc<R>
where
    R: ItemsRepository + ?Sized,
{
    fn list(&self) -> StoreResult<Vec<Item>> {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> StoreResult<Item> {
        (**self).get(id)
    }

    fn insert(&self, item: Item) -> StoreResult<Item> {
        (**self).insert(item)
    }

    fn update(&self, item: Item) -> StoreResult<Item> {
        (**self).update(item)
    }

    fn delete(&self, id: ItemId) -> StoreResult<()> {
        (**self).delete(id)
    }
}
