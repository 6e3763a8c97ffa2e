//! In-memory item repository for offline use, tests and dev.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use inventory_core::{Entity, ItemId};
use inventory_items::Item;

use crate::repository::{ItemsRepository, StoreError, StoreResult};

#[derive(Debug, Default)]
struct State {
    items: BTreeMap<ItemId, Item>,
    last_id: i32,
}

/// In-memory repository.
///
/// Ids are assigned from a monotonically increasing counter starting at 1
/// and are never reused, even after deletes.
#[derive(Debug, Default)]
pub struct InMemoryItemsRepository {
    state: RwLock<State>,
}

impl InMemoryItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Build a repository pre-populated through [`ItemsRepository::insert`].
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> StoreResult<Self> {
        let repo = Self::new();
        for item in items {
            repo.insert(item)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.items.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.items.is_empty())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("item store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("item store lock poisoned".to_string()))
    }
}

impl ItemsRepository for InMemoryItemsRepository {
    fn list(&self) -> StoreResult<Vec<Item>> {
        let state = self.read()?;
        let mut items: Vec<Item> = state.items.values().cloned().collect();
        items.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
        Ok(items)
    }

    fn get(&self, id: ItemId) -> StoreResult<Item> {
        let state = self.read()?;
        state.items.get(&id).cloned().ok_or_else(|| {
            tracing::warn!(item_id = %id, "item lookup missed");
            StoreError::NotFound(id)
        })
    }

    fn insert(&self, item: Item) -> StoreResult<Item> {
        let mut state = self.write()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("item id space exhausted".to_string()))?;
        state.last_id = next;

        let stored = item.with_id(ItemId::new(next));
        state.items.insert(stored.id(), stored.clone());
        tracing::debug!(item_id = %stored.id(), name = stored.name(), "item inserted");
        Ok(stored)
    }

    fn update(&self, item: Item) -> StoreResult<Item> {
        let mut state = self.write()?;
        let id = item.id();
        match state.items.get_mut(&id) {
            Some(slot) => {
                *slot = item.clone();
                tracing::debug!(item_id = %id, name = item.name(), "item updated");
                Ok(item)
            }
            None => {
                tracing::warn!(item_id = %id, "update of unknown item");
                Err(StoreError::NotFound(id))
            }
        }
    }

    fn delete(&self, id: ItemId) -> StoreResult<()> {
        let mut state = self.write()?;
        match state.items.remove(&id) {
            Some(_) => {
                tracing::debug!(item_id = %id, "item deleted");
                Ok(())
            }
            None => {
                tracing::warn!(item_id = %id, "delete of unknown item");
                Err(StoreError::NotFound(id))
            }
        }
    }
}
