//! Item details screen: view, sell and delete a single item.

use serde::{Deserialize, Serialize};

use inventory_core::{Entity, ItemId};
use inventory_items::{CurrencyFormat, Draft, Item, to_draft};
use inventory_store::ItemsRepository;

use crate::args::SessionArgs;
use crate::session::SessionResult;

/// What the details screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetailsState {
    pub out_of_stock: bool,
    pub details: Draft,
}

impl ItemDetailsState {
    fn from_item(item: &Item) -> Self {
        Self {
            out_of_stock: item.is_out_of_stock(),
            details: to_draft(item),
        }
    }
}

/// State holder for the details screen.
///
/// Keeps the last item read from storage; mutations go through the
/// repository and replace that snapshot with the stored result.
pub struct ItemDetailsView<R> {
    repo: R,
    item: Item,
}

impl<R> core::fmt::Debug for ItemDetailsView<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemDetailsView")
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}

impl<R: ItemsRepository> ItemDetailsView<R> {
    /// Open the details for the item named in `args`.
    pub fn open(args: &SessionArgs, repo: R) -> SessionResult<Self> {
        let item_id = args.require_item_id()?;
        let item = repo.get(item_id)?;
        Ok(Self { repo, item })
    }

    pub fn item_id(&self) -> ItemId {
        self.item.id()
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn state(&self) -> ItemDetailsState {
        ItemDetailsState::from_item(&self.item)
    }

    pub fn formatted_price(&self, fmt: &CurrencyFormat) -> String {
        self.item.formatted_price(fmt)
    }

    /// Re-read the item from storage.
    pub fn refresh(&mut self) -> SessionResult<&Item> {
        self.item = self.repo.get(self.item.id())?;
        Ok(&self.item)
    }

    /// Sell one unit of the currently stored item.
    ///
    /// The stored row is re-read first so edits saved elsewhere are kept.
    /// Out-of-stock items are left unchanged.
    pub fn sell_one(&mut self) -> SessionResult<&Item> {
        let current = self.repo.get(self.item.id())?;
        if current.is_out_of_stock() {
            tracing::debug!(item_id = %current.id(), "sell ignored; out of stock");
            self.item = current;
            return Ok(&self.item);
        }
        let sold = current.with_quantity(current.quantity() - 1);
        self.item = self.repo.update(sold)?;
        Ok(&self.item)
    }

    /// Delete the item. The view should be dropped afterwards.
    pub fn delete(self) -> SessionResult<ItemId> {
        let id = self.item.id();
        self.repo.delete(id)?;
        Ok(id)
    }
}
