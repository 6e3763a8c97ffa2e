//! Item edit screen: change an existing item.

use inventory_core::{Entity, ItemId};
use inventory_items::{Draft, Item, to_draft};
use inventory_store::ItemsRepository;

use crate::args::SessionArgs;
use crate::session::{FormSession, SessionResult, SessionState};

/// State holder for the "edit item" form.
pub struct ItemEditSession<R> {
    repo: R,
    item_id: ItemId,
    form: FormSession,
}

impl<R> core::fmt::Debug for ItemEditSession<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemEditSession")
            .field("item_id", &self.item_id)
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}

impl<R: ItemsRepository> ItemEditSession<R> {
    /// Open the form for the item named in `args`.
    ///
    /// Fails when the item id argument is absent or malformed, or when no
    /// such item is stored.
    pub fn open(args: &SessionArgs, repo: R) -> SessionResult<Self> {
        let item_id = args.require_item_id()?;
        let item = repo.get(item_id)?;
        Ok(Self {
            repo,
            item_id,
            form: FormSession::from_draft(to_draft(&item)),
        })
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    /// Replace the draft. The id always stays that of the edited item.
    pub fn update(&mut self, draft: Draft) -> SessionResult<SessionState> {
        self.form.update(draft.with_id(self.item_id))
    }

    pub fn discard(&mut self) {
        self.form.discard();
    }

    /// Write the edited item back and close the session.
    pub fn save(&mut self) -> SessionResult<Item> {
        let item = self.form.take_for_submit()?;
        let stored = self.repo.update(item)?;
        self.form.mark_submitted();
        tracing::debug!(item_id = %stored.id(), "item edit saved");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_store::{InMemoryItemsRepository, StoreError};
    use std::sync::Arc;

    use crate::args::ITEM_ID_ARG;
    use crate::session::SessionError;

    fn repo_with_tv() -> (Arc<InMemoryItemsRepository>, Item) {
        let repo = InMemoryItemsRepository::arc();
        let tv = repo.insert(Item::new("TV", 300.0, 50)).unwrap();
        (repo, tv)
    }

    #[test]
    fn open_loads_item_into_valid_form() {
        let (repo, tv) = repo_with_tv();
        let edit = ItemEditSession::open(&SessionArgs::for_item(tv.id()), repo).unwrap();

        assert_eq!(edit.item_id(), tv.id());
        assert_eq!(edit.form().state(), SessionState::Valid);
        assert_eq!(edit.form().draft(), &Draft::new("TV", "300.0", "50").with_id(tv.id()));
    }

    #[test]
    fn open_without_item_id_is_aborted() {
        let (repo, _) = repo_with_tv();
        let err = ItemEditSession::open(&SessionArgs::new(), repo).unwrap_err();
        assert_eq!(err, SessionError::MissingArgument(ITEM_ID_ARG));
    }

    #[test]
    fn open_unknown_item_is_not_found() {
        let (repo, _) = repo_with_tv();
        let err = ItemEditSession::open(&SessionArgs::for_item(ItemId::new(77)), repo).unwrap_err();
        assert_eq!(err, SessionError::Store(StoreError::NotFound(ItemId::new(77))));
    }

    #[test]
    fn save_updates_stored_item() {
        let (repo, tv) = repo_with_tv();
        let mut edit = ItemEditSession::open(&SessionArgs::for_item(tv.id()), repo.clone()).unwrap();

        edit.update(Draft::new("OLED TV", "899.99", "5")).unwrap();
        let saved = edit.save().unwrap();

        assert_eq!(saved, Item::with_parts(tv.id(), "OLED TV", 899.99, 5));
        assert_eq!(repo.get(tv.id()).unwrap(), saved);
        assert_eq!(edit.form().state(), SessionState::Submitted);
    }

    #[test]
    fn update_pins_draft_id_to_edited_item() {
        let (repo, tv) = repo_with_tv();
        let mut edit = ItemEditSession::open(&SessionArgs::for_item(tv.id()), repo).unwrap();

        edit.update(Draft::new("TV", "1", "1").with_id(ItemId::new(999))).unwrap();
        assert_eq!(edit.form().draft().id, tv.id());
    }

    #[test]
    fn save_fails_when_item_was_deleted_meanwhile() {
        let (repo, tv) = repo_with_tv();
        let mut edit = ItemEditSession::open(&SessionArgs::for_item(tv.id()), repo.clone()).unwrap();
        repo.delete(tv.id()).unwrap();

        let err = edit.save().unwrap_err();
        assert_eq!(err, SessionError::Store(StoreError::NotFound(tv.id())));
        assert!(edit.form().state().is_editing());
    }
}
