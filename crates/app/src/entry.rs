//! Item entry screen: create a new item.

use inventory_core::Entity;
use inventory_items::{Draft, Item};
use inventory_store::ItemsRepository;

use crate::session::{FormSession, SessionResult, SessionState};

/// State holder for the "add item" form.
pub struct ItemEntrySession<R> {
    repo: R,
    form: FormSession,
}

impl<R> core::fmt::Debug for ItemEntrySession<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemEntrySession")
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}

impl<R: ItemsRepository> ItemEntrySession<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            form: FormSession::new(),
        }
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    pub fn update(&mut self, draft: Draft) -> SessionResult<SessionState> {
        self.form.update(draft)
    }

    pub fn discard(&mut self) {
        self.form.discard();
    }

    /// Insert the item and close the session.
    ///
    /// If storage fails the session stays open so the user can retry.
    pub fn save(&mut self) -> SessionResult<Item> {
        let item = self.form.take_for_submit()?;
        let stored = self.repo.insert(item)?;
        self.form.mark_submitted();
        tracing::debug!(item_id = %stored.id(), "item entry saved");
        Ok(stored)
    }
}
