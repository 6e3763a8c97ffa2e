//! Home screen: the list of all items.

use serde::{Deserialize, Serialize};

use inventory_items::Item;
use inventory_store::ItemsRepository;

use crate::session::SessionResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeState {
    pub items: Vec<Item>,
}

/// State holder for the home screen. Starts empty until refreshed.
pub struct HomeView<R> {
    repo: R,
    state: HomeState,
}

impl<R> core::fmt::Debug for HomeView<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HomeView")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: ItemsRepository> HomeView<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: HomeState::default(),
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    /// Reload the item list from storage.
    pub fn refresh(&mut self) -> SessionResult<&HomeState> {
        self.state = HomeState {
            items: self.repo.list()?,
        };
        Ok(&self.state)
    }
}
