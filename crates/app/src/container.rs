//! Explicit dependency wiring for the app.
//!
//! The container owns the one shared repository and hands it to each screen
//! state holder it builds. Nothing reaches for a global.

use std::sync::Arc;

use inventory_items::{CurrencyFormat, Item};
use inventory_store::{InMemoryItemsRepository, ItemsRepository, StoreResult};

use crate::args::SessionArgs;
use crate::config::AppConfig;
use crate::details::ItemDetailsView;
use crate::edit::ItemEditSession;
use crate::entry::ItemEntrySession;
use crate::home::HomeView;
use crate::session::SessionResult;

pub type SharedRepository = Arc<dyn ItemsRepository>;

pub struct AppContainer {
    config: AppConfig,
    repository: SharedRepository,
}

impl core::fmt::Debug for AppContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppContainer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppContainer {
    /// Build the container with the offline (in-memory) repository.
    pub fn new(config: AppConfig) -> StoreResult<Self> {
        let repository: SharedRepository = Arc::new(InMemoryItemsRepository::new());
        Self::with_repository(config, repository)
    }

    /// Build the container around a caller-supplied repository.
    pub fn with_repository(config: AppConfig, repository: SharedRepository) -> StoreResult<Self> {
        if config.seed_demo_items && repository.list()?.is_empty() {
            for item in demo_items() {
                repository.insert(item)?;
            }
            tracing::info!("seeded demo inventory items");
        }
        Ok(Self { config, repository })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.config.currency
    }

    pub fn repository(&self) -> SharedRepository {
        Arc::clone(&self.repository)
    }

    pub fn home(&self) -> HomeView<SharedRepository> {
        HomeView::new(self.repository())
    }

    pub fn item_entry(&self) -> ItemEntrySession<SharedRepository> {
        ItemEntrySession::new(self.repository())
    }

    pub fn item_edit(&self, args: &SessionArgs) -> SessionResult<ItemEditSession<SharedRepository>> {
        ItemEditSession::open(args, self.repository())
    }

    pub fn item_details(
        &self,
        args: &SessionArgs,
    ) -> SessionResult<ItemDetailsView<SharedRepository>> {
        ItemDetailsView::open(args, self.repository())
    }
}

fn demo_items() -> Vec<Item> {
    vec![
        Item::new("Pen", 1.99, 10),
        Item::new("TV", 300.0, 50),
        Item::new("Notebook", 4.25, 0),
    ]
}
