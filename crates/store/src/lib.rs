//! Item storage.
//!
//! [`ItemsRepository`] is the contract screens talk to; [`InMemoryItemsRepository`]
//! is the offline, in-process implementation used by the app and by tests.

pub mod in_memory;
pub mod repository;

pub use in_memory::InMemoryItemsRepository;
pub use repository::{ItemsRepository, StoreError, StoreResult};
