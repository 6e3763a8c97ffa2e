//! Screen-level state holders for the inventory app.
//!
//! Each screen gets a plain struct that owns its state and receives the
//! repository explicitly; nothing here depends on a UI framework.

pub mod args;
pub mod config;
pub mod container;
pub mod details;
pub mod edit;
pub mod entry;
pub mod home;
pub mod session;

pub use args::{ITEM_ID_ARG, SessionArgs};
pub use config::AppConfig;
pub use container::AppContainer;
pub use details::{ItemDetailsState, ItemDetailsView};
pub use edit::ItemEditSession;
pub use entry::ItemEntrySession;
pub use home::{HomeState, HomeView};
pub use session::{FormSession, SessionError, SessionResult, SessionState};
