//! Inventory item model.
//!
//! This crate holds the stored item shape, its text-form mirror used while a
//! user is typing, the conversions between the two, and form validation.
//! Everything here is pure and synchronous (no IO, no storage).

pub mod draft;
pub mod format;
pub mod item;
pub mod validation;

pub use draft::{Draft, to_draft, to_item};
pub use format::{CurrencyFormat, format_price};
pub use item::Item;
pub use validation::is_valid;
