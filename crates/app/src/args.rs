//! Navigation arguments handed to a screen when it is opened.

use std::collections::HashMap;

use inventory_core::ItemId;

use crate::session::{SessionError, SessionResult};

/// Route argument naming the item an edit/details screen works on.
pub const ITEM_ID_ARG: &str = "itemId";

/// String key/value arguments, as carried by a navigation route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionArgs {
    values: HashMap<String, String>,
}

impl SessionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments for a screen that targets a single item.
    pub fn for_item(id: ItemId) -> Self {
        Self::new().with(ITEM_ID_ARG, id.to_string())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The target item id. A screen cannot be built without it.
    pub fn require_item_id(&self) -> SessionResult<ItemId> {
        let raw = self
            .get(ITEM_ID_ARG)
            .ok_or(SessionError::MissingArgument(ITEM_ID_ARG))?;
        Ok(raw.parse::<ItemId>()?)
    }
}
