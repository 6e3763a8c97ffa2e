//! The stored inventory item.

use serde::{Deserialize, Serialize};

use inventory_core::{Entity, ItemId};

use crate::format::{CurrencyFormat, format_price};

/// A stored inventory row.
///
/// Values are immutable: every "change" produces a new `Item`, so a reader
/// holding a clone never observes a half-applied edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: f64,
    quantity: i32,
}

impl Item {
    /// Create a not-yet-stored item (`id == ItemId::UNASSIGNED`).
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self::with_parts(ItemId::UNASSIGNED, name, price, quantity)
    }

    pub fn with_parts(id: ItemId, name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity <= 0
    }

    pub fn with_id(&self, id: ItemId) -> Self {
        Self { id, ..self.clone() }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_price(&self, price: f64) -> Self {
        Self { price, ..self.clone() }
    }

    pub fn with_quantity(&self, quantity: i32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Display-only rendering of the price; see [`format_price`].
    pub fn formatted_price(&self, fmt: &CurrencyFormat) -> String {
        format_price(self.price, fmt)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_unassigned() {
        let item = Item::new("Pen", 1.99, 10);
        assert_eq!(item.id(), ItemId::UNASSIGNED);
        assert_eq!(item.name(), "Pen");
        assert_eq!(item.price(), 1.99);
        assert_eq!(item.quantity(), 10);
    }

    #[test]
    fn with_quantity_leaves_original_untouched() {
        let original = Item::with_parts(ItemId::new(3), "TV", 300.0, 50);
        let sold = original.with_quantity(49);

        assert_eq!(original.quantity(), 50);
        assert_eq!(sold.quantity(), 49);
        assert!(sold.same_identity(&original));
        assert_ne!(sold, original);
    }

    #[test]
    fn out_of_stock_at_zero_or_below() {
        assert!(Item::new("A", 1.0, 0).is_out_of_stock());
        assert!(Item::new("A", 1.0, -2).is_out_of_stock());
        assert!(!Item::new("A", 1.0, 1).is_out_of_stock());
    }

    #[test]
    fn formatted_price_uses_currency_format() {
        let item = Item::new("TV", 1299.5, 1);
        assert_eq!(item.formatted_price(&CurrencyFormat::default()), "$1,299.50");
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let item = Item::with_parts(ItemId::new(5), "TV", 300.0, 50);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 5, "name": "TV", "price": 300.0, "quantity": 50 })
        );
    }
}
