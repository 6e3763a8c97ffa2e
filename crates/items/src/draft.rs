//! Text-form mirror of an [`Item`] and the total conversions between them.

use serde::{Deserialize, Serialize};

use inventory_core::{DomainResult, Entity, ItemId};

use crate::item::Item;
use crate::validation;

/// Form state for an item while it is being typed in.
///
/// The numeric fields are kept as raw text because input arrives
/// keystroke by keystroke and is only parsed when converted to an [`Item`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::UNASSIGNED,
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    /// See [`validation::is_valid`].
    pub fn is_valid(&self) -> bool {
        validation::is_valid(self)
    }

    /// See [`validation::ensure_valid`].
    pub fn ensure_valid(&self) -> DomainResult<()> {
        validation::ensure_valid(self)
    }

    /// See [`to_item`].
    pub fn to_item(&self) -> Item {
        to_item(self)
    }
}

impl From<&Item> for Draft {
    fn from(item: &Item) -> Self {
        to_draft(item)
    }
}

impl From<&Draft> for Item {
    fn from(draft: &Draft) -> Self {
        to_item(draft)
    }
}

/// Convert form text into an item. Never fails.
///
/// - `price`: surrounding whitespace is ignored; anything that is not a
///   finite decimal number becomes `0.0`.
/// - `quantity`: must be a plain (optionally signed) integer that fits in
///   32 bits; anything else becomes `0`.
///
/// Negative numbers parse successfully and are kept as-is. Callers that
/// need non-negative stock must check that themselves.
pub fn to_item(draft: &Draft) -> Item {
    Item::with_parts(
        draft.id,
        draft.name.clone(),
        parse_price(&draft.price),
        parse_quantity(&draft.quantity),
    )
}

/// Render an item into form text.
///
/// Prices use the shortest text that parses back to the same `f64`, and
/// always carry a fractional part or exponent (`300.0`, never `300`).
pub fn to_draft(item: &Item) -> Draft {
    Draft {
        id: item.id(),
        name: item.name().to_owned(),
        price: format!("{:?}", item.price()),
        quantity: item.quantity().to_string(),
    }
}

fn parse_price(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

fn parse_quantity(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_well_formed_draft() {
        let draft = Draft::new("Pen", "1.99", "10");
        assert_eq!(to_item(&draft), Item::new("Pen", 1.99, 10));
    }

    #[test]
    fn non_numeric_price_becomes_zero() {
        let item = to_item(&Draft::new("Pen", "abc", "10"));
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.quantity(), 10);
    }

    #[test]
    fn non_numeric_quantity_becomes_zero() {
        assert_eq!(to_item(&Draft::new("Pen", "1", "ten")).quantity(), 0);
        assert_eq!(to_item(&Draft::new("Pen", "1", "1.5")).quantity(), 0);
        assert_eq!(to_item(&Draft::new("Pen", "1", "99999999999")).quantity(), 0);
    }

    #[test]
    fn empty_fields_become_zero() {
        let item = to_item(&Draft::default());
        assert_eq!(item, Item::new("", 0.0, 0));
    }

    #[test]
    fn negative_numbers_are_kept() {
        let item = to_item(&Draft::new("Pen", "-2.5", "-5"));
        assert_eq!(item.price(), -2.5);
        assert_eq!(item.quantity(), -5);
    }

    #[test]
    fn price_ignores_surrounding_whitespace_but_quantity_does_not() {
        let item = to_item(&Draft::new("Pen", " 3.25 ", " 10"));
        assert_eq!(item.price(), 3.25);
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn non_finite_price_becomes_zero() {
        for text in ["NaN", "inf", "-infinity"] {
            assert_eq!(to_item(&Draft::new("Pen", text, "1")).price(), 0.0, "{text}");
        }
    }

    #[test]
    fn id_is_copied_verbatim() {
        let draft = Draft::new("Pen", "1", "1").with_id(ItemId::new(12));
        assert_eq!(to_item(&draft).id(), ItemId::new(12));
    }

    #[test]
    fn draft_renders_canonical_text() {
        let item = Item::with_parts(ItemId::new(5), "TV", 300.0, 50);
        let draft = to_draft(&item);

        assert_eq!(
            draft,
            Draft {
                id: ItemId::new(5),
                name: "TV".to_string(),
                price: "300.0".to_string(),
                quantity: "50".to_string(),
            }
        );
        assert_eq!(to_item(&draft), item);
    }

    #[test]
    fn from_impls_match_free_functions() {
        let item = Item::with_parts(ItemId::new(1), "Mug", 4.5, 3);
        let draft = Draft::from(&item);
        assert_eq!(Item::from(&draft), item);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: rendering an item to form text and parsing it back is lossless.
        #[test]
        fn draft_round_trip_preserves_item(
            id in 0i32..i32::MAX,
            name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
            price in 0.0f64..1.0e12,
            quantity in 0i32..i32::MAX,
        ) {
            let item = Item::with_parts(ItemId::new(id), name, price, quantity);
            prop_assert_eq!(to_item(&to_draft(&item)), item);
        }

        /// Property: conversion never panics, whatever the user typed.
        #[test]
        fn to_item_is_total(price in ".*", quantity in ".*") {
            let item = to_item(&Draft::new("x", price, quantity));
            prop_assert!(item.price().is_finite());
        }

        /// Property: text that is not a number at all always becomes zero.
        /// (`a` and `f` are left out so the text can never spell `nan`/`inf`.)
        #[test]
        fn alphabetic_text_becomes_zero(text in "[g-zG-Z]{1,12}") {
            let item = to_item(&Draft::new("x", text.clone(), text));
            prop_assert_eq!(item.price(), 0.0);
            prop_assert_eq!(item.quantity(), 0);
        }
    }
}
