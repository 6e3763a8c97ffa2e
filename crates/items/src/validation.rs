//! Form validation for [`Draft`] values.
//!
//! Only blankness is checked. Numeric text is not inspected here: a draft
//! with `price = "abc"` is valid and converts to a zero price.

use inventory_core::{DomainError, DomainResult};

use crate::draft::Draft;

/// `true` iff name, price and quantity are all non-blank.
///
/// Called after every field edit to gate the submit action.
pub fn is_valid(draft: &Draft) -> bool {
    first_blank_field(draft).is_none()
}

/// Same rule as [`is_valid`], reporting the first blank field.
pub fn ensure_valid(draft: &Draft) -> DomainResult<()> {
    match first_blank_field(draft) {
        None => Ok(()),
        Some(field) => Err(DomainError::validation(format!("{field} cannot be blank"))),
    }
}

fn first_blank_field(draft: &Draft) -> Option<&'static str> {
    [
        ("name", &draft.name),
        ("price", &draft.price),
        ("quantity", &draft.quantity),
    ]
    .into_iter()
    .find(|(_, value)| is_blank(value))
    .map(|(field, _)| field)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
