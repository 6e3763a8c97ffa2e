//! Display-only price formatting.
//!
//! This is one-way: formatted text is never parsed back into a price.

use serde::{Deserialize, Serialize};

/// How prices are rendered for display. A single implicit currency is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_places: usize,
    /// Insert `,` between groups of three integer digits.
    pub grouping: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_places: 2,
            grouping: true,
        }
    }
}

/// Render `price` as currency text, e.g. `1234.5` -> `$1,234.50`.
///
/// Negative amounts put the sign before the symbol (`-$5.00`).
pub fn format_price(price: f64, fmt: &CurrencyFormat) -> String {
    if !price.is_finite() {
        return format!("{}{}", fmt.symbol, price);
    }

    let fixed = format!("{:.*}", fmt.decimal_places, price.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let int_part = if fmt.grouping {
        group_thousands(int_part)
    } else {
        int_part.to_string()
    };

    // Rounding can turn a tiny negative into zero; don't print "-$0.00".
    let is_negative = price < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if is_negative { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{sign}{}{int_part}.{frac}", fmt.symbol),
        None => format!("{sign}{}{int_part}", fmt.symbol),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
