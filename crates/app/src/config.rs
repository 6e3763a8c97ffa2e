//! Application configuration, read from `INVENTORY_*` environment variables.

use inventory_items::CurrencyFormat;

const MAX_DECIMAL_PLACES: usize = 6;

/// Runtime settings for the app container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How prices are rendered on details/list screens.
    pub currency: CurrencyFormat,
    /// Populate an empty store with a few sample items on startup.
    pub seed_demo_items: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            seed_demo_items: false,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a map here).
    ///
    /// Unparsable values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let symbol = lookup("INVENTORY_CURRENCY_SYMBOL").unwrap_or(defaults.currency.symbol);

        let decimal_places = parse_or(
            &lookup,
            "INVENTORY_CURRENCY_DECIMALS",
            defaults.currency.decimal_places,
            |raw| {
                raw.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|d| *d <= MAX_DECIMAL_PLACES)
            },
        );

        let grouping = parse_or(
            &lookup,
            "INVENTORY_CURRENCY_GROUPING",
            defaults.currency.grouping,
            parse_bool,
        );

        let seed_demo_items = parse_or(
            &lookup,
            "INVENTORY_SEED_DEMO_ITEMS",
            defaults.seed_demo_items,
            parse_bool,
        );

        Self {
            currency: CurrencyFormat {
                symbol,
                decimal_places,
                grouping,
            },
            seed_demo_items,
        }
    }
}

fn parse_or<T, F>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T, parse: F) -> T
where
    T: core::fmt::Debug,
    F: Fn(&str) -> Option<T>,
{
    match lookup(key) {
        None => default,
        Some(raw) => parse(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, ?default, "invalid config value; using default");
            default
        }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
