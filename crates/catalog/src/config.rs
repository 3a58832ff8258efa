//! Catalog configuration.

use pearion_core::config::{env_lookup, setting};

/// Upper bound of the price slider when no filter has been touched.
pub const DEFAULT_PRICE_CEILING: f64 = 50_000.0;

/// Tunables for catalog listing and live search.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Initial/cleared value of the price ceiling filter.
    pub price_ceiling: f64,
    /// Maximum number of live-search suggestions.
    pub suggestion_limit: usize,
    /// Raw query length (in chars) at which suggestions start.
    pub suggestion_min_query_len: usize,
    pub related_limit: usize,
    pub bestseller_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            price_ceiling: DEFAULT_PRICE_CEILING,
            suggestion_limit: 4,
            suggestion_min_query_len: 2,
            related_limit: 4,
            bestseller_limit: 4,
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `PEARION_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        Self {
            price_ceiling: setting(&lookup, "PEARION_PRICE_CEILING", d.price_ceiling),
            suggestion_limit: setting(&lookup, "PEARION_SUGGESTION_LIMIT", d.suggestion_limit),
            suggestion_min_query_len: setting(
                &lookup,
                "PEARION_SUGGESTION_MIN_QUERY_LEN",
                d.suggestion_min_query_len,
            ),
            related_limit: setting(&lookup, "PEARION_RELATED_LIMIT", d.related_limit),
            bestseller_limit: setting(&lookup, "PEARION_BESTSELLER_LIMIT", d.bestseller_limit),
        }
    }
}
