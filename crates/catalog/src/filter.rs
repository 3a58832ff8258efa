//! Catalog filter/sort pipeline.
//!
//! Four predicates (category, price ceiling, material, color) are combined with
//! logical AND, then a single sort mode either reorders or further restricts the
//! survivors. The pipeline is pure: it borrows products and returns a new ordering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use pearion_core::ValueObject;

use crate::config::{CatalogConfig, DEFAULT_PRICE_CEILING};
use crate::product::{Product, Promotion};

/// Selector value meaning "no filter on this dimension".
pub const ALL: &str = "All";

/// One filter dimension: either everything or a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    /// `"All"` (any case) and blank input select everything.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case(ALL) {
            Selector::All
        } else {
            Selector::Only(raw.to_string())
        }
    }

    pub fn only(value: impl Into<String>) -> Self {
        Self::parse(&value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Selector::parse(&value)
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Selector::parse(value)
    }
}

impl From<Selector> for String {
    fn from(value: Selector) -> Self {
        value.as_str().to_string()
    }
}

/// Sort/promotion mode applied after the predicates.
///
/// `Featured` and `Bestseller` restrict by promotion rather than reorder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    #[default]
    All,
    Featured,
    Newest,
    Bestseller,
    PriceLow,
    PriceHigh,
}

impl SortMode {
    /// Unknown values fall back to [`SortMode::All`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "featured" => SortMode::Featured,
            "newest" => SortMode::Newest,
            "bestseller" => SortMode::Bestseller,
            "price-low" => SortMode::PriceLow,
            "price-high" => SortMode::PriceHigh,
            _ => SortMode::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::All => "all",
            SortMode::Featured => "featured",
            SortMode::Newest => "newest",
            SortMode::Bestseller => "bestseller",
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
        }
    }

    fn apply(self, list: &mut Vec<&Product>) {
        match self {
            SortMode::Featured => list.retain(|p| p.promotion == Promotion::Featured),
            SortMode::Bestseller => list.retain(|p| p.promotion == Promotion::Bestseller),
            // Undated products sort last.
            SortMode::Newest => list.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortMode::PriceLow => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortMode::PriceHigh => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortMode::All => {}
        }
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        SortMode::parse(&value)
    }
}

impl From<SortMode> for String {
    fn from(value: SortMode) -> Self {
        value.as_str().to_string()
    }
}

/// Complete filter state of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogFilter {
    pub category: Selector,
    /// Inclusive upper bound; the lower bound is fixed at 0.
    pub price_max: f64,
    pub material: Selector,
    pub color: Selector,
    pub mode: SortMode,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: Selector::All,
            price_max: DEFAULT_PRICE_CEILING,
            material: Selector::All,
            color: Selector::All,
            mode: SortMode::All,
        }
    }
}

impl ValueObject for CatalogFilter {}

impl CatalogFilter {
    /// Every selector reset, price ceiling at the configured maximum.
    pub fn cleared(config: &CatalogConfig) -> Self {
        Self {
            price_max: config.price_ceiling,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<Selector>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price_max(mut self, price_max: f64) -> Self {
        self.price_max = price_max;
        self
    }

    pub fn with_material(mut self, material: impl Into<Selector>) -> Self {
        self.material = material.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<Selector>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = mode;
        self
    }

    /// Category title equals the selector, ignoring case.
    pub fn matches_category(&self, product: &Product) -> bool {
        match &self.category {
            Selector::All => true,
            Selector::Only(wanted) => product
                .category_title()
                .is_some_and(|title| title.to_lowercase() == wanted.to_lowercase()),
        }
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        product.price <= self.price_max
    }

    /// Substring containment, so `"Gold"` matches `"Gold / Silver"`.
    pub fn matches_material(&self, product: &Product) -> bool {
        match &self.material {
            Selector::All => true,
            Selector::Only(wanted) => product.material.contains(wanted.as_str()),
        }
    }

    /// Exact element of the product's colors.
    pub fn matches_color(&self, product: &Product) -> bool {
        match &self.color {
            Selector::All => true,
            Selector::Only(wanted) => product.colors.iter().any(|c| c == wanted),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_price(product)
            && self.matches_material(product)
            && self.matches_color(product)
    }
}

/// Apply the predicates of `filter`, then its sort mode.
pub fn filter_and_sort<'a, I>(products: I, filter: &CatalogFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut list: Vec<&'a Product> = products.into_iter().filter(|p| filter.matches(p)).collect();
    filter.mode.apply(&mut list);

    tracing::debug!(
        category = filter.category.as_str(),
        price_max = filter.price_max,
        material = filter.material.as_str(),
        color = filter.color.as_str(),
        mode = filter.mode.as_str(),
        results = list.len(),
        "catalog filter"
    );
    list
}

/// Selector options offered by the listing, derived from the unfiltered catalog.
///
/// Each list starts with the `"All"` sentinel followed by distinct non-empty values
/// in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub materials: Vec<String>,
    pub colors: Vec<String>,
}

impl FilterOptions {
    pub fn derive<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut categories = Distinct::new();
        let mut materials = Distinct::new();
        let mut colors = Distinct::new();

        for product in products {
            if let Some(title) = product.category_title() {
                categories.push(title);
            }
            for material in product.materials() {
                materials.push(material);
            }
            for color in &product.colors {
                colors.push(color);
            }
        }

        Self {
            categories: categories.finish(),
            materials: materials.finish(),
            colors: colors.finish(),
        }
    }
}

struct Distinct<'a> {
    seen: HashSet<&'a str>,
    values: Vec<String>,
}

impl<'a> Distinct<'a> {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            values: vec![ALL.to_string()],
        }
    }

    fn push(&mut self, value: &'a str) {
        if !value.is_empty() && self.seen.insert(value) {
            self.values.push(value.to_string());
        }
    }

    fn finish(self) -> Vec<String> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::CategoryRef;
    use chrono::{TimeZone, Utc};
    use pearion_core::{CategoryId, ProductId};

    struct Fixture<'s> {
        id: &'s str,
        category: Option<&'s str>,
        price: f64,
        material: &'s str,
        colors: &'s [&'s str],
        promotion: Promotion,
        day: Option<u32>,
    }

    impl Default for Fixture<'_> {
        fn default() -> Self {
            Self {
                id: "p",
                category: Some("Rings"),
                price: 1000.0,
                material: "",
                colors: &[],
                promotion: Promotion::None,
                day: None,
            }
        }
    }

    fn make(fixture: Fixture<'_>) -> Product {
        let mut p = Product::new(ProductId::new(fixture.id).unwrap(), fixture.id.to_uppercase(), fixture.price);
        p.category = fixture.category.map(|title| CategoryRef {
            id: CategoryId::new(format!("c-{title}")).unwrap(),
            title: title.to_string(),
            slug: None,
        });
        p.material = fixture.material.to_string();
        p.colors = fixture.colors.iter().map(|c| c.to_string()).collect();
        p.promotion = fixture.promotion;
        p.created_at = fixture
            .day
            .map(|d| Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap());
        p
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn catalog() -> Vec<Product> {
        vec![
            make(Fixture { id: "a", category: Some("Necklaces"), price: 3000.0, material: "Pearl", colors: &["White"], promotion: Promotion::Bestseller, day: Some(3), ..Fixture::default() }),
            make(Fixture { id: "b", category: Some("Rings"), price: 8000.0, material: "Gold / Silver", colors: &["Yellow", "Silver"], promotion: Promotion::New, day: Some(9), ..Fixture::default() }),
            make(Fixture { id: "c", category: Some("Earrings"), price: 1500.0, material: "Silver", colors: &["Silver"], promotion: Promotion::Featured, day: Some(5), ..Fixture::default() }),
            make(Fixture { id: "d", category: None, price: 500.0, material: "", colors: &[], promotion: Promotion::Bestseller, day: None, ..Fixture::default() }),
        ]
    }

    #[test]
    fn default_filter_is_identity() {
        let products = catalog();
        let result = filter_and_sort(&products, &CatalogFilter::default());
        assert_eq!(ids(&result), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let products = catalog();
        let filter = CatalogFilter::default().with_price_max(3000.0);
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["a", "c", "d"]);
    }

    #[test]
    fn fractional_price_at_ceiling_passes() {
        let products = vec![
            make(Fixture { id: "at", price: 2999.5, ..Fixture::default() }),
            make(Fixture { id: "above", price: 2999.75, ..Fixture::default() }),
        ];
        let filter = CatalogFilter::default().with_price_max(2999.5);
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["at"]);

        let high = CatalogFilter::default().with_mode(SortMode::PriceHigh);
        assert_eq!(ids(&filter_and_sort(&products, &high)), vec!["above", "at"]);
    }

    #[test]
    fn category_matches_case_insensitively() {
        let products = catalog();
        let filter = CatalogFilter::default().with_category("rINGS");
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["b"]);
    }

    #[test]
    fn uncategorized_products_only_pass_all() {
        let products = catalog();
        let filter = CatalogFilter::default().with_category("Necklaces");
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["a"]);
        let all = CatalogFilter::default().with_category("all");
        assert!(filter_and_sort(&products, &all).iter().any(|p| p.id.as_str() == "d"));
    }

    #[test]
    fn material_matches_by_substring() {
        let products = catalog();
        let gold = CatalogFilter::default().with_material("Gold");
        assert_eq!(ids(&filter_and_sort(&products, &gold)), vec!["b"]);
        let silver = CatalogFilter::default().with_material("Silver");
        assert_eq!(ids(&filter_and_sort(&products, &silver)), vec!["b", "c"]);
    }

    #[test]
    fn color_matches_exact_elements_only() {
        let products = catalog();
        let filter = CatalogFilter::default().with_color("Silver");
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["b", "c"]);
        let partial = CatalogFilter::default().with_color("Silv");
        assert!(filter_and_sort(&products, &partial).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let products = catalog();
        let filter = CatalogFilter::default()
            .with_material("Silver")
            .with_color("Silver")
            .with_price_max(2000.0);
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["c"]);
    }

    #[test]
    fn bestseller_mode_restricts_after_predicates() {
        let products = catalog();
        let filter = CatalogFilter::default().with_mode(SortMode::Bestseller);
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["a", "d"]);
        let cheap = filter.with_price_max(1000.0);
        assert_eq!(ids(&filter_and_sort(&products, &cheap)), vec!["d"]);
    }

    #[test]
    fn featured_mode_restricts() {
        let products = catalog();
        let filter = CatalogFilter::default().with_mode(SortMode::Featured);
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["c"]);
    }

    #[test]
    fn newest_sorts_by_creation_desc_with_undated_last() {
        let products = catalog();
        let filter = CatalogFilter::default().with_mode(SortMode::Newest);
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn price_sorts() {
        let products = catalog();
        let low = CatalogFilter::default().with_mode(SortMode::PriceLow);
        assert_eq!(ids(&filter_and_sort(&products, &low)), vec!["d", "c", "a", "b"]);
        let high = CatalogFilter::default().with_mode(SortMode::PriceHigh);
        assert_eq!(ids(&filter_and_sort(&products, &high)), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn end_to_end_price_predicate_example() {
        let products = vec![
            make(Fixture { id: "necklace", category: Some("Necklaces"), price: 3000.0, promotion: Promotion::Bestseller, ..Fixture::default() }),
            make(Fixture { id: "ring", category: Some("Rings"), price: 8000.0, promotion: Promotion::New, ..Fixture::default() }),
        ];
        let filter = CatalogFilter::default().with_price_max(5000.0);
        assert_eq!(ids(&filter_and_sort(&products, &filter)), vec!["necklace"]);
    }

    #[test]
    fn unknown_sort_mode_falls_back_to_all() {
        assert_eq!(SortMode::parse("popular"), SortMode::All);
        assert_eq!(SortMode::parse("PRICE-LOW"), SortMode::PriceLow);
        assert_eq!(SortMode::PriceHigh.as_str(), "price-high");
    }

    #[test]
    fn selector_parsing() {
        assert!(Selector::parse("ALL").is_all());
        assert!(Selector::parse("  ").is_all());
        assert_eq!(Selector::parse("Gold"), Selector::Only("Gold".to_string()));
        assert_eq!(Selector::All.as_str(), "All");

        // The sentinel is case-insensitive on every dimension, not only category.
        let products = catalog();
        let material = CatalogFilter::default().with_material("all");
        assert_eq!(filter_and_sort(&products, &material).len(), products.len());
        let color = CatalogFilter::default().with_color("ALL");
        assert_eq!(filter_and_sort(&products, &color).len(), products.len());
        let decoded: CatalogFilter =
            serde_json::from_str(r#"{"material": "all", "color": "aLL"}"#).unwrap();
        assert!(decoded.material.is_all());
        assert!(decoded.color.is_all());
    }

    #[test]
    fn filter_state_round_trips_through_json() {
        let filter = CatalogFilter::default()
            .with_category("Rings")
            .with_mode(SortMode::PriceLow);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["category"], "Rings");
        assert_eq!(json["material"], "All");
        assert_eq!(json["priceMax"], 50_000.0);
        assert_eq!(json["mode"], "price-low");

        let partial: CatalogFilter = serde_json::from_str(r#"{"color": "White"}"#).unwrap();
        assert_eq!(partial.color, Selector::only("White"));
        assert_eq!(partial.price_max, DEFAULT_PRICE_CEILING);
    }

    #[test]
    fn cleared_uses_configured_ceiling() {
        let config = CatalogConfig {
            price_ceiling: 20_000.0,
            ..CatalogConfig::default()
        };
        let filter = CatalogFilter::cleared(&config);
        assert_eq!(filter.price_max, 20_000.0);
        assert!(filter.category.is_all());
        assert_eq!(filter.mode, SortMode::All);
    }

    #[test]
    fn options_are_distinct_with_all_first() {
        let products = catalog();
        let options = FilterOptions::derive(&products);
        assert_eq!(options.categories, vec!["All", "Necklaces", "Rings", "Earrings"]);
        assert_eq!(options.materials, vec!["All", "Pearl", "Gold", "Silver"]);
        assert_eq!(options.colors, vec!["All", "White", "Yellow", "Silver"]);
    }

    #[test]
    fn options_for_empty_catalog_hold_only_sentinel() {
        let options = FilterOptions::derive(&Vec::<Product>::new());
        assert_eq!(options.categories, vec!["All"]);
        assert_eq!(options.materials, vec!["All"]);
        assert_eq!(options.colors, vec!["All"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[a-z]{1,6}",
                0u32..60_000,
                proptest::sample::select(vec!["Gold", "Silver", "Gold / Silver", "Pearl", ""]),
                proptest::sample::select(vec![
                    Promotion::None,
                    Promotion::New,
                    Promotion::Bestseller,
                    Promotion::Featured,
                ]),
            )
                .prop_map(|(id, price, material, promotion)| {
                    let mut p = Product::new(ProductId::new(id).unwrap(), "item", f64::from(price));
                    p.material = material.to_string();
                    p.promotion = promotion;
                    p
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the cleared filter returns the catalog unchanged when
            /// everything is under the ceiling.
            #[test]
            fn identity_filter_preserves_order(
                products in proptest::collection::vec(arb_product(), 0..30)
            ) {
                let products: Vec<Product> = products
                    .into_iter()
                    .filter(|p| p.price <= DEFAULT_PRICE_CEILING)
                    .collect();
                let result = filter_and_sort(&products, &CatalogFilter::default());
                prop_assert_eq!(result.len(), products.len());
                for (got, want) in result.iter().zip(&products) {
                    prop_assert!(core::ptr::eq(*got, want));
                }
            }

            /// Property: re-running the pipeline yields the same output.
            #[test]
            fn pipeline_is_idempotent(
                products in proptest::collection::vec(arb_product(), 0..30),
                mode in proptest::sample::select(vec![
                    SortMode::All, SortMode::Featured, SortMode::Newest,
                    SortMode::Bestseller, SortMode::PriceLow, SortMode::PriceHigh,
                ]),
                price_max in 0u32..60_000
            ) {
                let filter = CatalogFilter::default()
                    .with_mode(mode)
                    .with_price_max(f64::from(price_max));
                let once = filter_and_sort(&products, &filter);
                let twice = filter_and_sort(once.iter().copied(), &filter);
                prop_assert_eq!(once, twice);
            }

            /// Property: every result satisfies every predicate.
            #[test]
            fn results_satisfy_predicates(
                products in proptest::collection::vec(arb_product(), 0..30),
                material in proptest::sample::select(vec!["All", "Gold", "Silver"]),
                price_max in 0u32..60_000
            ) {
                let filter = CatalogFilter::default()
                    .with_material(material)
                    .with_price_max(f64::from(price_max));
                for product in filter_and_sort(&products, &filter) {
                    prop_assert!(product.price <= f64::from(price_max));
                    prop_assert!(material == "All" || product.material.contains(material));
                }
            }
        }
    }
}
