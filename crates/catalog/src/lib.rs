//! Catalog domain: content model, free-text search and the listing filter/sort
//! pipeline.
//!
//! Everything here is a pure, synchronous transformation over an immutable
//! product snapshot (no IO, no shared state). Functions borrow their input and
//! return new orderings of references, so the same snapshot can be searched from
//! any number of threads at once.

pub mod config;
pub mod filter;
pub mod listing;
pub mod product;
pub mod review;
pub mod search;

pub use config::{CatalogConfig, DEFAULT_PRICE_CEILING};
pub use filter::{ALL, CatalogFilter, FilterOptions, Selector, SortMode, filter_and_sort};
pub use listing::{bestsellers, related_products};
pub use product::{Category, CategoryRef, ImageAsset, ImageRef, Product, Promotion, Slug};
pub use review::{Review, ReviewDraft, average_rating, reviews_for_product};
pub use search::{ScoredProduct, SearchOutcome, Segment, highlight, search, search_scored, suggest};
