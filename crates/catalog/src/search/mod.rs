//! Free-text product search.
//!
//! A query is lower-cased and split on whitespace into tokens; every product is
//! scored independently against the token list with weighted substring matches,
//! non-matching products are dropped and the rest are ranked by score.
//!
//! ## Submodules
//! - **`tokenizer`**: query normalization.
//! - **`scoring`**: per-product relevance score.
//! - **`engine`**: the search pipeline, live suggestions and outcome classification.
//! - **`highlight`**: splitting display text around matched tokens.

pub mod engine;
pub mod highlight;
pub mod scoring;
pub mod tokenizer;

pub use engine::{ScoredProduct, SearchOutcome, search, search_scored, suggest};
pub use highlight::{Segment, highlight};
pub use scoring::{score, searchable_text};
pub use tokenizer::{is_blank_query, tokenize};
