use serde::Serialize;

use crate::config::CatalogConfig;
use crate::product::Product;

use super::scoring::score;
use super::tokenizer::{is_blank_query, tokenize};

/// A product together with its relevance score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub score: u32,
}

/// Why a search produced what it did.
///
/// A blank query and a query without matches both yield an empty list; surfaces
/// use this to tell them apart (trending suggestions vs. "no match" message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum SearchOutcome {
    NoQuery,
    NoMatches,
    Matches(usize),
}

impl SearchOutcome {
    pub fn classify(query: &str, matches: usize) -> Self {
        if is_blank_query(query) {
            SearchOutcome::NoQuery
        } else if matches == 0 {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(matches)
        }
    }

    pub fn has_query(&self) -> bool {
        !matches!(self, SearchOutcome::NoQuery)
    }
}

/// Score every product against `query`, keep matches, rank by score descending.
///
/// Blank queries return nothing. Equal scores keep their input order.
pub fn search_scored<'a, I>(products: I, query: &str) -> Vec<ScoredProduct<'a>>
where
    I: IntoIterator<Item = &'a Product>,
{
    if is_blank_query(query) {
        tracing::trace!("blank catalog query");
        return Vec::new();
    }

    let tokens = tokenize(query);
    let mut scored: Vec<ScoredProduct<'a>> = products
        .into_iter()
        .map(|product| ScoredProduct {
            product,
            score: score(product, &tokens),
        })
        .filter(|s| s.score > 0)
        .collect();

    // `sort_by` is stable.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(tokens = tokens.len(), matches = scored.len(), "catalog search");
    scored
}

/// Ranked products matching `query` (see [`search_scored`]).
pub fn search<'a, I>(products: I, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    search_scored(products, query)
        .into_iter()
        .map(|s| s.product)
        .collect()
}

/// Live-search suggestions: the top results once the raw query is long enough.
pub fn suggest<'a, I>(products: I, query: &str, config: &CatalogConfig) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    if query.chars().count() < config.suggestion_min_query_len {
        return Vec::new();
    }
    let mut results = search(products, query);
    results.truncate(config.suggestion_limit);
    results
}
