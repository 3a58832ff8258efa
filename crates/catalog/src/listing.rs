//! Curated product lists for the home and product detail pages.

use crate::product::{Product, Promotion};

/// Bestseller showcase: promoted products in catalog order, capped at `limit`.
pub fn bestsellers<'a, I>(products: I, limit: usize) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| p.promotion == Promotion::Bestseller)
        .take(limit)
        .collect()
}

/// Other products of the same category, newest first, capped at `limit`.
///
/// Uncategorized products have no related products.
pub fn related_products<'a, I>(products: I, product: &Product, limit: usize) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let Some(category_id) = product.category_id() else {
        return Vec::new();
    };

    let mut related: Vec<&'a Product> = products
        .into_iter()
        .filter(|p| p.category_id() == Some(category_id))
        .filter(|p| p.id != product.id)
        .filter(|p| product.slug.is_none() || p.slug != product.slug)
        .collect();
    related.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    related.truncate(limit);
    related
}
