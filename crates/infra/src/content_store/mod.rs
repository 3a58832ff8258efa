//! Content-store abstraction.
//!
//! The headless CMS owns every catalog document; the storefront reads immutable
//! snapshots through [`ContentStore`] and writes only orders, contact messages and
//! uploaded receipt images.

pub mod in_memory;

pub use in_memory::{ContentSnapshot, InMemoryContentStore};

use std::sync::Arc;

use pearion_catalog::{Category, Product, Review};
use pearion_core::{ContactId, OrderId};
use pearion_sales::{ContactMessage, Order};

use crate::error::StoreResult;

/// Read/write interface of the content store.
pub trait ContentStore: Send + Sync {
    fn products(&self) -> StoreResult<Vec<Product>>;

    /// Categories in display order.
    fn categories(&self) -> StoreResult<Vec<Category>>;

    fn reviews(&self) -> StoreResult<Vec<Review>>;

    fn product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>> {
        Ok(self
            .products()?
            .into_iter()
            .find(|p| p.slug_str() == Some(slug)))
    }

    /// Store an uploaded image and return its asset id.
    fn upload_asset(&self, file_name: &str, bytes: &[u8]) -> StoreResult<String>;

    fn create_order(&self, order: &Order) -> StoreResult<OrderId>;

    fn create_contact(&self, message: &ContactMessage) -> StoreResult<ContactId>;
}

impl<S> ContentStore for Arc<S>
where
    S: ContentStore + ?Sized,
{
    fn products(&self) -> StoreResult<Vec<Product>> {
        (**self).products()
    }

    fn categories(&self) -> StoreResult<Vec<Category>> {
        (**self).categories()
    }

    fn reviews(&self) -> StoreResult<Vec<Review>> {
        (**self).reviews()
    }

    fn product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>> {
        (**self).product_by_slug(slug)
    }

    fn upload_asset(&self, file_name: &str, bytes: &[u8]) -> StoreResult<String> {
        (**self).upload_asset(file_name, bytes)
    }

    fn create_order(&self, order: &Order) -> StoreResult<OrderId> {
        (**self).create_order(order)
    }

    fn create_contact(&self, message: &ContactMessage) -> StoreResult<ContactId> {
        (**self).create_contact(message)
    }
}
