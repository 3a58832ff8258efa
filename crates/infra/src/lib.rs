//! Infrastructure layer: the content-store seam and the storefront service that
//! presentation surfaces call.

pub mod content_store;
pub mod error;
pub mod storefront;

pub use content_store::{ContentSnapshot, ContentStore, InMemoryContentStore};
pub use error::{StoreError, StoreResult, StorefrontError};
pub use storefront::{
    HomePage, ProductDetail, ReceiptFile, ShopListing, Storefront, StorefrontResult,
};
