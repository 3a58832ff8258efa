//! Storefront service: composes the catalog and sales domains over a content store
//! for the presentation surfaces (home, shop listing, live search, product detail,
//! checkout, contact).

use chrono::Utc;
use serde::Serialize;

use pearion_catalog::{
    CatalogConfig, CatalogFilter, Category, FilterOptions, Product, Review, SearchOutcome,
    average_rating, bestsellers, filter_and_sort, related_products, reviews_for_product, search,
    suggest,
};
use pearion_core::{ContactId, DomainError, OrderId};
use pearion_sales::{
    Cart, CheckoutConfig, ContactForm, Order, PaymentMethod, ReceiptUpload, ShippingDetails,
};

use crate::content_store::ContentStore;
use crate::error::{StoreResult, StorefrontError};

pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Receipt image as received from the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Shop page: the ordered product list plus everything needed to render filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopListing {
    pub products: Vec<Product>,
    /// Selector options from the unfiltered catalog.
    pub options: FilterOptions,
    pub outcome: SearchOutcome,
    pub catalog_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub bestsellers: Vec<Product>,
    pub categories: Vec<Category>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub related: Vec<Product>,
    pub reviews: Vec<Review>,
    pub average_rating: Option<f64>,
}

fn owned<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<Product> {
    products.into_iter().cloned().collect()
}

/// Log a failed content-store call and lift it into the service error.
fn logged<T>(operation: &'static str, result: StoreResult<T>) -> StorefrontResult<T> {
    result.map_err(|err| {
        tracing::warn!(operation, error = %err, "content store call failed");
        StorefrontError::from(err)
    })
}

#[derive(Debug)]
pub struct Storefront<S> {
    store: S,
    catalog: CatalogConfig,
    checkout: CheckoutConfig,
}

impl<S> Storefront<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self::with_config(store, CatalogConfig::default(), CheckoutConfig::default())
    }

    /// Storefront configured from `PEARION_*` environment variables.
    pub fn from_env(store: S) -> Self {
        Self::with_config(store, CatalogConfig::from_env(), CheckoutConfig::from_env())
    }

    pub fn with_config(store: S, catalog: CatalogConfig, checkout: CheckoutConfig) -> Self {
        Self {
            store,
            catalog,
            checkout,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog_config(&self) -> &CatalogConfig {
        &self.catalog
    }

    /// Filter state for a fresh visit or after "clear filters".
    pub fn default_filter(&self) -> CatalogFilter {
        CatalogFilter::cleared(&self.catalog)
    }

    fn products(&self) -> StorefrontResult<Vec<Product>> {
        logged("products", self.store.products())
    }

    /// Shop listing: search first when a query is present, then filter and sort.
    pub fn shop_listing(&self, query: &str, filter: &CatalogFilter) -> StorefrontResult<ShopListing> {
        let catalog = self.products()?;
        let options = FilterOptions::derive(&catalog);

        let candidates: Vec<&Product> = if query.trim().is_empty() {
            catalog.iter().collect()
        } else {
            search(&catalog, query)
        };
        let products = owned(filter_and_sort(candidates, filter));
        let outcome = SearchOutcome::classify(query, products.len());

        tracing::debug!(catalog = catalog.len(), shown = products.len(), ?outcome, "shop listing");
        Ok(ShopListing {
            products,
            options,
            outcome,
            catalog_size: catalog.len(),
        })
    }

    /// Live-search suggestions for the search overlay.
    pub fn suggestions(&self, query: &str) -> StorefrontResult<Vec<Product>> {
        let catalog = self.products()?;
        Ok(owned(suggest(&catalog, query, &self.catalog)))
    }

    pub fn home(&self) -> StorefrontResult<HomePage> {
        let catalog = self.products()?;
        Ok(HomePage {
            bestsellers: owned(bestsellers(&catalog, self.catalog.bestseller_limit)),
            categories: logged("categories", self.store.categories())?,
            reviews: logged("reviews", self.store.reviews())?,
        })
    }

    pub fn product_detail(&self, slug: &str) -> StorefrontResult<ProductDetail> {
        let product = logged("product_by_slug", self.store.product_by_slug(slug))?
            .ok_or(DomainError::NotFound)?;
        let catalog = self.products()?;
        let all_reviews = logged("reviews", self.store.reviews())?;

        let related = owned(related_products(&catalog, &product, self.catalog.related_limit));
        let reviews: Vec<Review> = reviews_for_product(&all_reviews, &product.id)
            .into_iter()
            .cloned()
            .collect();
        let average_rating = average_rating(&reviews);

        Ok(ProductDetail {
            product,
            related,
            reviews,
            average_rating,
        })
    }

    /// Upload the receipt, place the order and persist it.
    pub fn place_order(
        &self,
        details: &ShippingDetails,
        payment_method: PaymentMethod,
        receipt: Option<ReceiptFile>,
        cart: &Cart,
    ) -> StorefrontResult<OrderId> {
        Order::check_submission(details, cart)?;

        let receipt = match receipt {
            Some(file) if !file.bytes.is_empty() => {
                let asset_id =
                    logged("upload_asset", self.store.upload_asset(&file.file_name, &file.bytes))?;
                Some(ReceiptUpload {
                    file_name: file.file_name,
                    asset_id,
                })
            }
            _ => None,
        };

        let order = Order::place(
            OrderId::generate(),
            details,
            payment_method,
            receipt.as_ref(),
            cart,
            &self.checkout,
            Utc::now(),
        )?;
        let id = logged("create_order", self.store.create_order(&order))?;

        tracing::info!(
            order_id = %id,
            total = order.total_amount(),
            lines = order.lines().len(),
            payment_method = order.payment_method().label(),
            "order placed"
        );
        Ok(id)
    }

    pub fn submit_contact(&self, form: ContactForm) -> StorefrontResult<ContactId> {
        let message = form.validate(ContactId::generate(), Utc::now())?;
        let id = logged("create_contact", self.store.create_contact(&message))?;
        tracing::info!(contact_id = %id, subject = message.subject.label(), "contact message received");
        Ok(id)
    }
}
