use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pearion_catalog::{Category, Product, Review};
use pearion_core::{ContactId, Entity, OrderId};
use pearion_sales::{ContactMessage, Order};

use crate::error::{StoreError, StoreResult};

use super::ContentStore;

/// Catalog documents as exported from the content store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Metadata of an uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub file_name: String,
    pub size: usize,
}

/// In-memory content store for tests/dev.
///
/// Can be switched offline to exercise the storefront's retryable error path.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    products: RwLock<Vec<Product>>,
    categories: RwLock<Vec<Category>>,
    reviews: RwLock<Vec<Review>>,
    assets: RwLock<HashMap<String, StoredAsset>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    contacts: RwLock<HashMap<ContactId, ContactMessage>>,
    offline: AtomicBool,
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: ContentSnapshot) -> Self {
        Self {
            products: RwLock::new(snapshot.products),
            categories: RwLock::new(snapshot.categories),
            reviews: RwLock::new(snapshot.reviews),
            ..Self::default()
        }
    }

    /// Load `{ "products": [...], "categories": [...], "reviews": [...] }`.
    pub fn from_snapshot_json(raw: &str) -> StoreResult<Self> {
        let snapshot: ContentSnapshot =
            serde_json::from_str(raw).map_err(|e| StoreError::Decode(e.to_string()))?;
        tracing::debug!(
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            reviews = snapshot.reviews.len(),
            "loaded content snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is offline".to_string()));
        }
        Ok(())
    }

    /// Insert or replace a product (matched by id).
    pub fn upsert_product(&self, product: Product) -> StoreResult<()> {
        let mut products = self.products.write().map_err(poisoned)?;
        match products.iter_mut().find(|p| p.same_identity(&product)) {
            Some(existing) => *existing = product,
            None => products.push(product),
        }
        Ok(())
    }

    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders.read().ok()?.get(id).cloned()
    }

    pub fn orders(&self) -> Vec<Order> {
        match self.orders.read() {
            Ok(orders) => orders.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    pub fn contacts(&self) -> Vec<ContactMessage> {
        match self.contacts.read() {
            Ok(contacts) => contacts.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    pub fn asset(&self, asset_id: &str) -> Option<StoredAsset> {
        self.assets.read().ok()?.get(asset_id).cloned()
    }
}

impl ContentStore for InMemoryContentStore {
    fn products(&self) -> StoreResult<Vec<Product>> {
        self.ensure_online()?;
        Ok(self.products.read().map_err(poisoned)?.clone())
    }

    fn categories(&self) -> StoreResult<Vec<Category>> {
        self.ensure_online()?;
        let mut categories = self.categories.read().map_err(poisoned)?.clone();
        categories.sort_by(Category::display_cmp);
        Ok(categories)
    }

    fn reviews(&self) -> StoreResult<Vec<Review>> {
        self.ensure_online()?;
        Ok(self.reviews.read().map_err(poisoned)?.clone())
    }

    fn upload_asset(&self, file_name: &str, bytes: &[u8]) -> StoreResult<String> {
        self.ensure_online()?;
        let asset_id = format!("image-{}", Uuid::now_v7().simple());
        self.assets.write().map_err(poisoned)?.insert(
            asset_id.clone(),
            StoredAsset {
                file_name: file_name.to_string(),
                size: bytes.len(),
            },
        );
        Ok(asset_id)
    }

    fn create_order(&self, order: &Order) -> StoreResult<OrderId> {
        self.ensure_online()?;

        {
            let products = self.products.read().map_err(poisoned)?;
            if let Some(line) = order
                .lines()
                .iter()
                .find(|line| !products.iter().any(|p| p.id == line.product))
            {
                return Err(StoreError::NotFound(format!("product {}", line.product)));
            }
        }
        if self.asset(order.receipt_asset_id()).is_none() {
            return Err(StoreError::NotFound(format!(
                "asset {}",
                order.receipt_asset_id()
            )));
        }

        let id = order.id().clone();
        self.orders
            .write()
            .map_err(poisoned)?
            .insert(id.clone(), order.clone());
        Ok(id)
    }

    fn create_contact(&self, message: &ContactMessage) -> StoreResult<ContactId> {
        self.ensure_online()?;
        let id = message.id().clone();
        self.contacts
            .write()
            .map_err(poisoned)?
            .insert(id.clone(), message.clone());
        Ok(id)
    }
}
