//! Shopping cart.
//!
//! The cart holds a snapshot of each product as it was when added (name, price,
//! image), so totals stay stable even if the catalog changes mid-session.

use serde::{Deserialize, Serialize};

use pearion_catalog::Product;
use pearion_core::{DomainError, DomainResult, ProductId};

/// One cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price in PKR.
    pub price: f64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Add `quantity` units, merging into an existing line for the same product.
    pub fn add(&mut self, product: &Product, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| DomainError::validation("quantity is too large"))?;
            return Ok(());
        }

        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            slug: product.slug_str().map(str::to_owned),
            image_url: product.primary_image().and_then(|i| i.url()).map(str::to_owned),
            quantity,
        });
        Ok(())
    }

    /// Remove a line; returns whether it was present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() != before
    }

    /// Set the quantity of a line. Quantities below 1 remove the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> DomainResult<()> {
        if quantity < 1 {
            return if self.remove(product_id) {
                Ok(())
            } else {
                Err(DomainError::not_found())
            };
        }

        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::validation("quantity is too large"))?;
        let item = self
            .items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .ok_or_else(DomainError::not_found)?;
        item.quantity = quantity;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of units across all lines.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a persisted cart; unreadable data yields an empty cart.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding unreadable saved cart");
            Self::default()
        })
    }
}
