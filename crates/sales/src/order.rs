//! Checkout with manual payment: the customer transfers the amount via EasyPaisa
//! or bank transfer and uploads the receipt, which is attached to the order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pearion_core::{DomainError, DomainResult, Entity, OrderId, ProductId, ValueObject};

use crate::cart::Cart;
use crate::config::CheckoutConfig;
use crate::validate::{email, required};

pub const DEFAULT_COUNTRY: &str = "Pakistan";

/// Manual payment channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "easypaisa")]
    EasyPaisa,
    #[serde(rename = "bank")]
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::EasyPaisa => "EasyPaisa",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
}

impl OrderStatus {
    fn rank(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Completed => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
        }
    }
}

/// Shipping form of the checkout's first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
}

impl Default for ShippingDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            city: String::new(),
            address: String::new(),
            postal_code: String::new(),
        }
    }
}

impl ValueObject for ShippingDetails {}

impl ShippingDetails {
    pub fn validate(&self) -> DomainResult<()> {
        required("first name", &self.first_name)?;
        required("last name", &self.last_name)?;
        email(&self.email)?;
        required("phone", &self.phone)?;
        required("country", &self.country)?;
        required("city", &self.city)?;
        required("address", &self.address)?;
        required("postal code", &self.postal_code)?;
        Ok(())
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn full_address(&self) -> String {
        format!("{}, {}", self.address.trim(), self.postal_code.trim())
    }
}

/// Payment receipt already uploaded to the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptUpload {
    pub file_name: String,
    pub asset_id: String,
}

impl ValueObject for ReceiptUpload {}

/// Ordered product with the price charged at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "_key")]
    pub key: String,
    pub product: ProductId,
    pub quantity: u32,
    pub price: f64,
}

/// Order document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    id: OrderId,
    #[serde(rename = "_createdAt")]
    created_at: DateTime<Utc>,
    customer_name: String,
    email: String,
    phone: String,
    country: String,
    city: String,
    address: String,
    products: Vec<OrderLine>,
    payment_method: PaymentMethod,
    /// Asset id of the uploaded receipt.
    transaction_screenshot: String,
    total_amount: f64,
    status: OrderStatus,
}

impl Order {
    /// Checks that need no uploaded receipt: a non-empty cart and complete
    /// shipping details.
    pub fn check_submission(details: &ShippingDetails, cart: &Cart) -> DomainResult<()> {
        if cart.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }
        details.validate()
    }

    /// Place an order for the cart contents.
    ///
    /// The total charged is the cart total plus the configured shipping fee.
    pub fn place(
        id: OrderId,
        details: &ShippingDetails,
        payment_method: PaymentMethod,
        receipt: Option<&ReceiptUpload>,
        cart: &Cart,
        config: &CheckoutConfig,
        placed_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::check_submission(details, cart)?;
        let receipt = receipt
            .filter(|r| !r.asset_id.trim().is_empty())
            .ok_or_else(|| DomainError::validation("Please upload payment receipt."))?;
        let total_amount = cart.total() + config.shipping_fee;
        if !total_amount.is_finite() {
            return Err(DomainError::validation("order total is out of range"));
        }

        let products = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                key: Uuid::now_v7().to_string(),
                product: item.product_id.clone(),
                quantity: item.quantity,
                price: item.price,
            })
            .collect();

        Ok(Self {
            id,
            created_at: placed_at,
            customer_name: details.customer_name(),
            email: details.email.trim().to_string(),
            phone: details.phone.trim().to_string(),
            country: details.country.trim().to_string(),
            city: details.city.trim().to_string(),
            address: details.full_address(),
            products,
            payment_method,
            transaction_screenshot: receipt.asset_id.clone(),
            total_amount,
            status: OrderStatus::Pending,
        })
    }

    /// Move the order one step forward in its lifecycle.
    pub fn advance(&mut self, next: OrderStatus) -> DomainResult<()> {
        if next == self.status {
            return Err(DomainError::conflict(format!(
                "order is already {}",
                self.status.as_str()
            )));
        }
        if next.rank() != self.status.rank() + 1 {
            return Err(DomainError::invariant(format!(
                "cannot move order from {} to {}",
                self.status.as_str(),
                next.as_str()
            )));
        }
        self.status = next;
        Ok(())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.products
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn receipt_asset_id(&self) -> &str {
        &self.transaction_screenshot
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
