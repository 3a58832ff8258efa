//! Sales domain: cart, checkout with manual payment receipts, and contact messages.
//!
//! This crate contains business rules only, implemented as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod cart;
pub mod config;
pub mod contact;
pub mod order;
mod validate;

pub use cart::{Cart, CartItem};
pub use config::{CheckoutConfig, DEFAULT_SHIPPING_FEE};
pub use contact::{ContactForm, ContactMessage, ContactSubject};
pub use order::{
    DEFAULT_COUNTRY, Order, OrderLine, OrderStatus, PaymentMethod, ReceiptUpload, ShippingDetails,
};
