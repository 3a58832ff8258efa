//! `pearion-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and sales
//! crates (no infrastructure concerns).

pub mod config;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ContactId, OrderId, ProductId, ReviewId};
pub use value_object::ValueObject;
