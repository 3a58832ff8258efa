//! Infrastructure error model.

use thiserror::Error;

use pearion_core::DomainError;

/// Result of a content-store call.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure talking to the content store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (network, outage, poisoned local state).
    #[error("content store unavailable: {0}")]
    Unavailable(String),

    /// A document or snapshot could not be decoded.
    #[error("failed to decode content: {0}")]
    Decode(String),

    /// A write referenced a document the store does not have.
    #[error("document not found: {0}")]
    NotFound(String),
}

/// Failure of a storefront operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl StorefrontError {
    /// Whether the surface should offer a "try again" action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorefrontError::Store(StoreError::Unavailable(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorefrontError::Domain(DomainError::NotFound))
    }
}
