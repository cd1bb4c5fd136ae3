//! Error types for the product catalog.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Another product already uses this id.
    #[error("Product ID already exists: {0}")]
    AlreadyExists(String),

    /// The price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The product id is empty.
    #[error("Product ID must not be empty")]
    MissingId,

    /// An error occurred while talking to the product collection.
    #[error("Product store error: {0}")]
    StoreError(String),
}

impl ProductError {
    /// True when the collection itself failed rather than the request.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, ProductError::StoreError(_))
    }
}
