//! Error types for orders.

use crate::model::OrderId;
use crate::product_store::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// An order needs at least one line item.
    #[error("Order has no products")]
    EmptyOrder,

    /// The product selected for a line item does not exist.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Line item quantities must be positive.
    #[error("Invalid quantity for {product_id}: {quantity}")]
    InvalidQuantity { product_id: String, quantity: u32 },

    /// The update carried a different number of quantities than the order has line items.
    #[error("Expected {expected} quantities, got {actual}")]
    LineItemMismatch { expected: usize, actual: usize },

    /// Every order id has been handed out.
    #[error("No order ids left")]
    IdsExhausted,

    /// Looking up a product for a line item failed.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while talking to the order collection.
    #[error("Order store error: {0}")]
    StoreError(String),
}

impl OrderError {
    /// True when a collection failed rather than the request.
    pub fn is_store_failure(&self) -> bool {
        match self {
            OrderError::StoreError(_) => true,
            OrderError::Product(e) => e.is_store_failure(),
            _ => false,
        }
    }
}
