//! Document trait implementation for the Order domain type.
//!
//! Orders are keyed by `orderid`, which the collection assigns as the greatest
//! existing id + 1 (1 for the first order). Every insert and update re-validates
//! the line items and recomputes `total_amount`, so the stored total always
//! equals Σ price × quantity.

use super::OrderError;
use crate::model::{next_order_id, Order, OrderId, OrderUpdate};
use doc_store::Document;

impl Document for Order {
    type Key = OrderId;
    type Update = OrderUpdate;
    type Error = OrderError;
    const COLLECTION: &'static str = "orders";

    fn key(&self) -> &OrderId {
        &self.order_id
    }

    /// Handles updates to the Order document.
    ///
    /// # Fields Updated
    /// - `delivery_address`
    /// - per line item `quantity`
    ///
    /// `total_amount` is always recomputed afterwards.
    fn apply(&mut self, update: OrderUpdate) -> Result<(), OrderError> {
        if !update.quantities.is_empty() && update.quantities.len() != self.items.len() {
            return Err(OrderError::LineItemMismatch {
                expected: self.items.len(),
                actual: update.quantities.len(),
            });
        }
        if let Some(address) = update.delivery_address {
            self.delivery_address = address;
        }
        for (item, quantity) in self.items.iter_mut().zip(update.quantities) {
            if let Some(quantity) = quantity {
                item.quantity = quantity;
            }
        }
        self.recompute_total();
        Ok(())
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::InvalidQuantity {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
            });
        }
        Ok(())
    }

    fn next_key(max: Option<&OrderId>) -> Option<OrderId> {
        next_order_id(max.copied())
    }

    fn set_key(&mut self, key: OrderId) {
        self.order_id = key;
    }
}
