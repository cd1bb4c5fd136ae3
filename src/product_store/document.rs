//! Document trait implementation for the Product domain type.
//!
//! Products are keyed by the operator-supplied `product_id`. The collection
//! never generates product ids, so the key-generation hooks keep their defaults.

use super::ProductError;
use crate::model::{Product, ProductUpdate};
use doc_store::Document;

impl Document for Product {
    type Key = String;
    type Update = ProductUpdate;
    type Error = ProductError;
    const COLLECTION: &'static str = "products";

    fn key(&self) -> &String {
        &self.product_id
    }

    /// Handles updates to the Product document.
    ///
    /// # Fields Updated
    /// - `product_id`: changing it re-keys the document (the collection rejects collisions)
    /// - `product_name`, `size`, `price`
    fn apply(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        if let Some(product_id) = update.product_id {
            self.product_id = product_id;
        }
        if let Some(product_name) = update.product_name {
            self.product_name = product_name;
        }
        if let Some(size) = update.size {
            self.size = size;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.product_id.trim().is_empty() {
            return Err(ProductError::MissingId);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut product = Product::new("P1", "Mug", "M", 9.99);
        let update = ProductUpdate {
            size: Some("L".into()),
            ..Default::default()
        };
        product.apply(update).unwrap();
        assert_eq!(product, Product::new("P1", "Mug", "L", 9.99));
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        assert!(Product::new("P1", "Mug", "M", 0.0).validate().is_ok());
        assert_eq!(
            Product::new("P1", "Mug", "M", -1.0).validate(),
            Err(ProductError::InvalidPrice(-1.0))
        );
        assert!(Product::new("P1", "Mug", "M", f64::NAN).validate().is_err());
        assert_eq!(
            Product::new(" ", "Mug", "M", 1.0).validate(),
            Err(ProductError::MissingId)
        );
    }
}
