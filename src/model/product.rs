/// A product in the catalog.
///
/// # Document Store
/// This struct implements the [`Document`](doc_store::Document) trait, keyed by
/// `product_id`, so it can live in a [`CollectionActor`](doc_store::CollectionActor).
///
/// See [`impl Document for Product`](#impl-Document-for-Product) for details on:
/// - Update parameters ([`ProductUpdate`])
/// - Price validation
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub size: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `product_id` - Identifier chosen by the operator
    /// * `product_name` - Display name
    /// * `size` - Free-form size label (e.g. "M", "500ml")
    /// * `price` - Unit price, must be non-negative
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        size: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            size: size.into(),
            price,
        }
    }
}

/// Field-level patch for a product. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.product_id.is_none()
            && self.product_name.is_none()
            && self.size.is_none()
            && self.price.is_none()
    }
}
