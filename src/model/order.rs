/// A customer order.
///
/// # Document Store
/// This struct implements the [`Document`](doc_store::Document) trait, keyed by
/// `orderid`. The order collection hands out ids itself (greatest id + 1), so an
/// order is built with id `0` and stamped when it is stored.
///
/// The serialized field names (`orderid`, `products`, `total_amount`,
/// `delivery_address`) are the document format on disk.
use crate::model::Product;
use serde::{Deserialize, Serialize};

/// Order number.
pub type OrderId = u32;

/// A snapshot of a product's fields plus the ordered quantity.
///
/// Later edits or deletion of the product do not touch line items already
/// embedded in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub size: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.product_id.clone(),
            product_name: product.product_name.clone(),
            size: product.size.clone(),
            price: product.price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderid")]
    pub order_id: OrderId,
    #[serde(rename = "products")]
    pub items: Vec<LineItem>,
    pub total_amount: f64,
    pub delivery_address: String,
}

impl Order {
    /// Creates an unsaved order with its total computed from `items`.
    pub fn new(items: Vec<LineItem>, delivery_address: impl Into<String>) -> Self {
        let total_amount = order_total(&items);
        Self {
            order_id: 0,
            items,
            total_amount,
            delivery_address: delivery_address.into(),
        }
    }

    /// Recomputes the denormalized total from the line items.
    pub fn recompute_total(&mut self) {
        self.total_amount = order_total(&self.items);
    }
}

/// Σ price × quantity over `items`.
pub fn order_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::subtotal).sum()
}

/// The id the next order receives when `max` is the greatest existing id.
///
/// `None` once `max` is the largest representable id.
pub fn next_order_id(max: Option<OrderId>) -> Option<OrderId> {
    match max {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub items: Vec<LineItem>,
    pub delivery_address: String,
}

/// Patch for an existing order.
///
/// `quantities` holds one entry per line item, in order; `None` keeps the
/// current quantity. An empty vector leaves every line item alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderUpdate {
    pub delivery_address: Option<String>,
    pub quantities: Vec<Option<u32>>,
}
