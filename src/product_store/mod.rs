//! # Product Store
//!
//! The `products` collection: [`Document`](doc_store::Document) implementation for
//! [`Product`], its [`ProductError`] type, and factory functions that build the
//! collection task together with a [`ProductClient`].
//!
//! ## Usage
//!
//! ```rust
//! use eshop::model::Product;
//! use eshop::product_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_store::in_memory(32);
//!     tokio::spawn(actor.run());
//!
//!     let mug = client.add_product(Product::new("P1", "Mug", "M", 9.99)).await?;
//!     assert_eq!(mug.product_id, "P1");
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use doc_store::{CollectionActor, StoreError};
use std::path::Path;

/// Creates an in-memory product collection and its client.
pub fn in_memory(buffer_size: usize) -> (CollectionActor<Product>, ProductClient) {
    let (actor, inner) = CollectionActor::in_memory(buffer_size);
    (actor, ProductClient::new(inner))
}

/// Opens the product collection persisted under `dir`.
pub fn open(
    buffer_size: usize,
    dir: &Path,
) -> Result<(CollectionActor<Product>, ProductClient), StoreError> {
    let (actor, inner) = CollectionActor::open(buffer_size, dir)?;
    Ok((actor, ProductClient::new(inner)))
}
