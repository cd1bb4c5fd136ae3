//! # Order Store
//!
//! The `orders` collection: [`Document`](doc_store::Document) implementation for
//! [`Order`], its [`OrderError`] type, and factory functions that build the
//! collection task together with an [`OrderClient`].
//!
//! ## Dependencies
//!
//! Placing an order snapshots products from the catalog, so the order client is
//! wired with a [`ProductClient`] when it is created.

pub mod document;
pub mod error;

pub use error::*;

use crate::clients::{OrderClient, ProductClient};
use crate::model::Order;
use doc_store::{CollectionActor, StoreError};
use std::path::Path;

/// Creates an in-memory order collection and its client.
pub fn in_memory(
    buffer_size: usize,
    products: ProductClient,
) -> (CollectionActor<Order>, OrderClient) {
    let (actor, inner) = CollectionActor::in_memory(buffer_size);
    (actor, OrderClient::new(inner, products))
}

/// Opens the order collection persisted under `dir`.
pub fn open(
    buffer_size: usize,
    dir: &Path,
    products: ProductClient,
) -> Result<(CollectionActor<Order>, OrderClient), StoreError> {
    let (actor, inner) = CollectionActor::open(buffer_size, dir)?;
    Ok((actor, OrderClient::new(inner, products)))
}
