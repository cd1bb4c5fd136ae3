//! Type-safe wrappers around [`CollectionClient`](doc_store::CollectionClient).

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
