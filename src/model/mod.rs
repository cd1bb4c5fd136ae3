//! Pure data structures stored as documents.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
