//! # System Lifecycle
//!
//! Starts the two collection tasks, wires the clients together and shuts
//! everything down again.
//!
//! ## Wiring
//!
//! The order client needs the product client to snapshot line items, so the
//! product collection is built first and its client handed to the order store:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_store::open(buffer, dir)?;
//! let (order_actor, order_client) = order_store::open(buffer, dir, product_client.clone())?;
//!
//! let handles = vec![
//!     tokio::spawn(product_actor.run()),
//!     tokio::spawn(order_actor.run()),
//! ];
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of both channels
//! 2. **Collections detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for both tasks to finish
//!
//! The order client holds a clone of the product client, so the product
//! collection only stops once the order client is gone too. The dependency
//! graph is acyclic, so dropping everything is enough.

pub mod eshop_system;

pub use eshop_system::*;
