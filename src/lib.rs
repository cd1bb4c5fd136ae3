//! # eshop
//!
//! A console order and product manager for a small shop. One operator keeps a
//! product catalog and records customer orders built from catalog items; order
//! totals are derived from the line items.
//!
//! ## Core Components
//!
//! - **[model]**: [`Product`](model::Product), [`Order`](model::Order) and
//!   [`LineItem`](model::LineItem) plus their create/update payloads.
//! - **[product_store] / [order_store]**: the `products` and `orders`
//!   collections. Each implements [`doc_store::Document`] for its type and owns
//!   a domain error enum.
//! - **[clients]**: [`ProductClient`](clients::ProductClient) and
//!   [`OrderClient`](clients::OrderClient), the typed operations the rest of the
//!   app calls.
//! - **[lifecycle]**: [`EshopSystem`](lifecycle::EshopSystem) starts, wires and
//!   shuts down both collections.
//! - **[console]**: the interactive menu.
//! - **[config]**: TOML file plus command-line overrides.
//!
//! ## Architecture Notes
//!
//! ### Storage
//! Both collections run on [`doc_store`]: one Tokio task per collection, talked
//! to through a cloneable client. With a data directory each collection is
//! written to `<data_dir>/<collection>.json` after every change.
//!
//! ### Order ids
//! New orders get the greatest existing id + 1 (1 for the first order). The id
//! is assigned inside the order collection's task, so it cannot race with
//! another insert.
//!
//! ### Line items are snapshots
//! An order copies the product's id, name, size and price when the item is
//! selected. Later catalog edits or deletions do not change existing orders.
//!
//! ### Errors
//! Each layer has its own `thiserror` enum. The console prints expected
//! failures (not found, duplicate id, empty order, bad numbers) and keeps
//! going; store failures end the session and surface in `main` via `anyhow`.
//!
//! ## Testing
//!
//! See [`doc_store::mock`] for testing clients without a running collection,
//! and `tests/console_test.rs` for scripted end-to-end sessions.

pub mod clients;
pub mod config;
pub mod console;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod product_store;
