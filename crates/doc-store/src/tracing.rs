//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole process.
//!
//! ## What Gets Traced
//!
//! - **Collection lifecycle**: snapshot load, startup and shutdown with the final size
//! - **Requests**: every find/insert/update/delete at `debug`, with keys and payloads
//! - **Mutations**: `Inserted`, `Updated`, `Deleted` at `info`
//! - **Rejections**: duplicate keys, failed validation and snapshot write failures at `warn`
//!
//! ## Usage
//!
//! ```bash
//! # Only problems (default)
//! eshop
//!
//! # Every mutation
//! RUST_LOG=info eshop
//!
//! # Full payloads
//! RUST_LOG=debug eshop
//! ```
//!
//! Output goes to stderr so it never mixes with tables printed on stdout:
//!
//! ```text
//! INFO Inserted collection="products" key=P1 size=1
//! INFO place_order: Inserted collection="orders" key=1 size=1
//! WARN Duplicate key collection="products" key=P1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
