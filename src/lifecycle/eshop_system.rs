use crate::clients::{OrderClient, ProductClient};
use crate::config::StoreConfig;
use crate::{order_store, product_store};
use doc_store::StoreError;
use tracing::{error, info};

/// The running store: both collection tasks plus their clients.
///
/// # Example
///
/// ```ignore
/// let system = EshopSystem::open(&config.store)?;
///
/// system.product_client.add_product(Product::new("P1", "Mug", "M", 9.99)).await?;
/// let orders = system.order_client.list_orders().await?;
///
/// system.shutdown().await?;
/// ```
pub struct EshopSystem {
    /// Client for the `products` collection
    pub product_client: ProductClient,

    /// Client for the `orders` collection
    pub order_client: OrderClient,

    /// Task handles for both collections (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl EshopSystem {
    /// Starts both collections as configured.
    ///
    /// With a `data_dir` the collections load their snapshots from it and write
    /// back after every change; without one they live in memory only.
    ///
    /// # Errors
    ///
    /// Fails when an existing snapshot cannot be read or parsed.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let buffer = config.buffer_size;
        let ((product_actor, product_client), open_orders) = match &config.data_dir {
            Some(dir) => {
                info!(data_dir = %dir.display(), "Opening persistent store");
                let products = product_store::open(buffer, dir)?;
                let orders = order_store::open(buffer, dir, products.1.clone())?;
                (products, orders)
            }
            None => {
                info!("Opening in-memory store");
                let products = product_store::in_memory(buffer);
                let orders = order_store::in_memory(buffer, products.1.clone());
                (products, orders)
            }
        };
        let (order_actor, order_client) = open_orders;

        let product_handle = tokio::spawn(product_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        Ok(Self {
            product_client,
            order_client,
            handles: vec![product_handle, order_handle],
        })
    }

    /// Starts both collections without persistence.
    pub fn in_memory(buffer_size: usize) -> Self {
        let (product_actor, product_client) = product_store::in_memory(buffer_size);
        let (order_actor, order_client) =
            order_store::in_memory(buffer_size, product_client.clone());

        let product_handle = tokio::spawn(product_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            product_client,
            order_client,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Gracefully shuts down both collections.
    ///
    /// Drops the clients, which closes the channels, then waits for each task.
    /// Clones handed out earlier (e.g. to a console) must be dropped first or
    /// this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both collections shut down cleanly
    /// - `Err(String)` if a collection task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection task failed: {:?}", e);
                return Err(format!("Collection task failed: {:?}", e));
            }
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}
