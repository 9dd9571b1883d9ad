use tracing::{error, info, instrument};

use crate::actors::InventoryService;
use crate::clients::InventoryClient;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::store::InventoryStore;

/// Starts the inventory actor, hands out its client, and shuts it down.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the service over the standard seeded catalog.
    #[instrument(name = "inventory_system", skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(config.channel_capacity, InventoryStore::seeded())
    }

    /// Starts the service over a caller-supplied store.
    pub fn with_store(channel_capacity: usize, store: InventoryStore) -> Self {
        info!(channel_capacity, "Starting inventory system");

        let (service, inventory_client) = InventoryService::new(channel_capacity, store);
        let handle = tokio::spawn(service.run());

        info!("Inventory system started successfully");

        Self {
            inventory_client,
            handle,
        }
    }

    /// Stops the service and waits for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down inventory system");

        // The service may already be gone; joining the task reports why.
        if let Err(e) = self.inventory_client.shutdown().await {
            error!(error = %e, "Shutdown message not delivered");
        }
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(AppError::Shutdown(e.to_string()));
        }

        info!("Inventory system shutdown complete");
        Ok(())
    }
}
