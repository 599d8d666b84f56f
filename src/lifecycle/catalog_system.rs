use crate::clients::ProductClient;
use crate::config::CatalogConfig;
use crate::product_actor;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, info};

/// Raised when the product actor task did not end cleanly.
#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// The runtime orchestrator for the catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product actor
/// - **Seeding**: The actor starts with [`product_actor::seed_products`]
///
/// Every instance owns an independent store, so tests can build one per case.
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the seeded product actor. Must be called inside a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let (product_actor, product_client) = product_actor::new(config.mailbox_capacity);

        // Product has no dependencies (Context = ())
        let handle = tokio::spawn(product_actor.run(()));

        Self {
            product_client: ProductClient::new(product_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's client and waits for the actor to drain and exit. Every other
    /// clone of the client (e.g. the one held by the HTTP router) must be dropped first,
    /// otherwise this waits for it.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down catalog...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(ShutdownError(e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
