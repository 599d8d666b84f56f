//! # Product Catalog Server
//!
//! Starts the seeded [`CatalogSystem`], serves the HTTP API on the configured address,
//! and shuts both down on Ctrl-C.

use actor_framework::tracing::setup_tracing;
use product_catalog::api;
use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::CatalogSystem;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = CatalogConfig::default();
    let system = CatalogSystem::new(&config);
    let app = api::router(system.product_client.clone());

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Server is running");

    // `serve` owns the router; it is dropped, with its client clones, once serving ends.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
