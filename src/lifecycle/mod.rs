//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the catalog: starting the product actor,
//! handing out its client, and shutting it down cleanly.
//!
//! ## The CatalogSystem Pattern
//!
//! ```rust,ignore
//! let system = CatalogSystem::new(&CatalogConfig::default());
//! let app = api::router(system.product_client.clone());
//! // ... serve `app` ...
//! drop(app);
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - The router holds clones; once the server has stopped and the
//!    router is dropped, only the system's own client remains.
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` after the last sender is gone.
//! 3. **Actor logs its final state** - `Shutdown` with the remaining record count.
//! 4. **Await completion** - [`CatalogSystem::shutdown`] waits for the actor task.
//!
//! ## Observability
//!
//! Logging is initialized once by [`actor_framework::tracing::setup_tracing`], see that
//! module for filters and output format.

pub mod catalog_system;

pub use catalog_system::*;
