//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! The framework uses a compact format that hides the crate/module prefix (`with_target(false)`).
//! Every actor log line carries an `entity_type` field instead, so the prefix adds nothing.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` with the seeded size, `Shutdown` with the final size
//! - **Entity Operations**: List, Get, Create, Replace, Update, Delete, Clear
//! - **Misses and Rejections**: `Not found` and hook failures at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a create followed by a delete looks like:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=2
//! INFO Created entity_type="Product" id=3f0c... size=3
//! INFO Deleted entity_type="Product" id=1 size=2
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at process start.
///
/// The filter comes from `RUST_LOG`; when it is unset, `info` is used.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
