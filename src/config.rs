//! Process configuration.
//!
//! The service binds a fixed address; there is no environment or file based
//! configuration. `RUST_LOG` only controls log verbosity.

use std::net::{Ipv4Addr, SocketAddr};

/// Port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Capacity of the product actor's mailbox.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// How many requests may queue for the product actor before senders wait.
    pub mailbox_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}
