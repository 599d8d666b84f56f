//! Pure data structures (DTOs) managed by the catalog actor.

pub mod product;

pub use product::*;
