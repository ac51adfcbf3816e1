//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Entity Ports
//!
//! - `EntityStore` - Audience-partitioned baseline lookup used by handlers
//! - `EntitySource` - Raw profile supplier behind a store (seed file, fixtures)
//! - `EntityReloader` - Explicit invalidation of a cached store

mod entity_store;

pub use entity_store::{
    CatalogSummary, EntityReloader, EntitySource, EntityStore, EntityStoreError,
};
