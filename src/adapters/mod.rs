//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `entity_store` - Entity sources and the read-through cache
//! - `http` - Axum REST API
//! - `validation` - Validated decode of external entity records

pub mod entity_store;
pub mod http;
pub mod validation;

pub use entity_store::{CachedEntityStore, FileEntitySource, StaticEntitySource};
pub use validation::{EntityRecordDecoder, RecordDecodeError};
