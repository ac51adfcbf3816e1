//! Entity store adapters.
//!
//! - `CachedEntityStore` - read-through, process-wide cache implementing `EntityStore`
//! - `FileEntitySource` - JSON/YAML seed file source with validated decode
//! - `StaticEntitySource` - fixed in-process profiles

mod cached;
mod file_source;
mod static_source;

pub use cached::CachedEntityStore;
pub use file_source::FileEntitySource;
pub use static_source::StaticEntitySource;
