//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the what-if risk domain.

mod audience;
mod errors;
mod ids;

pub use audience::Audience;
pub use errors::ValidationError;
pub use ids::EntityId;
