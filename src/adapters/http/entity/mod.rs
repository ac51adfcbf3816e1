//! HTTP adapter for entity endpoints.
//!
//! - `GET /api/entities` - List profiles for the caller's audience
//! - `GET /api/entities/:id` - One profile, 404 when absent
//! - `POST /api/admin/entities/reload` - Reload the catalog

pub mod dto;
mod handlers;
mod routes;

pub use dto::EntityListResponse;
pub use routes::{entity_admin_routes, entity_routes};
