//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; [`router`]
//! mounts them all on one shared [`AppState`].

pub mod entity;
pub mod error;
pub mod health;
pub mod layers;
pub mod middleware;
pub mod risk;
pub mod state;

use axum::{routing::get, Router};

pub use error::{ApiError, ErrorResponse};
pub use middleware::{AccessPolicy, CallerAudience};
pub use state::AppState;

/// Create the complete application router.
///
/// # Routes
/// - `GET /health`
/// - `/api/entities` - see [`entity::entity_routes`]
/// - `/api/admin/entities` - see [`entity::entity_admin_routes`]
/// - `/api/risk` - see [`risk::risk_routes`]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/entities", entity::entity_routes())
        .nest("/api/admin/entities", entity::entity_admin_routes())
        .nest("/api/risk", risk::risk_routes())
        .with_state(state)
}
