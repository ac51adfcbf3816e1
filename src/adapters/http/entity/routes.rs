//! Axum router configuration for entity endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_entity, list_entities, reload_entities};
use crate::adapters::http::state::AppState;

/// Create the entity API router.
///
/// # Routes
/// - `GET /` - List profiles for the caller's audience
/// - `GET /:id` - Fetch one profile
pub fn entity_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entities))
        .route("/:id", get(get_entity))
}

/// Create the entity admin router.
///
/// # Routes
/// - `POST /reload` - Reload the cached catalog from its source
pub fn entity_admin_routes() -> Router<AppState> {
    Router::new().route("/reload", post(reload_entities))
}
