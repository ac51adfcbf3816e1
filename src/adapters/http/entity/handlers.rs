//! HTTP handlers for entity endpoints.

use axum::extract::{Json, Path, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CallerAudience;
use crate::adapters::http::state::AppState;
use crate::application::{GetEntityQuery, ListEntitiesQuery};
use crate::domain::entity::EntityProfile;
use crate::domain::foundation::EntityId;
use crate::ports::CatalogSummary;

use super::dto::EntityListResponse;

/// GET /api/entities - List profiles visible to the caller
pub async fn list_entities(
    State(state): State<AppState>,
    CallerAudience(audience): CallerAudience,
) -> Result<Json<EntityListResponse>, ApiError> {
    let handler = state.list_entities_handler();
    let entities = handler.handle(ListEntitiesQuery { audience }).await?;

    Ok(Json(EntityListResponse { audience, entities }))
}

/// GET /api/entities/:id - One profile from the caller's partition
pub async fn get_entity(
    State(state): State<AppState>,
    CallerAudience(audience): CallerAudience,
    Path(id): Path<String>,
) -> Result<Json<EntityProfile>, ApiError> {
    let id = EntityId::new(id)?;
    let handler = state.get_entity_handler();
    let profile = handler.handle(GetEntityQuery { audience, id }).await?;

    Ok(Json(profile))
}

/// POST /api/admin/entities/reload - Re-read the entity source
pub async fn reload_entities(
    State(state): State<AppState>,
) -> Result<Json<CatalogSummary>, ApiError> {
    let handler = state.reload_entities_handler();
    let summary = handler.handle().await?;

    Ok(Json(summary))
}
