//! Entity queries and the catalog reload command.

use std::sync::Arc;

use crate::domain::entity::EntityProfile;
use crate::domain::foundation::{Audience, EntityId};
use crate::ports::{CatalogSummary, EntityReloader};

use super::errors::RiskServiceError;
use super::lookup::EntityLookup;

/// Query for every profile visible to an audience.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListEntitiesQuery {
    pub audience: Audience,
}

/// Handler listing profiles, ordered by id.
pub struct ListEntitiesHandler {
    lookup: EntityLookup,
}

impl ListEntitiesHandler {
    pub fn new(lookup: EntityLookup) -> Self {
        Self { lookup }
    }

    pub async fn handle(
        &self,
        query: ListEntitiesQuery,
    ) -> Result<Vec<EntityProfile>, RiskServiceError> {
        self.lookup.list(query.audience).await
    }
}

/// Query for one profile.
#[derive(Debug, Clone)]
pub struct GetEntityQuery {
    pub audience: Audience,
    pub id: EntityId,
}

/// Handler fetching a single profile.
///
/// Unlike scenario resolution, a miss here is an error.
pub struct GetEntityHandler {
    lookup: EntityLookup,
}

impl GetEntityHandler {
    pub fn new(lookup: EntityLookup) -> Self {
        Self { lookup }
    }

    pub async fn handle(&self, query: GetEntityQuery) -> Result<EntityProfile, RiskServiceError> {
        self.lookup
            .find(query.audience, &query.id)
            .await?
            .ok_or(RiskServiceError::EntityNotFound(query.id))
    }
}

/// Handler swapping in a freshly loaded catalog.
pub struct ReloadEntitiesHandler {
    reloader: Arc<dyn EntityReloader>,
}

impl ReloadEntitiesHandler {
    pub fn new(reloader: Arc<dyn EntityReloader>) -> Self {
        Self { reloader }
    }

    pub async fn handle(&self) -> Result<CatalogSummary, RiskServiceError> {
        let summary = self.reloader.reload().await.map_err(|e| {
            tracing::error!(error = %e, "Entity catalog reload failed");
            RiskServiceError::Store(e)
        })?;
        tracing::info!(
            source = %summary.source,
            identified = summary.identified,
            deidentified = summary.deidentified,
            "Entity catalog reloaded"
        );
        Ok(summary)
    }
}
