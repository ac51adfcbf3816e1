//! Timed access to the entity store.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entity::EntityProfile;
use crate::domain::foundation::{Audience, EntityId};
use crate::ports::EntityStore;

use super::errors::RiskServiceError;

/// Entity store wrapped with the per-request lookup timeout.
#[derive(Clone)]
pub struct EntityLookup {
    store: Arc<dyn EntityStore>,
    timeout: Duration,
}

impl EntityLookup {
    pub fn new(store: Arc<dyn EntityStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Finds one entity in the caller's partition.
    pub async fn find(
        &self,
        audience: Audience,
        id: &EntityId,
    ) -> Result<Option<EntityProfile>, RiskServiceError> {
        tokio::time::timeout(self.timeout, self.store.find_baseline(audience, id))
            .await
            .map_err(|_| {
                tracing::warn!(entity_id = %id, %audience, "Entity lookup timed out");
                RiskServiceError::LookupTimedOut(self.timeout)
            })?
            .map_err(|e| {
                tracing::error!(entity_id = %id, %audience, error = %e, "Entity lookup failed");
                RiskServiceError::Store(e)
            })
    }

    /// Lists every entity in the caller's partition.
    pub async fn list(&self, audience: Audience) -> Result<Vec<EntityProfile>, RiskServiceError> {
        tokio::time::timeout(self.timeout, self.store.list(audience))
            .await
            .map_err(|_| {
                tracing::warn!(%audience, "Entity listing timed out");
                RiskServiceError::LookupTimedOut(self.timeout)
            })?
            .map_err(|e| {
                tracing::error!(%audience, error = %e, "Entity listing failed");
                RiskServiceError::Store(e)
            })
    }
}
