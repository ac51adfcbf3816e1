//! Shared application state for the HTTP adapter.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;

use crate::application::{
    ComputeOverlayHandler, ComputeRiskHandler, ComputeSweepHandler, EntityLookup,
    GetEntityHandler, ListEntitiesHandler, ReloadEntitiesHandler, ScenarioResolver, SweepSettings,
};
use crate::ports::{EntityReloader, EntityStore};

use super::middleware::AccessPolicy;

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub entity_store: Arc<dyn EntityStore>,
    pub entity_reloader: Arc<dyn EntityReloader>,
    pub lookup_timeout: Duration,
    pub sweep: SweepSettings,
    pub access: AccessPolicy,
}

impl AppState {
    pub fn new(
        entity_store: Arc<dyn EntityStore>,
        entity_reloader: Arc<dyn EntityReloader>,
        lookup_timeout: Duration,
        sweep: SweepSettings,
        access: AccessPolicy,
    ) -> Self {
        Self {
            entity_store,
            entity_reloader,
            lookup_timeout,
            sweep,
            access,
        }
    }

    fn lookup(&self) -> EntityLookup {
        EntityLookup::new(self.entity_store.clone(), self.lookup_timeout)
    }

    fn resolver(&self) -> ScenarioResolver {
        ScenarioResolver::new(self.lookup())
    }

    /// Create handlers on demand from the shared state.
    pub fn compute_risk_handler(&self) -> ComputeRiskHandler {
        ComputeRiskHandler::new(self.resolver())
    }

    pub fn compute_sweep_handler(&self) -> ComputeSweepHandler {
        ComputeSweepHandler::new(self.resolver(), self.sweep)
    }

    pub fn compute_overlay_handler(&self) -> ComputeOverlayHandler {
        ComputeOverlayHandler::new(self.resolver(), self.sweep)
    }

    pub fn list_entities_handler(&self) -> ListEntitiesHandler {
        ListEntitiesHandler::new(self.lookup())
    }

    pub fn get_entity_handler(&self) -> GetEntityHandler {
        GetEntityHandler::new(self.lookup())
    }

    pub fn reload_entities_handler(&self) -> ReloadEntitiesHandler {
        ReloadEntitiesHandler::new(self.entity_reloader.clone())
    }
}

impl FromRef<AppState> for AccessPolicy {
    fn from_ref(state: &AppState) -> Self {
        state.access
    }
}
