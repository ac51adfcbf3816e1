//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands score scenarios; queries read the entity catalog.

pub mod handlers;

pub use handlers::{
    ComputeOverlayCommand, ComputeOverlayHandler, ComputeOverlayResult, ComputeRiskCommand,
    ComputeRiskHandler, ComputeRiskResult, ComputeSweepCommand, ComputeSweepHandler,
    ComputeSweepResult, EntityLookup, GetEntityHandler, GetEntityQuery, ListEntitiesHandler,
    ListEntitiesQuery, ReloadEntitiesHandler, ResolvedScenario, RiskServiceError, Scenario,
    ScenarioResolver, SweepSettings,
};
