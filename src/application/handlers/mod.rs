//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod risk;

pub use risk::{
    // Scoring
    ComputeOverlayCommand, ComputeOverlayHandler, ComputeOverlayResult,
    ComputeRiskCommand, ComputeRiskHandler, ComputeRiskResult,
    ComputeSweepCommand, ComputeSweepHandler, ComputeSweepResult,
    // Entities
    GetEntityHandler, GetEntityQuery, ListEntitiesHandler, ListEntitiesQuery,
    ReloadEntitiesHandler,
    // Shared
    EntityLookup, ResolvedScenario, RiskServiceError, Scenario, ScenarioResolver, SweepSettings,
};
