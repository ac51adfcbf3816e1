//! Risk command and query handlers.
//!
//! Each handler resolves a scenario against the entity store, then calls the
//! synchronous core. The core never fails; every error here comes from the
//! request boundary or the entity lookup.

mod compute_overlay;
mod compute_risk;
mod compute_sweep;
mod entities;
mod errors;
mod lookup;
mod scenario;
mod sweep_settings;

pub use compute_overlay::{ComputeOverlayCommand, ComputeOverlayHandler, ComputeOverlayResult};
pub use compute_risk::{ComputeRiskCommand, ComputeRiskHandler, ComputeRiskResult};
pub use compute_sweep::{ComputeSweepCommand, ComputeSweepHandler, ComputeSweepResult};
pub use entities::{
    GetEntityHandler, GetEntityQuery, ListEntitiesHandler, ListEntitiesQuery,
    ReloadEntitiesHandler,
};
pub use errors::RiskServiceError;
pub use lookup::EntityLookup;
pub use scenario::{ResolvedScenario, Scenario, ScenarioResolver};
pub use sweep_settings::SweepSettings;
