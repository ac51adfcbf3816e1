//! ComputeSweepHandler - risk curve across coil misalignment.

use crate::domain::foundation::EntityId;
use crate::domain::risk::{InputVector, SensitivityFactors};
use crate::domain::sweep::{CurveSummary, SweepCurve, SweepEngine, SweepRange};

use super::errors::RiskServiceError;
use super::scenario::{Scenario, ScenarioResolver};
use super::sweep_settings::SweepSettings;

/// Command to sweep coil offset from a resolved operating point.
#[derive(Debug, Clone, Default)]
pub struct ComputeSweepCommand {
    pub scenario: Scenario,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub step: Option<f64>,
}

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeSweepResult {
    /// Inputs every point shares apart from the coil offset.
    pub inputs: InputVector,
    pub factors: Option<SensitivityFactors>,
    pub entity_id: Option<EntityId>,
    /// Normalized range actually walked.
    pub range: SweepRange,
    pub points: SweepCurve,
    pub summary: Option<CurveSummary>,
}

/// Handler for coil-offset sweeps.
pub struct ComputeSweepHandler {
    resolver: ScenarioResolver,
    settings: SweepSettings,
}

impl ComputeSweepHandler {
    pub fn new(resolver: ScenarioResolver, settings: SweepSettings) -> Self {
        Self { resolver, settings }
    }

    pub async fn handle(
        &self,
        cmd: ComputeSweepCommand,
    ) -> Result<ComputeSweepResult, RiskServiceError> {
        let range = self.settings.range(cmd.from, cmd.to, cmd.step, 1)?;
        let resolved = self.resolver.resolve(&cmd.scenario).await?;

        let points = SweepEngine::sweep(&resolved.inputs, resolved.factors.as_ref(), &range);
        let summary = points.summary();

        Ok(ComputeSweepResult {
            inputs: resolved.inputs,
            factors: resolved.factors,
            entity_id: resolved.entity_id,
            range,
            points,
            summary,
        })
    }
}
