//! ComputeRiskHandler - single-point what-if score.

use crate::domain::foundation::EntityId;
use crate::domain::risk::{InputVector, RiskModel, RiskResult, SensitivityFactors};

use super::errors::RiskServiceError;
use super::scenario::{Scenario, ScenarioResolver};

/// Command to score one operating point.
#[derive(Debug, Clone, Default)]
pub struct ComputeRiskCommand {
    pub scenario: Scenario,
}

/// Result of a single-point score.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeRiskResult {
    /// Fully resolved inputs the score was computed from.
    pub inputs: InputVector,
    pub factors: Option<SensitivityFactors>,
    pub entity_id: Option<EntityId>,
    pub result: RiskResult,
}

/// Handler for single-point scoring.
pub struct ComputeRiskHandler {
    resolver: ScenarioResolver,
}

impl ComputeRiskHandler {
    pub fn new(resolver: ScenarioResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(
        &self,
        cmd: ComputeRiskCommand,
    ) -> Result<ComputeRiskResult, RiskServiceError> {
        let resolved = self.resolver.resolve(&cmd.scenario).await?;
        let result = RiskModel::score(&resolved.inputs, resolved.factors.as_ref());

        Ok(ComputeRiskResult {
            inputs: resolved.inputs,
            factors: resolved.factors,
            entity_id: resolved.entity_id,
            result,
        })
    }
}
