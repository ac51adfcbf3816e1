//! Request and response DTOs for the risk endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{
    ComputeOverlayCommand, ComputeOverlayResult, ComputeRiskCommand, ComputeRiskResult,
    ComputeSweepCommand, ComputeSweepResult, Scenario,
};
use crate::domain::foundation::{Audience, EntityId};
use crate::domain::risk::{InputField, InputVector, PartialInputs, RiskResult, SensitivityFactors};
use crate::domain::sweep::{CurveSummary, SweepCurve, SweepRange, SweepSeries};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /api/risk`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRequest {
    #[serde(default)]
    pub entity_id: Option<EntityId>,
    #[serde(default)]
    pub inputs: PartialInputs,
    #[serde(default)]
    pub factors: Option<SensitivityFactors>,
}

impl RiskRequest {
    fn scenario(self, audience: Audience) -> Scenario {
        Scenario {
            audience,
            entity_id: self.entity_id,
            overrides: self.inputs,
            factors: self.factors,
        }
    }

    pub fn into_command(self, audience: Audience) -> ComputeRiskCommand {
        ComputeRiskCommand {
            scenario: self.scenario(audience),
        }
    }
}

/// Request body for `POST /api/risk/sweep`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRequest {
    #[serde(default)]
    pub entity_id: Option<EntityId>,
    #[serde(default)]
    pub inputs: PartialInputs,
    #[serde(default)]
    pub factors: Option<SensitivityFactors>,
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
}

impl SweepRequest {
    fn scenario(&self, audience: Audience) -> Scenario {
        Scenario {
            audience,
            entity_id: self.entity_id.clone(),
            overrides: self.inputs,
            factors: self.factors,
        }
    }

    pub fn into_command(self, audience: Audience) -> ComputeSweepCommand {
        ComputeSweepCommand {
            scenario: self.scenario(audience),
            from: self.from,
            to: self.to,
            step: self.step,
        }
    }
}

/// One perturbation in an overlay request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PerturbationRequest {
    pub field: InputField,
    pub delta: f64,
}

/// Request body for `POST /api/risk/overlay`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRequest {
    #[serde(flatten)]
    pub sweep: SweepRequest,
    /// Omitted selects the default perturbation set; `[]` gives the baseline only.
    #[serde(default)]
    pub perturbations: Option<Vec<PerturbationRequest>>,
}

impl OverlayRequest {
    pub fn into_command(self, audience: Audience) -> ComputeOverlayCommand {
        ComputeOverlayCommand {
            scenario: self.sweep.scenario(audience),
            from: self.sweep.from,
            to: self.sweep.to,
            step: self.sweep.step,
            perturbations: self
                .perturbations
                .map(|list| list.into_iter().map(|p| (p.field, p.delta)).collect()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Response for `POST /api/risk`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
    pub inputs: InputVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<SensitivityFactors>,
    pub result: RiskResult,
}

impl From<ComputeRiskResult> for RiskResponse {
    fn from(r: ComputeRiskResult) -> Self {
        Self {
            entity_id: r.entity_id,
            inputs: r.inputs,
            factors: r.factors,
            result: r.result,
        }
    }
}

/// Response for `POST /api/risk/sweep`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
    pub inputs: InputVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<SensitivityFactors>,
    pub range: SweepRange,
    pub points: SweepCurve,
    pub summary: Option<CurveSummary>,
}

impl From<ComputeSweepResult> for SweepResponse {
    fn from(r: ComputeSweepResult) -> Self {
        Self {
            entity_id: r.entity_id,
            inputs: r.inputs,
            factors: r.factors,
            range: r.range,
            points: r.points,
            summary: r.summary,
        }
    }
}

/// Response for `POST /api/risk/overlay`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
    pub inputs: InputVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<SensitivityFactors>,
    pub range: SweepRange,
    pub series: Vec<SweepSeries>,
}

impl From<ComputeOverlayResult> for OverlayResponse {
    fn from(r: ComputeOverlayResult) -> Self {
        Self {
            entity_id: r.entity_id,
            inputs: r.inputs,
            factors: r.factors,
            range: r.range,
            series: r.series,
        }
    }
}
