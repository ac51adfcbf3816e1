//! Risk Model - normalized weighted score for a single operating point.

use serde::{Deserialize, Serialize};

use super::inputs::InputVector;
use super::weights::{RiskWeights, SensitivityFactors};

/// Lower edge (inclusive) of the AMBER band.
pub const AMBER_THRESHOLD: f64 = 0.35;

/// Lower edge (inclusive) of the RED band.
pub const RED_THRESHOLD: f64 = 0.65;

/// Nominal charge rate; no rate risk at or below it.
const NOMINAL_RATE_C: f64 = 1.0;

/// Normal body temperature; no thermal risk at or below it.
const BODY_TEMP_C: f64 = 37.0;

/// Span from body temperature to the top of the valid range (60°C).
const TEMP_SPAN_C: f64 = 23.0;

/// Load at which load risk saturates.
const MAX_LOAD_MA: f64 = 500.0;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Qualitative risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskStatus {
    Green,
    Amber,
    Red,
}

impl RiskStatus {
    /// Classifies a (rounded) score. Each band includes its lower edge.
    pub fn from_score(score: f64) -> Self {
        if score >= RED_THRESHOLD {
            RiskStatus::Red
        } else if score >= AMBER_THRESHOLD {
            RiskStatus::Amber
        } else {
            RiskStatus::Green
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::Green => "GREEN",
            RiskStatus::Amber => "AMBER",
            RiskStatus::Red => "RED",
        }
    }
}

/// Telemetry derived alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Coupling efficiency, rounded to 2 decimals.
    pub efficiency: f64,
}

/// Outcome of a single risk evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub status: RiskStatus,
    pub score: f64,
    pub telemetry: Telemetry,
    pub rationale: Vec<String>,
}

/// Unweighted sub-risks of an operating point.
///
/// `rate` has no upper clamp; it only stays within `[0, 1]` because the
/// request boundary caps `chargeRateC` at 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubRisks {
    pub efficiency: f64,
    pub misalign: f64,
    pub rate: f64,
    pub temp: f64,
    pub load: f64,
}

impl SubRisks {
    pub fn of(inputs: &InputVector) -> Self {
        let theta = inputs.coil_offset_deg.to_radians();
        let efficiency = theta.cos().max(0.0);

        SubRisks {
            efficiency,
            misalign: 1.0 - efficiency,
            rate: (inputs.charge_rate_c - NOMINAL_RATE_C).max(0.0),
            temp: ((inputs.temp_c - BODY_TEMP_C) / TEMP_SPAN_C).max(0.0),
            load: (inputs.load_ma / MAX_LOAD_MA).min(1.0),
        }
    }

    /// Weighted sum, unrounded.
    pub fn weighted(&self, weights: &RiskWeights) -> f64 {
        weights.misalign * self.misalign
            + weights.rate * self.rate
            + weights.temp * self.temp
            + weights.load * self.load
    }
}

/// Stateless scorer.
pub struct RiskModel;

impl RiskModel {
    /// Scores one operating point.
    ///
    /// Total over finite input: never fails, never caches. Passing `factors`
    /// (even an empty set) reweights the sub-risks and appends the normalized
    /// weights to the rationale.
    pub fn score(inputs: &InputVector, factors: Option<&SensitivityFactors>) -> RiskResult {
        let risks = SubRisks::of(inputs);
        let weights = factors
            .map(RiskWeights::with_factors)
            .unwrap_or(RiskWeights::BASE);

        let score = round2(risks.weighted(&weights));
        let efficiency = round2(risks.efficiency);

        let mut rationale = vec![
            format!(
                "Coil offset {:.2}° gives coupling efficiency {:.2} (misalignment risk {:.2})",
                inputs.coil_offset_deg, efficiency, risks.misalign
            ),
            format!(
                "Charge {:.2}C, temperature {:.2}°C, load {:.2} mA",
                inputs.charge_rate_c, inputs.temp_c, inputs.load_ma
            ),
        ];
        if factors.is_some() {
            rationale.push(format!(
                "Weights misalign {:.2}, rate {:.2}, temp {:.2}, load {:.2}",
                weights.misalign, weights.rate, weights.temp, weights.load
            ));
        }

        RiskResult {
            status: RiskStatus::from_score(score),
            score,
            telemetry: Telemetry { efficiency },
            rationale,
        }
    }
}
