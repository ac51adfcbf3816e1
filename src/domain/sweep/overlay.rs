//! Multi-series overlays built from one sweep per perturbed field.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::risk::{InputField, InputVector, SensitivityFactors};

use super::curve::{CurveSummary, SweepCurve};
use super::engine::SweepEngine;
use super::range::SweepRange;

/// Label of the unperturbed series.
pub const BASELINE_LABEL: &str = "baseline";

/// Perturbations used when the caller does not pick any.
pub const DEFAULT_PERTURBATIONS: [(InputField, f64); 3] = [
    (InputField::ChargeRate, 0.5),
    (InputField::Temperature, 5.0),
    (InputField::Load, 100.0),
];

/// Shift of one non-swept field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perturbation {
    pub field: InputField,
    pub delta: f64,
}

impl Perturbation {
    /// Coil offset is the sweep axis, so it cannot be perturbed.
    pub fn new(field: InputField, delta: f64) -> Result<Self, ValidationError> {
        if field == InputField::CoilOffset {
            return Err(ValidationError::invalid_format(
                "perturbations.field",
                "coilOffsetDeg is the sweep axis and cannot be perturbed",
            ));
        }
        if !delta.is_finite() {
            return Err(ValidationError::non_finite("perturbations.delta"));
        }
        Ok(Self { field, delta })
    }

    pub fn defaults() -> Vec<Perturbation> {
        DEFAULT_PERTURBATIONS
            .iter()
            .map(|&(field, delta)| Perturbation { field, delta })
            .collect()
    }

    /// Applies the shift, clamped into the field's valid range.
    pub fn apply(&self, base: &InputVector) -> InputVector {
        let shifted = self.field.clamp(base.get(self.field) + self.delta);
        base.with(self.field, shifted)
    }

    pub fn label(&self) -> String {
        format!("{} {:+.2}", self.field.name(), self.delta)
    }
}

/// One curve of an overlay, with the inputs it was swept from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepSeries {
    pub label: String,
    pub inputs: InputVector,
    pub points: SweepCurve,
    pub summary: Option<CurveSummary>,
}

impl SweepSeries {
    fn sweep(
        label: String,
        inputs: InputVector,
        factors: Option<&SensitivityFactors>,
        range: &SweepRange,
    ) -> Self {
        let points = SweepEngine::sweep(&inputs, factors, range);
        let summary = points.summary();
        Self {
            label,
            inputs,
            points,
            summary,
        }
    }
}

/// Composes a baseline sweep with one sweep per perturbation.
pub struct Overlay;

impl Overlay {
    /// Returns the baseline series first, then one series per perturbation
    /// in the order given. Every series shares `range` and `factors`.
    pub fn build(
        base: &InputVector,
        factors: Option<&SensitivityFactors>,
        range: &SweepRange,
        perturbations: &[Perturbation],
    ) -> Vec<SweepSeries> {
        std::iter::once(SweepSeries::sweep(
            BASELINE_LABEL.to_string(),
            *base,
            factors,
            range,
        ))
        .chain(
            perturbations
                .iter()
                .map(|p| SweepSeries::sweep(p.label(), p.apply(base), factors, range)),
        )
        .collect()
    }
}
