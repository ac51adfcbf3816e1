//! Sweep Engine - the risk model driven across coil misalignment.

use crate::domain::risk::{InputField, InputVector, RiskModel, SensitivityFactors};

use super::curve::{SweepCurve, SweepPoint};
use super::range::SweepRange;

/// Stateless curve builder.
pub struct SweepEngine;

impl SweepEngine {
    /// Evaluates `base` at every coil offset in `range`.
    ///
    /// Only `coilOffsetDeg` varies; the other three fields stay at their `base`
    /// values. Each point is a full [`RiskModel::score`] call, so a sweep point
    /// always equals the single-point score at the same angle.
    pub fn sweep(
        base: &InputVector,
        factors: Option<&SensitivityFactors>,
        range: &SweepRange,
    ) -> SweepCurve {
        let points = range
            .values()
            .map(|angle| {
                let inputs = base.with(InputField::CoilOffset, angle);
                SweepPoint {
                    independent_value: angle,
                    score: RiskModel::score(&inputs, factors).score,
                }
            })
            .collect();

        SweepCurve::from_points(points)
    }
}
