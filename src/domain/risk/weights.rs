//! Sub-risk weights and per-entity sensitivity factors.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Per-entity multipliers applied to the base weights before renormalization.
///
/// Absent factors count as `1`. Zero or negative factors remove that sub-risk's
/// influence entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitivityFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misalign: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
}

impl SensitivityFactors {
    pub fn new(misalign: f64, rate: f64, temp: f64, load: f64) -> Self {
        Self {
            misalign: Some(misalign),
            rate: Some(rate),
            temp: Some(temp),
            load: Some(load),
        }
    }

    /// Layers `self` over `lower`: every factor set here wins.
    pub fn over(&self, lower: &SensitivityFactors) -> SensitivityFactors {
        SensitivityFactors {
            misalign: self.misalign.or(lower.misalign),
            rate: self.rate.or(lower.rate),
            temp: self.temp.or(lower.temp),
            load: self.load.or(lower.load),
        }
    }

    /// Combines optional explicit factors with optional entity factors.
    ///
    /// Returns `None` only when neither side supplied factors.
    pub fn merge(
        explicit: Option<&SensitivityFactors>,
        entity: Option<&SensitivityFactors>,
    ) -> Option<SensitivityFactors> {
        match (explicit, entity) {
            (Some(e), Some(base)) => Some(e.over(base)),
            (Some(e), None) => Some(*e),
            (None, Some(base)) => Some(*base),
            (None, None) => None,
        }
    }

    /// Rejects non-finite multipliers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let named = [
            ("factors.misalign", self.misalign),
            ("factors.rate", self.rate),
            ("factors.temp", self.temp),
            ("factors.load", self.load),
        ];
        for (field, value) in named {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ValidationError::non_finite(field));
                }
            }
        }
        Ok(())
    }
}

/// Normalized weights of the four sub-risks. Always sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub misalign: f64,
    pub rate: f64,
    pub temp: f64,
    pub load: f64,
}

impl RiskWeights {
    /// Base weights; coil misalignment dominates clinical risk.
    pub const BASE: RiskWeights = RiskWeights {
        misalign: 0.45,
        rate: 0.25,
        temp: 0.20,
        load: 0.10,
    };

    /// Scales the base weights by `factors` and renormalizes to sum 1.
    ///
    /// If every scaled weight collapses to zero there is nothing to normalize,
    /// so the base weights are returned unchanged.
    pub fn with_factors(factors: &SensitivityFactors) -> RiskWeights {
        let scale = |base: f64, factor: Option<f64>| base * factor.unwrap_or(1.0).max(0.0);

        let scaled = RiskWeights {
            misalign: scale(Self::BASE.misalign, factors.misalign),
            rate: scale(Self::BASE.rate, factors.rate),
            temp: scale(Self::BASE.temp, factors.temp),
            load: scale(Self::BASE.load, factors.load),
        };

        let total = scaled.sum();
        if !(total.is_finite() && total > 0.0) {
            return Self::BASE;
        }

        RiskWeights {
            misalign: scaled.misalign / total,
            rate: scaled.rate / total,
            temp: scaled.temp / total,
            load: scaled.load / total,
        }
    }

    pub fn sum(&self) -> f64 {
        self.misalign + self.rate + self.temp + self.load
    }

    /// Weights in misalign/rate/temp/load order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.misalign, self.rate, self.temp, self.load]
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self::BASE
    }
}
