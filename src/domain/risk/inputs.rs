//! The four physical inputs of a charging configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the four physical input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    #[serde(rename = "coilOffsetDeg")]
    CoilOffset,
    #[serde(rename = "chargeRateC")]
    ChargeRate,
    #[serde(rename = "tempC")]
    Temperature,
    #[serde(rename = "load_mA")]
    Load,
}

impl InputField {
    /// All fields in rationale/weight order.
    pub const ALL: [InputField; 4] = [
        InputField::CoilOffset,
        InputField::ChargeRate,
        InputField::Temperature,
        InputField::Load,
    ];

    /// Wire name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            InputField::CoilOffset => "coilOffsetDeg",
            InputField::ChargeRate => "chargeRateC",
            InputField::Temperature => "tempC",
            InputField::Load => "load_mA",
        }
    }

    /// Inclusive valid range `(min, max)`.
    pub fn range(&self) -> (f64, f64) {
        match self {
            InputField::CoilOffset => (0.0, 30.0),
            InputField::ChargeRate => (0.2, 2.0),
            InputField::Temperature => (15.0, 60.0),
            InputField::Load => (0.0, 500.0),
        }
    }

    /// Clamps a value into this field's valid range.
    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    /// Checks that a value is finite and inside this field's valid range.
    pub fn check(&self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::non_finite(self.name()));
        }
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(ValidationError::out_of_range(self.name(), min, max, value));
        }
        Ok(())
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved operating point.
///
/// Construction does not validate: the risk model is total over any finite
/// vector, and range checks belong to the request boundary via [`InputVector::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputVector {
    pub coil_offset_deg: f64,
    pub charge_rate_c: f64,
    pub temp_c: f64,
    #[serde(rename = "load_mA")]
    pub load_ma: f64,
}

impl InputVector {
    /// System-wide fallback operating point.
    pub const DEFAULT: InputVector = InputVector {
        coil_offset_deg: 5.0,
        charge_rate_c: 1.0,
        temp_c: 37.0,
        load_ma: 200.0,
    };

    pub fn new(coil_offset_deg: f64, charge_rate_c: f64, temp_c: f64, load_ma: f64) -> Self {
        Self {
            coil_offset_deg,
            charge_rate_c,
            temp_c,
            load_ma,
        }
    }

    /// Reads one field.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::CoilOffset => self.coil_offset_deg,
            InputField::ChargeRate => self.charge_rate_c,
            InputField::Temperature => self.temp_c,
            InputField::Load => self.load_ma,
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        match field {
            InputField::CoilOffset => self.coil_offset_deg = value,
            InputField::ChargeRate => self.charge_rate_c = value,
            InputField::Temperature => self.temp_c = value,
            InputField::Load => self.load_ma = value,
        }
        self
    }

    /// Validates every field against its documented range.
    ///
    /// Reports the first offending field in [`InputField::ALL`] order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        InputField::ALL
            .iter()
            .try_for_each(|field| field.check(self.get(*field)))
    }
}

impl Default for InputVector {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-supplied per-field overrides; absent fields inherit from lower precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coil_offset_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_rate_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    #[serde(default, rename = "load_mA", skip_serializing_if = "Option::is_none")]
    pub load_ma: Option<f64>,
}

impl PartialInputs {
    /// Reads one override.
    pub fn get(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::CoilOffset => self.coil_offset_deg,
            InputField::ChargeRate => self.charge_rate_c,
            InputField::Temperature => self.temp_c,
            InputField::Load => self.load_ma,
        }
    }

    /// Returns a copy with one override set.
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        match field {
            InputField::CoilOffset => self.coil_offset_deg = Some(value),
            InputField::ChargeRate => self.charge_rate_c = Some(value),
            InputField::Temperature => self.temp_c = Some(value),
            InputField::Load => self.load_ma = Some(value),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        InputField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}
