//! Entity profile: a baseline operating point plus optional sensitivities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Audience, EntityId};
use crate::domain::risk::{InputVector, SensitivityFactors};

/// A patient (identified) or research subject/device (de-identified) profile.
///
/// Profiles only reach the domain through the record decoder, so `baseline`
/// is always in range and `factors` always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityProfile {
    pub id: EntityId,
    pub audience: Audience,
    pub label: String,
    pub baseline: InputVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<SensitivityFactors>,
}

impl EntityProfile {
    pub fn new(
        id: EntityId,
        audience: Audience,
        label: impl Into<String>,
        baseline: InputVector,
    ) -> Self {
        Self {
            id,
            audience,
            label: label.into(),
            baseline,
            factors: None,
        }
    }

    pub fn with_factors(mut self, factors: SensitivityFactors) -> Self {
        self.factors = Some(factors);
        self
    }
}
