//! Errors surfaced by the risk application handlers.

use std::time::Duration;

use crate::domain::foundation::{EntityId, ValidationError};
use crate::ports::EntityStoreError;

/// Failure of a risk command or query.
///
/// The scoring core itself never fails; every variant here comes from the
/// request boundary or the entity lookup around it.
#[derive(Debug, thiserror::Error)]
pub enum RiskServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Sweep too large: {points} points exceeds the limit of {limit}")]
    SweepTooLarge { points: usize, limit: usize },

    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    #[error("Entity lookup timed out after {0:?}")]
    LookupTimedOut(Duration),

    #[error("Entity store error: {0}")]
    Store(#[from] EntityStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert() {
        let err: RiskServiceError = ValidationError::non_finite("tempC").into();
        assert_eq!(
            err.to_string(),
            "Invalid input: Field 'tempC' must be a finite number"
        );
    }

    #[test]
    fn sweep_too_large_reports_limit() {
        let err = RiskServiceError::SweepTooLarge {
            points: 5001,
            limit: 1000,
        };
        assert_eq!(
            err.to_string(),
            "Sweep too large: 5001 points exceeds the limit of 1000"
        );
    }
}
