//! Sweep control defaults and limits applied at the request boundary.

use crate::domain::sweep::SweepRange;

use super::errors::RiskServiceError;

/// Defaults for omitted sweep controls plus the point limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSettings {
    pub default_from: f64,
    pub default_to: f64,
    pub default_step: f64,
    /// Upper bound on points evaluated by one request, across all series.
    pub max_points: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            default_from: 0.0,
            default_to: 30.0,
            default_step: 1.0,
            max_points: 1_000,
        }
    }
}

impl SweepSettings {
    /// Fills omitted controls, normalizes them, and enforces the point limit
    /// for `series` sweeps over the resulting range.
    pub fn range(
        &self,
        from: Option<f64>,
        to: Option<f64>,
        step: Option<f64>,
        series: usize,
    ) -> Result<SweepRange, RiskServiceError> {
        let range = SweepRange::new(
            from.unwrap_or(self.default_from),
            to.unwrap_or(self.default_to),
            step.unwrap_or(self.default_step),
        )?;

        let points = range.point_count().saturating_mul(series.max(1));
        if points > self.max_points {
            tracing::warn!(points, limit = self.max_points, "Rejected oversized sweep");
            return Err(RiskServiceError::SweepTooLarge {
                points,
                limit: self.max_points,
            });
        }
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_controls_use_defaults() {
        let range = SweepSettings::default().range(None, None, None, 1).unwrap();
        assert_eq!(range.from(), 0.0);
        assert_eq!(range.to(), 30.0);
        assert_eq!(range.step(), 1.0);
        assert_eq!(range.point_count(), 31);
    }

    #[test]
    fn default_to_is_clamped_when_from_is_past_it() {
        let range = SweepSettings::default()
            .range(Some(40.0), None, None, 1)
            .unwrap();
        assert_eq!(range.to(), 40.0);
        assert_eq!(range.point_count(), 1);
    }

    #[test]
    fn negative_from_is_rejected() {
        let err = SweepSettings::default()
            .range(Some(-1.0), None, None, 1)
            .unwrap_err();
        assert!(matches!(err, RiskServiceError::InvalidInput(_)));
    }

    #[test]
    fn oversized_sweep_is_rejected() {
        let settings = SweepSettings {
            max_points: 100,
            ..Default::default()
        };
        let err = settings
            .range(Some(0.0), Some(90.0), Some(0.1), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            RiskServiceError::SweepTooLarge { points: 901, limit: 100 }
        ));
    }

    #[test]
    fn limit_counts_every_series() {
        let settings = SweepSettings {
            max_points: 100,
            ..Default::default()
        };
        assert!(settings.range(Some(0.0), Some(30.0), None, 3).is_ok());
        assert!(settings.range(Some(0.0), Some(30.0), None, 4).is_err());
    }
}
