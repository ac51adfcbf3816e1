//! Sweep control defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::SweepSettings;

/// Defaults for omitted sweep controls and the per-request point limit
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_from")]
    pub default_from: f64,

    #[serde(default = "default_to")]
    pub default_to: f64,

    #[serde(default = "default_step")]
    pub default_step: f64,

    /// Most points one request may evaluate, summed over overlay series
    #[serde(default = "default_max_points")]
    pub max_points: usize,
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let defaults = [
            ("default_from", self.default_from),
            ("default_to", self.default_to),
            ("default_step", self.default_step),
        ];
        for (name, value) in defaults {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidSweepDefault(name));
            }
        }
        if self.max_points == 0 || self.max_points > 100_000 {
            return Err(ValidationError::InvalidMaxPoints);
        }
        Ok(())
    }

    pub fn settings(&self) -> SweepSettings {
        SweepSettings {
            default_from: self.default_from,
            default_to: self.default_to,
            default_step: self.default_step,
            max_points: self.max_points,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            default_from: default_from(),
            default_to: default_to(),
            default_step: default_step(),
            max_points: default_max_points(),
        }
    }
}

fn default_from() -> f64 {
    0.0
}

fn default_to() -> f64 {
    30.0
}

fn default_step() -> f64 {
    1.0
}

fn default_max_points() -> usize {
    1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_application_settings() {
        let config = SweepConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.settings(), SweepSettings::default());
    }

    #[test]
    fn negative_default_is_rejected() {
        let config = SweepConfig {
            default_from: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSweepDefault("default_from"))
        ));
    }

    #[test]
    fn non_finite_default_is_rejected() {
        let config = SweepConfig {
            default_step: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn max_points_bounds() {
        for bad in [0, 100_001] {
            let config = SweepConfig {
                max_points: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidMaxPoints)
            ));
        }
    }
}
