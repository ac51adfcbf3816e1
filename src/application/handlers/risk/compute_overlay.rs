//! ComputeOverlayHandler - baseline sweep plus one sweep per perturbation.

use crate::domain::foundation::EntityId;
use crate::domain::risk::{InputField, InputVector, SensitivityFactors};
use crate::domain::sweep::{Overlay, Perturbation, SweepRange, SweepSeries};

use super::errors::RiskServiceError;
use super::scenario::{Scenario, ScenarioResolver};
use super::sweep_settings::SweepSettings;

/// Command to build an overlay.
#[derive(Debug, Clone, Default)]
pub struct ComputeOverlayCommand {
    pub scenario: Scenario,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub step: Option<f64>,
    /// Raw `(field, delta)` pairs; `None` selects the default set.
    pub perturbations: Option<Vec<(InputField, f64)>>,
}

/// Result of an overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeOverlayResult {
    pub inputs: InputVector,
    pub factors: Option<SensitivityFactors>,
    pub entity_id: Option<EntityId>,
    pub range: SweepRange,
    /// Baseline first, then perturbations in request order.
    pub series: Vec<SweepSeries>,
}

/// Handler for multi-series overlays.
pub struct ComputeOverlayHandler {
    resolver: ScenarioResolver,
    settings: SweepSettings,
}

impl ComputeOverlayHandler {
    pub fn new(resolver: ScenarioResolver, settings: SweepSettings) -> Self {
        Self { resolver, settings }
    }

    pub async fn handle(
        &self,
        cmd: ComputeOverlayCommand,
    ) -> Result<ComputeOverlayResult, RiskServiceError> {
        let perturbations = match cmd.perturbations {
            Some(raw) => raw
                .into_iter()
                .map(|(field, delta)| Perturbation::new(field, delta))
                .collect::<Result<Vec<_>, _>>()?,
            None => Perturbation::defaults(),
        };

        let range = self
            .settings
            .range(cmd.from, cmd.to, cmd.step, perturbations.len() + 1)?;
        let resolved = self.resolver.resolve(&cmd.scenario).await?;

        let series = Overlay::build(
            &resolved.inputs,
            resolved.factors.as_ref(),
            &range,
            &perturbations,
        );

        Ok(ComputeOverlayResult {
            inputs: resolved.inputs,
            factors: resolved.factors,
            entity_id: resolved.entity_id,
            range,
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::scenario::test_support::*;
    use super::*;
    use crate::domain::sweep::BASELINE_LABEL;

    fn handler() -> ComputeOverlayHandler {
        ComputeOverlayHandler::new(
            resolver(FixtureStore::with_profiles(vec![])),
            SweepSettings::default(),
        )
    }

    #[tokio::test]
    async fn default_perturbations_follow_baseline() {
        let out = handler()
            .handle(ComputeOverlayCommand::default())
            .await
            .unwrap();

        assert_eq!(out.series.len(), 4);
        assert_eq!(out.series[0].label, BASELINE_LABEL);
        assert_eq!(out.series[0].inputs, out.inputs);
        assert!(out
            .series
            .iter()
            .all(|s| s.points.len() == out.range.point_count()));
    }

    #[tokio::test]
    async fn explicit_perturbations_keep_request_order() {
        let cmd = ComputeOverlayCommand {
            perturbations: Some(vec![
                (InputField::Load, 300.0),
                (InputField::Temperature, -5.0),
            ]),
            ..Default::default()
        };
        let out = handler().handle(cmd).await.unwrap();

        assert_eq!(out.series.len(), 3);
        assert_eq!(out.series[1].inputs.load_ma, 500.0);
        assert_eq!(out.series[2].inputs.temp_c, 32.0);
    }

    #[tokio::test]
    async fn empty_perturbations_give_baseline_only() {
        let cmd = ComputeOverlayCommand {
            perturbations: Some(vec![]),
            ..Default::default()
        };
        let out = handler().handle(cmd).await.unwrap();
        assert_eq!(out.series.len(), 1);
    }

    #[tokio::test]
    async fn coil_offset_perturbation_is_rejected() {
        let cmd = ComputeOverlayCommand {
            perturbations: Some(vec![(InputField::CoilOffset, 5.0)]),
            ..Default::default()
        };
        assert!(matches!(
            handler().handle(cmd).await,
            Err(RiskServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn perturbed_series_never_scores_below_baseline_for_stressors() {
        let out = handler()
            .handle(ComputeOverlayCommand::default())
            .await
            .unwrap();
        let baseline = &out.series[0].points;
        for series in &out.series[1..] {
            for (b, p) in baseline.points().iter().zip(series.points.points()) {
                assert!(p.score >= b.score);
            }
        }
    }
}
