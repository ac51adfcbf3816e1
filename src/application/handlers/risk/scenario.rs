//! Scenario resolution - entity lookup, input merge and boundary validation.
//!
//! Every risk command starts here. The entity lookup is the only suspension
//! point in the request path; [`EntityLookup`] bounds it with a timeout.

use crate::domain::foundation::{Audience, EntityId};
use crate::domain::risk::{resolve_inputs, InputVector, PartialInputs, SensitivityFactors};

use super::errors::RiskServiceError;
use super::lookup::EntityLookup;

/// What the caller asked to evaluate.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    /// Partition the caller is allowed to read.
    pub audience: Audience,
    /// Entity whose baseline and factors to start from.
    pub entity_id: Option<EntityId>,
    /// Per-field overrides; always win over the baseline.
    pub overrides: PartialInputs,
    /// Explicit factors; win per field over the entity's factors.
    pub factors: Option<SensitivityFactors>,
}

/// A validated operating point ready for the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    pub inputs: InputVector,
    pub factors: Option<SensitivityFactors>,
    /// Id of the entity that supplied the baseline, if one was found.
    pub entity_id: Option<EntityId>,
}

/// Resolves scenarios against an entity store.
#[derive(Clone)]
pub struct ScenarioResolver {
    lookup: EntityLookup,
}

impl ScenarioResolver {
    pub fn new(lookup: EntityLookup) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &EntityLookup {
        &self.lookup
    }

    /// Merges default, baseline and overrides, then validates the result.
    ///
    /// An unknown entity id is not an error: resolution falls through to the
    /// system default for every field the caller did not override.
    pub async fn resolve(&self, scenario: &Scenario) -> Result<ResolvedScenario, RiskServiceError> {
        if let Some(factors) = &scenario.factors {
            factors.validate()?;
        }

        let audience = scenario.audience;
        let entity = match &scenario.entity_id {
            Some(id) => {
                let found = self.lookup.find(audience, id).await?;
                if found.is_none() {
                    tracing::debug!(entity_id = %id, %audience, "Entity not found, using system defaults");
                }
                found
            }
            None => None,
        };

        let inputs = resolve_inputs(
            &scenario.overrides,
            entity.as_ref().map(|profile| &profile.baseline),
        );
        inputs.validate()?;

        let factors = SensitivityFactors::merge(
            scenario.factors.as_ref(),
            entity.as_ref().and_then(|profile| profile.factors.as_ref()),
        );

        Ok(ResolvedScenario {
            inputs,
            factors,
            entity_id: entity.map(|profile| profile.id),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::entity::EntityProfile;
    use crate::domain::risk::InputField;
    use crate::ports::{EntityStore, EntityStoreError};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    /// In-memory store with optional failure / delay injection.
    pub struct FixtureStore {
        pub profiles: Vec<EntityProfile>,
        pub fail: bool,
        pub delay: Option<Duration>,
    }

    impl FixtureStore {
        pub fn with_profiles(profiles: Vec<EntityProfile>) -> Self {
            Self {
                profiles,
                fail: false,
                delay: None,
            }
        }

        pub fn failing() -> Self {
            Self {
                profiles: vec![],
                fail: true,
                delay: None,
            }
        }

        pub fn slow(delay: Duration) -> Self {
            Self {
                profiles: vec![],
                fail: false,
                delay: Some(delay),
            }
        }
    }

    #[async_trait]
    impl EntityStore for FixtureStore {
        async fn find_baseline(
            &self,
            audience: Audience,
            id: &EntityId,
        ) -> Result<Option<EntityProfile>, EntityStoreError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(EntityStoreError::SourceUnavailable("simulated".to_string()));
            }
            Ok(self
                .profiles
                .iter()
                .find(|p| p.audience == audience && &p.id == id)
                .cloned())
        }

        async fn list(&self, audience: Audience) -> Result<Vec<EntityProfile>, EntityStoreError> {
            if self.fail {
                return Err(EntityStoreError::SourceUnavailable("simulated".to_string()));
            }
            Ok(self
                .profiles
                .iter()
                .filter(|p| p.audience == audience)
                .cloned()
                .collect())
        }
    }

    /// Identified patient `P-001` at 10° with a temperature-sensitive factor set.
    pub fn patient() -> EntityProfile {
        EntityProfile::new(
            EntityId::new("P-001").unwrap(),
            Audience::Identified,
            "Patient one",
            InputVector::DEFAULT
                .with(InputField::CoilOffset, 10.0)
                .with(InputField::Temperature, 38.0),
        )
        .with_factors(SensitivityFactors {
            temp: Some(2.0),
            rate: Some(1.5),
            ..Default::default()
        })
    }

    pub fn lookup(store: FixtureStore) -> EntityLookup {
        EntityLookup::new(Arc::new(store), Duration::from_millis(200))
    }

    pub fn resolver(store: FixtureStore) -> ScenarioResolver {
        ScenarioResolver::new(lookup(store))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::risk::InputField;
    use std::sync::Arc;
    use std::time::Duration;

    fn scenario_for(id: &str) -> Scenario {
        Scenario {
            audience: Audience::Identified,
            entity_id: Some(EntityId::new(id).unwrap()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn baseline_fills_unset_fields() {
        let resolver = resolver(FixtureStore::with_profiles(vec![patient()]));
        let resolved = resolver.resolve(&scenario_for("P-001")).await.unwrap();

        assert_eq!(resolved.inputs.coil_offset_deg, 10.0);
        assert_eq!(resolved.inputs.temp_c, 38.0);
        assert_eq!(resolved.entity_id.unwrap().as_str(), "P-001");
        assert_eq!(resolved.factors.unwrap().temp, Some(2.0));
    }

    #[tokio::test]
    async fn override_wins_over_baseline() {
        let resolver = resolver(FixtureStore::with_profiles(vec![patient()]));
        let scenario = Scenario {
            overrides: PartialInputs::default().with(InputField::CoilOffset, 15.0),
            ..scenario_for("P-001")
        };
        let resolved = resolver.resolve(&scenario).await.unwrap();
        assert_eq!(resolved.inputs.coil_offset_deg, 15.0);
        assert_eq!(resolved.inputs.temp_c, 38.0);
    }

    #[tokio::test]
    async fn unknown_entity_falls_through_to_defaults() {
        let resolver = resolver(FixtureStore::with_profiles(vec![patient()]));
        let resolved = resolver.resolve(&scenario_for("P-404")).await.unwrap();
        assert_eq!(resolved.inputs, InputVector::DEFAULT);
        assert!(resolved.entity_id.is_none());
        assert!(resolved.factors.is_none());
    }

    #[tokio::test]
    async fn other_audience_cannot_see_entity() {
        let resolver = resolver(FixtureStore::with_profiles(vec![patient()]));
        let scenario = Scenario {
            audience: Audience::Deidentified,
            ..scenario_for("P-001")
        };
        let resolved = resolver.resolve(&scenario).await.unwrap();
        assert_eq!(resolved.inputs, InputVector::DEFAULT);
    }

    #[tokio::test]
    async fn explicit_factors_win_per_field() {
        let resolver = resolver(FixtureStore::with_profiles(vec![patient()]));
        let scenario = Scenario {
            factors: Some(SensitivityFactors {
                temp: Some(0.5),
                ..Default::default()
            }),
            ..scenario_for("P-001")
        };
        let factors = resolver.resolve(&scenario).await.unwrap().factors.unwrap();
        assert_eq!(factors.temp, Some(0.5));
        assert_eq!(factors.rate, Some(1.5));
    }

    #[tokio::test]
    async fn out_of_range_override_is_rejected() {
        let resolver = resolver(FixtureStore::with_profiles(vec![]));
        let scenario = Scenario {
            overrides: PartialInputs::default().with(InputField::Temperature, 75.0),
            ..Default::default()
        };
        let err = resolver.resolve(&scenario).await.unwrap_err();
        assert!(matches!(
            err,
            RiskServiceError::InvalidInput(ValidationError::OutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn non_finite_factor_is_rejected() {
        let resolver = resolver(FixtureStore::with_profiles(vec![]));
        let scenario = Scenario {
            factors: Some(SensitivityFactors {
                load: Some(f64::INFINITY),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            resolver.resolve(&scenario).await,
            Err(RiskServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let resolver = resolver(FixtureStore::failing());
        let err = resolver.resolve(&scenario_for("P-001")).await.unwrap_err();
        assert!(matches!(err, RiskServiceError::Store(_)));
    }

    #[tokio::test]
    async fn slow_lookup_times_out() {
        let resolver = ScenarioResolver::new(EntityLookup::new(
            Arc::new(FixtureStore::slow(Duration::from_millis(500))),
            Duration::from_millis(20),
        ));
        let err = resolver.resolve(&scenario_for("P-001")).await.unwrap_err();
        assert!(matches!(err, RiskServiceError::LookupTimedOut(_)));
    }

    #[tokio::test]
    async fn no_entity_id_skips_lookup() {
        let resolver = resolver(FixtureStore::failing());
        let resolved = resolver.resolve(&Scenario::default()).await.unwrap();
        assert_eq!(resolved.inputs, InputVector::DEFAULT);
    }
}
