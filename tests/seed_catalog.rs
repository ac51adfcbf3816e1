//! Integration tests for the shipped seed catalog.
//!
//! Verifies that `seed/entities.json` decodes cleanly through the file source
//! and cache, and that every baseline scores without touching the boundary.

use std::path::PathBuf;
use std::sync::Arc;

use wpt_whatif::adapters::entity_store::{CachedEntityStore, FileEntitySource};
use wpt_whatif::domain::foundation::Audience;
use wpt_whatif::domain::risk::RiskModel;
use wpt_whatif::ports::EntityStore;

fn seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("seed/entities.json")
}

#[tokio::test]
async fn seed_catalog_loads_both_partitions() {
    let store = CachedEntityStore::new(Arc::new(FileEntitySource::new(seed_path())));
    let summary = store.summary().await.unwrap();

    assert!(summary.identified > 0);
    assert!(summary.deidentified > 0);
    assert!(summary.source.ends_with("entities.json"));
}

#[tokio::test]
async fn seed_baselines_are_valid_operating_points() {
    let store = CachedEntityStore::new(Arc::new(FileEntitySource::new(seed_path())));

    for audience in Audience::ALL {
        for profile in store.list(audience).await.unwrap() {
            assert_eq!(profile.audience, audience);
            profile.baseline.validate().unwrap();
            let result = RiskModel::score(&profile.baseline, profile.factors.as_ref());
            assert!((0.0..=1.0).contains(&result.score), "{}", profile.id);
        }
    }
}
