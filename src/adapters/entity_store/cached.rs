//! Read-through entity cache.
//!
//! Holds one process-wide catalog per store instance. The catalog is loaded
//! from the [`EntitySource`] on first access and then served from memory with
//! no eviction; it changes only on an explicit [`EntityReloader::reload`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::EntityProfile;
use crate::domain::foundation::{Audience, EntityId};
use crate::ports::{CatalogSummary, EntityReloader, EntitySource, EntityStore, EntityStoreError};

/// Immutable snapshot of every profile, keyed by audience then id.
#[derive(Debug)]
struct Catalog {
    partitions: HashMap<Audience, BTreeMap<EntityId, EntityProfile>>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    fn from_profiles(profiles: Vec<EntityProfile>) -> Self {
        let mut partitions: HashMap<Audience, BTreeMap<EntityId, EntityProfile>> = HashMap::new();
        for profile in profiles {
            partitions
                .entry(profile.audience)
                .or_default()
                .insert(profile.id.clone(), profile);
        }
        Self {
            partitions,
            loaded_at: Utc::now(),
        }
    }

    fn partition(&self, audience: Audience) -> Option<&BTreeMap<EntityId, EntityProfile>> {
        self.partitions.get(&audience)
    }

    fn count(&self, audience: Audience) -> usize {
        self.partition(audience).map_or(0, BTreeMap::len)
    }
}

/// Read-through cache over an [`EntitySource`]
pub struct CachedEntityStore {
    source: Arc<dyn EntitySource>,
    catalog: RwLock<Option<Arc<Catalog>>>,
}

impl CachedEntityStore {
    pub fn new(source: Arc<dyn EntitySource>) -> Self {
        Self {
            source,
            catalog: RwLock::new(None),
        }
    }

    /// Whether the catalog has been loaded yet.
    pub async fn is_loaded(&self) -> bool {
        self.catalog.read().await.is_some()
    }

    /// Summary of the current catalog, loading it if needed.
    pub async fn summary(&self) -> Result<CatalogSummary, EntityStoreError> {
        let catalog = self.catalog().await?;
        Ok(self.summarize(&catalog))
    }

    async fn catalog(&self) -> Result<Arc<Catalog>, EntityStoreError> {
        if let Some(catalog) = self.catalog.read().await.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let mut slot = self.catalog.write().await;
        // another task may have loaded while we waited for the write lock
        if let Some(catalog) = slot.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.load().await?);
        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    async fn load(&self) -> Result<Catalog, EntityStoreError> {
        let profiles = self.source.load_all().await.map_err(|e| {
            tracing::error!(source = %self.source.describe(), error = %e, "Failed to load entity catalog");
            e
        })?;
        let catalog = Catalog::from_profiles(profiles);
        tracing::info!(
            source = %self.source.describe(),
            identified = catalog.count(Audience::Identified),
            deidentified = catalog.count(Audience::Deidentified),
            "Entity catalog loaded"
        );
        Ok(catalog)
    }

    fn summarize(&self, catalog: &Catalog) -> CatalogSummary {
        CatalogSummary {
            source: self.source.describe(),
            identified: catalog.count(Audience::Identified),
            deidentified: catalog.count(Audience::Deidentified),
            loaded_at: catalog.loaded_at,
        }
    }
}

#[async_trait]
impl EntityStore for CachedEntityStore {
    async fn find_baseline(
        &self,
        audience: Audience,
        id: &EntityId,
    ) -> Result<Option<EntityProfile>, EntityStoreError> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .partition(audience)
            .and_then(|partition| partition.get(id))
            .cloned())
    }

    async fn list(&self, audience: Audience) -> Result<Vec<EntityProfile>, EntityStoreError> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .partition(audience)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }
}

#[async_trait]
impl EntityReloader for CachedEntityStore {
    async fn reload(&self) -> Result<CatalogSummary, EntityStoreError> {
        let fresh = Arc::new(self.load().await?);
        let summary = self.summarize(&fresh);
        *self.catalog.write().await = Some(fresh);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::InputVector;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Source
    // ─────────────────────────────────────────────────────────────────────

    struct CountingSource {
        profiles: Mutex<Vec<EntityProfile>>,
        loads: AtomicUsize,
        fail: Mutex<bool>,
    }

    impl CountingSource {
        fn new(profiles: Vec<EntityProfile>) -> Self {
            Self {
                profiles: Mutex::new(profiles),
                loads: AtomicUsize::new(0),
                fail: Mutex::new(false),
            }
        }

        fn set_profiles(&self, profiles: Vec<EntityProfile>) {
            *self.profiles.lock().unwrap() = profiles;
        }

        fn set_failing(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EntitySource for CountingSource {
        async fn load_all(&self) -> Result<Vec<EntityProfile>, EntityStoreError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if *self.fail.lock().unwrap() {
                return Err(EntityStoreError::SourceUnavailable("simulated".to_string()));
            }
            Ok(self.profiles.lock().unwrap().clone())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn profile(id: &str, audience: Audience, coil: f64) -> EntityProfile {
        EntityProfile::new(
            EntityId::new(id).unwrap(),
            audience,
            format!("Profile {}", id),
            InputVector::DEFAULT.with(crate::domain::risk::InputField::CoilOffset, coil),
        )
    }

    fn seeded() -> Arc<CountingSource> {
        Arc::new(CountingSource::new(vec![
            profile("P-002", Audience::Identified, 10.0),
            profile("P-001", Audience::Identified, 12.0),
            profile("R-001", Audience::Deidentified, 20.0),
        ]))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn loads_lazily_on_first_access() {
        let source = seeded();
        let store = CachedEntityStore::new(source.clone());
        assert!(!store.is_loaded().await);
        assert_eq!(source.loads(), 0);

        store.list(Audience::Identified).await.unwrap();
        assert!(store.is_loaded().await);
        assert_eq!(source.loads(), 1);
    }

    #[tokio::test]
    async fn serves_from_memory_after_first_load() {
        let source = seeded();
        let store = CachedEntityStore::new(source.clone());

        for _ in 0..5 {
            store
                .find_baseline(Audience::Identified, &EntityId::new("P-001").unwrap())
                .await
                .unwrap();
        }
        assert_eq!(source.loads(), 1);
    }

    #[tokio::test]
    async fn concurrent_first_access_loads_once() {
        let source = seeded();
        let store = Arc::new(CachedEntityStore::new(source.clone()));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.list(Audience::Deidentified).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(source.loads(), 1);
    }

    #[tokio::test]
    async fn partitions_are_disjoint() {
        let store = CachedEntityStore::new(seeded());
        let id = EntityId::new("R-001").unwrap();

        assert!(store
            .find_baseline(Audience::Deidentified, &id)
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_baseline(Audience::Identified, &id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = CachedEntityStore::new(seeded());
        let ids: Vec<String> = store
            .list(Audience::Identified)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["P-001", "P-002"]);
    }

    #[tokio::test]
    async fn reload_picks_up_source_changes() {
        let source = seeded();
        let store = CachedEntityStore::new(source.clone());
        assert_eq!(store.list(Audience::Identified).await.unwrap().len(), 2);

        source.set_profiles(vec![profile("P-003", Audience::Identified, 5.0)]);
        // still cached
        assert_eq!(store.list(Audience::Identified).await.unwrap().len(), 2);

        let summary = store.reload().await.unwrap();
        assert_eq!(summary.identified, 1);
        assert_eq!(summary.deidentified, 0);
        assert_eq!(store.list(Audience::Identified).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_catalog() {
        let source = seeded();
        let store = CachedEntityStore::new(source.clone());
        store.list(Audience::Identified).await.unwrap();

        source.set_failing(true);
        assert!(store.reload().await.is_err());
        assert_eq!(store.list(Audience::Identified).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_first_load_is_retried_on_next_access() {
        let source = seeded();
        source.set_failing(true);
        let store = CachedEntityStore::new(source.clone());
        assert!(store.list(Audience::Identified).await.is_err());
        assert!(!store.is_loaded().await);

        source.set_failing(false);
        assert_eq!(store.list(Audience::Identified).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn summary_reports_counts_and_source() {
        let store = CachedEntityStore::new(seeded());
        let summary = store.summary().await.unwrap();
        assert_eq!(summary.source, "counting");
        assert_eq!(summary.identified, 2);
        assert_eq!(summary.deidentified, 1);
    }
}
