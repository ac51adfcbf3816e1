//! Entity Store ports - baseline lookup partitioned by audience.
//!
//! The core never talks to storage. Application handlers resolve an
//! [`EntityProfile`] through [`EntityStore`] before scoring, and the profile's
//! baseline and factors feed the resolver. The store does not enforce the
//! audience partition beyond keying on it; the caller asserts the audience.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entity::EntityProfile;
use crate::domain::foundation::{Audience, EntityId};

/// Errors that can occur while loading or querying entities
#[derive(Debug, Clone, thiserror::Error)]
pub enum EntityStoreError {
    #[error("Entity source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed entity records: {0}")]
    MalformedRecords(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Read-only lookup of entity profiles
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Finds one profile in the given audience partition.
    ///
    /// `Ok(None)` means not found, which callers treat as "use the system default".
    async fn find_baseline(
        &self,
        audience: Audience,
        id: &EntityId,
    ) -> Result<Option<EntityProfile>, EntityStoreError>;

    /// Lists every profile in the given audience partition, ordered by id.
    async fn list(&self, audience: Audience) -> Result<Vec<EntityProfile>, EntityStoreError>;
}

/// Raw supplier of profiles, e.g. a seed file or database.
///
/// Sources return fully decoded profiles; a source must fail as a whole rather
/// than return a partial set when any record is malformed.
#[async_trait]
pub trait EntitySource: Send + Sync {
    async fn load_all(&self) -> Result<Vec<EntityProfile>, EntityStoreError>;

    /// Human-readable origin, used in logs and the catalog summary.
    fn describe(&self) -> String;
}

/// Counts and provenance of the currently loaded catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub source: String,
    pub identified: usize,
    pub deidentified: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Explicit invalidation of a cached store
#[async_trait]
pub trait EntityReloader: Send + Sync {
    /// Re-reads the source and atomically swaps the catalog.
    ///
    /// On failure the previously loaded catalog stays in service.
    async fn reload(&self) -> Result<CatalogSummary, EntityStoreError>;
}
