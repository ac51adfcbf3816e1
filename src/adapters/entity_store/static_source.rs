//! Static Entity Source - a fixed, in-process list of profiles.
//!
//! Useful for tests, demos and embedding the service without a seed file.

use async_trait::async_trait;

use crate::domain::entity::EntityProfile;
use crate::ports::{EntitySource, EntityStoreError};

/// Source that always returns the same profiles
#[derive(Debug, Clone, Default)]
pub struct StaticEntitySource {
    profiles: Vec<EntityProfile>,
}

impl StaticEntitySource {
    pub fn new(profiles: Vec<EntityProfile>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl EntitySource for StaticEntitySource {
    async fn load_all(&self) -> Result<Vec<EntityProfile>, EntityStoreError> {
        Ok(self.profiles.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} profiles)", self.profiles.len())
    }
}
