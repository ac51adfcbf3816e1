//! Entity store configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where entity profiles come from and how long a lookup may take
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Seed file with entity profiles (`.json`, `.yaml` or `.yml`)
    #[serde(default = "default_seed_path")]
    pub seed_path: PathBuf,

    /// Per-request entity lookup timeout in milliseconds
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

impl StoreConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.seed_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("store.seed_path"));
        }
        if self.lookup_timeout_ms == 0 || self.lookup_timeout_ms > 30_000 {
            return Err(ValidationError::InvalidLookupTimeout);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_path: default_seed_path(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
        }
    }
}

fn default_seed_path() -> PathBuf {
    PathBuf::from("seed/entities.json")
}

fn default_lookup_timeout_ms() -> u64 {
    2_000
}
