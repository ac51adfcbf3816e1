//! Seed-file entity source (JSON or YAML).
//!
//! Reads the whole file on every `load_all` and runs it through
//! [`EntityRecordDecoder`]. The format is picked from the extension:
//! `.yaml` / `.yml` are parsed as YAML, anything else as JSON.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::adapters::validation::EntityRecordDecoder;
use crate::domain::entity::EntityProfile;
use crate::ports::{EntitySource, EntityStoreError};

/// Filesystem-backed entity source
pub struct FileEntitySource {
    path: PathBuf,
    decoder: EntityRecordDecoder,
}

impl FileEntitySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            decoder: EntityRecordDecoder::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        )
    }

    fn parse(&self, content: &str) -> Result<Value, EntityStoreError> {
        if self.is_yaml() {
            serde_yaml::from_str(content).map_err(|e| {
                EntityStoreError::MalformedRecords(format!("Invalid YAML in seed file: {}", e))
            })
        } else {
            serde_json::from_str(content).map_err(|e| {
                EntityStoreError::MalformedRecords(format!("Invalid JSON in seed file: {}", e))
            })
        }
    }
}

#[async_trait]
impl EntitySource for FileEntitySource {
    async fn load_all(&self) -> Result<Vec<EntityProfile>, EntityStoreError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EntityStoreError::SourceUnavailable(format!(
                    "Seed file not found: {}",
                    self.path.display()
                ))
            } else {
                EntityStoreError::IoError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                ))
            }
        })?;

        let document = self.parse(&content)?;
        Ok(self.decoder.decode_document(&document)?)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
