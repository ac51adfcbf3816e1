//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const MAX_ENTITY_ID_LEN: usize = 64;

/// Identifier of a patient or device profile.
///
/// Entity ids are opaque, human-assigned slugs (`"P-001"`, `"R-17"`), not UUIDs.
/// They must be non-empty, at most 64 characters and contain only ASCII
/// alphanumerics, `-`, `_` or `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new EntityId, validating the format.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("entityId"));
        }
        if trimmed.len() > MAX_ENTITY_ID_LEN {
            return Err(ValidationError::invalid_format(
                "entityId",
                format!("must be at most {} characters", MAX_ENTITY_ID_LEN),
            ));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(ValidationError::invalid_format(
                "entityId",
                "only ASCII letters, digits, '-', '_' and '.' are allowed",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_accepts_slugs() {
        assert_eq!(EntityId::new("P-001").unwrap().as_str(), "P-001");
        assert_eq!(EntityId::new("device_7.rev2").unwrap().as_str(), "device_7.rev2");
    }

    #[test]
    fn entity_id_trims_whitespace() {
        assert_eq!(EntityId::new("  R-17 ").unwrap().as_str(), "R-17");
    }

    #[test]
    fn entity_id_rejects_empty() {
        assert!(matches!(
            EntityId::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn entity_id_rejects_path_characters() {
        assert!(EntityId::new("../etc/passwd").is_err());
        assert!(EntityId::new("a b").is_err());
    }

    #[test]
    fn entity_id_rejects_overlong() {
        let long = "x".repeat(MAX_ENTITY_ID_LEN + 1);
        assert!(EntityId::new(long).is_err());
    }

    #[test]
    fn entity_id_deserializes_with_validation() {
        let ok: EntityId = serde_json::from_str("\"P-002\"").unwrap();
        assert_eq!(ok.as_str(), "P-002");
        assert!(serde_json::from_str::<EntityId>("\"\"").is_err());
    }
}
