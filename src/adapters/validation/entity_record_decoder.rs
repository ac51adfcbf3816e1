//! Entity Record Decoder - validated decode of externally loaded profiles.
//!
//! Seed files and other external sources hand us untyped JSON. Every record is
//! checked field by field before it becomes an [`EntityProfile`]; a single bad
//! record rejects the whole batch so the store never serves a partial catalog.

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::entity::EntityProfile;
use crate::domain::foundation::{Audience, EntityId, ValidationError};
use crate::domain::risk::{InputField, InputVector, SensitivityFactors};
use crate::ports::EntityStoreError;

const FACTOR_KEYS: [&str; 4] = ["misalign", "rate", "temp", "load"];

/// Problems found while decoding entity records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordDecodeError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Value out of range for field {field}: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid value for field {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entity id '{id}' in {audience} partition")]
    DuplicateId { id: String, audience: Audience },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<RecordDecodeError>),
}

impl From<RecordDecodeError> for EntityStoreError {
    fn from(err: RecordDecodeError) -> Self {
        EntityStoreError::MalformedRecords(err.to_string())
    }
}

/// Decoder for entity record documents.
///
/// Accepts either `{"entities": [...]}` or a bare array of records. Each record:
///
/// ```json
/// {
///   "id": "P-001",
///   "audience": "identified",
///   "label": "Pacemaker, left pectoral",
///   "baseline": { "coilOffsetDeg": 8, "chargeRateC": 0.8, "tempC": 37.2, "load_mA": 180 },
///   "factors": { "misalign": 1.4 }
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityRecordDecoder;

impl EntityRecordDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a whole document. Any malformed record fails the entire batch.
    pub fn decode_document(&self, document: &Value) -> Result<Vec<EntityProfile>, RecordDecodeError> {
        let records = match document {
            Value::Array(items) => items,
            Value::Object(obj) => {
                let entities = obj.get("entities").ok_or_else(|| RecordDecodeError::MissingRequired {
                    field: "entities".to_string(),
                })?;
                let items = entities.as_array().ok_or_else(|| RecordDecodeError::InvalidType {
                    field: "entities".to_string(),
                    expected: "array".to_string(),
                    actual: Self::type_name(entities),
                })?;
                items
            }
            other => {
                return Err(RecordDecodeError::InvalidType {
                    field: "root".to_string(),
                    expected: "object or array".to_string(),
                    actual: Self::type_name(other),
                })
            }
        };

        let mut errors = Vec::new();
        let mut profiles = Vec::with_capacity(records.len());
        let mut seen: HashSet<(Audience, EntityId)> = HashSet::new();

        for (i, record) in records.iter().enumerate() {
            match self.decode_record(record, &format!("entities[{}]", i)) {
                Ok(profile) => {
                    if !seen.insert((profile.audience, profile.id.clone())) {
                        errors.push(RecordDecodeError::DuplicateId {
                            id: profile.id.to_string(),
                            audience: profile.audience,
                        });
                    } else {
                        profiles.push(profile);
                    }
                }
                Err(err) => errors.push(err),
            }
        }

        if !errors.is_empty() {
            return Err(Self::collect_errors(errors));
        }
        Ok(profiles)
    }

    /// Decodes one record located at `path`.
    pub fn decode_record(&self, record: &Value, path: &str) -> Result<EntityProfile, RecordDecodeError> {
        let obj = self.require_object(record, path)?;

        let id_raw = self.require_string(obj, "id", path)?;
        let id = EntityId::new(id_raw).map_err(|e| RecordDecodeError::InvalidValue {
            field: format!("{}.id", path),
            reason: e.to_string(),
        })?;

        let audience: Audience = self
            .require_string(obj, "audience", path)?
            .parse()
            .map_err(|e: ValidationError| RecordDecodeError::InvalidValue {
                field: format!("{}.audience", path),
                reason: e.to_string(),
            })?;

        let label = self.require_string(obj, "label", path)?.trim();
        if label.is_empty() {
            return Err(RecordDecodeError::InvalidValue {
                field: format!("{}.label", path),
                reason: "must not be empty".to_string(),
            });
        }

        let baseline = self.decode_baseline(obj, path)?;
        let factors = self.decode_factors(obj, path)?;

        let profile = EntityProfile::new(id, audience, label, baseline);
        Ok(match factors {
            Some(f) => profile.with_factors(f),
            None => profile,
        })
    }

    fn decode_baseline(
        &self,
        obj: &Map<String, Value>,
        parent: &str,
    ) -> Result<InputVector, RecordDecodeError> {
        let path = format!("{}.baseline", parent);
        let value = obj
            .get("baseline")
            .ok_or_else(|| RecordDecodeError::MissingRequired { field: path.clone() })?;
        let baseline = self.require_object(value, &path)?;

        let mut vector = InputVector::DEFAULT;
        for field in InputField::ALL {
            let v = self.require_number(baseline, field.name(), &path)?;
            let (min, max) = field.range();
            if v < min || v > max {
                return Err(RecordDecodeError::OutOfRange {
                    field: format!("{}.{}", path, field.name()),
                    value: v,
                    min,
                    max,
                });
            }
            vector = vector.with(field, v);
        }
        Ok(vector)
    }

    fn decode_factors(
        &self,
        obj: &Map<String, Value>,
        parent: &str,
    ) -> Result<Option<SensitivityFactors>, RecordDecodeError> {
        let path = format!("{}.factors", parent);
        let factors = match obj.get("factors") {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => self.require_object(value, &path)?,
        };

        if let Some(unknown) = factors.keys().find(|k| !FACTOR_KEYS.contains(&k.as_str())) {
            return Err(RecordDecodeError::InvalidValue {
                field: format!("{}.{}", path, unknown),
                reason: format!("unknown factor, expected one of {:?}", FACTOR_KEYS),
            });
        }

        let optional = |key: &str| -> Result<Option<f64>, RecordDecodeError> {
            match factors.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(_) => self.require_number(factors, key, &path).map(Some),
            }
        };

        Ok(Some(SensitivityFactors {
            misalign: optional("misalign")?,
            rate: optional("rate")?,
            temp: optional("temp")?,
            load: optional("load")?,
        }))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn require_object<'a>(
        &self,
        value: &'a Value,
        path: &str,
    ) -> Result<&'a Map<String, Value>, RecordDecodeError> {
        value.as_object().ok_or_else(|| RecordDecodeError::InvalidType {
            field: path.to_string(),
            expected: "object".to_string(),
            actual: Self::type_name(value),
        })
    }

    fn require_string<'a>(
        &self,
        obj: &'a Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<&'a str, RecordDecodeError> {
        let value = obj.get(field).ok_or_else(|| RecordDecodeError::MissingRequired {
            field: format!("{}.{}", parent, field),
        })?;
        value.as_str().ok_or_else(|| RecordDecodeError::InvalidType {
            field: format!("{}.{}", parent, field),
            expected: "string".to_string(),
            actual: Self::type_name(value),
        })
    }

    fn require_number(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<f64, RecordDecodeError> {
        let value = obj.get(field).ok_or_else(|| RecordDecodeError::MissingRequired {
            field: format!("{}.{}", parent, field),
        })?;
        let number = value.as_f64().ok_or_else(|| RecordDecodeError::InvalidType {
            field: format!("{}.{}", parent, field),
            expected: "number".to_string(),
            actual: Self::type_name(value),
        })?;
        if !number.is_finite() {
            return Err(RecordDecodeError::InvalidValue {
                field: format!("{}.{}", parent, field),
                reason: "must be finite".to_string(),
            });
        }
        Ok(number)
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }

    fn collect_errors(mut errors: Vec<RecordDecodeError>) -> RecordDecodeError {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            RecordDecodeError::Multiple(errors)
        }
    }
}
