//! Data audience (partition) selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Which of the two disjoint entity partitions a request reads from.
///
/// Defaults to `Deidentified`, the partition a caller without a role sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Clinical audience with identified patient records.
    Identified,
    /// Research audience with de-identified subject records.
    #[default]
    Deidentified,
}

impl Audience {
    /// Both partitions, in display order.
    pub const ALL: [Audience; 2] = [Audience::Identified, Audience::Deidentified];

    /// Maps a caller role name to its audience.
    ///
    /// `clinician` reads identified data, `researcher` reads de-identified data.
    pub fn from_role(role: &str) -> Result<Self, ValidationError> {
        match role.trim().to_ascii_lowercase().as_str() {
            "clinician" => Ok(Audience::Identified),
            "researcher" => Ok(Audience::Deidentified),
            other => Err(ValidationError::invalid_format(
                "x-role",
                format!("unknown role '{}'", other),
            )),
        }
    }

    /// Returns the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Identified => "identified",
            Audience::Deidentified => "deidentified",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identified" => Ok(Audience::Identified),
            "deidentified" => Ok(Audience::Deidentified),
            other => Err(ValidationError::invalid_format(
                "audience",
                format!("expected 'identified' or 'deidentified', got '{}'", other),
            )),
        }
    }
}
