//! Caller access configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// How the caller's audience is established
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessConfig {
    /// Accept `x-role: clinician` from the request as proof of clinical access.
    ///
    /// Only for local development and demos; identified data is otherwise
    /// unreachable.
    #[serde(default)]
    pub trust_role_header: bool,
}

impl AccessConfig {
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.trust_role_header && *environment == Environment::Production {
            return Err(ValidationError::RoleHeaderTrustInProduction);
        }
        Ok(())
    }
}
