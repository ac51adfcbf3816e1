//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Entity lookup timeout must be between 1 and 30000 ms")]
    InvalidLookupTimeout,

    #[error("Sweep max_points must be between 1 and 100000")]
    InvalidMaxPoints,

    #[error("Sweep default {0} must be a finite, non-negative number")]
    InvalidSweepDefault(&'static str),

    #[error("Role header trust cannot be enabled in production")]
    RoleHeaderTrustInProduction,
}
