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
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Authored question probability must be within 0..=1, got {0}")]
    InvalidProbability(f64),

    #[error("Eviction interval must be between 1 and {max} seconds", max = crate::config::MAX_SESSION_DURATION_SECS)]
    InvalidEvictionInterval,

    #[error("Idle session TTL cannot exceed {max} seconds, got {0}", max = crate::config::MAX_SESSION_DURATION_SECS)]
    InvalidIdleTtl(u64),

    #[error("Session cookie name cannot be empty")]
    EmptyCookieName,

    #[error("Catalog path cannot be blank")]
    EmptyCatalogPath,
}
