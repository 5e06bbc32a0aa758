//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Default trip length must be at least one day")]
    InvalidDefaultDays,

    #[error("Maximum day input is below the default trip length")]
    MaxDaysBelowDefault,

    #[error("Catalog file not found: {0}")]
    CatalogFileMissing(String),

    #[error("Invalid log filter directive")]
    InvalidLogFilter,
}
