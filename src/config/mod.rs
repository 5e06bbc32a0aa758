//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRIP_PLANNER` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use trip_planner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("New trips last {} days", config.planner.default_days);
//! ```

mod catalog;
mod error;
mod logging;
mod planner;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use planner::PlannerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Defaults for new planning sessions
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRIP_PLANNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TRIP_PLANNER__PLANNER__DEFAULT_DAYS=5` -> `planner.default_days = 5`
    /// - `TRIP_PLANNER__CATALOG__PATH=./catalog.yaml` -> `catalog.path = ...`
    /// - `TRIP_PLANNER__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRIP_PLANNER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.planner.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
