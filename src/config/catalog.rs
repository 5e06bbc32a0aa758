//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the hotel and meal catalog comes from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if !path.is_file() => {
                Err(ValidationError::CatalogFileMissing(path.display().to_string()))
            }
            _ => Ok(()),
        }
    }
}
