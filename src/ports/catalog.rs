//! Catalog port (read-only).
//!
//! Defines the contract for looking up hotels, meals, board types and
//! countries. Implementations are static data sources; none of these
//! operations mutate state.

use crate::domain::catalog::{BoardTypeInfo, Country, DestinationCatalog, Hotel, MealOptions};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match err {
            CatalogError::Io { .. } => ErrorCode::CatalogUnavailable,
            CatalogError::Parse(_) | CatalogError::Invalid(_) => ErrorCode::CatalogInvalid,
        };
        let domain = DomainError::new(code, err.to_string());
        match err {
            CatalogError::Io { path, .. } => domain.with_detail("path", path),
            _ => domain,
        }
    }
}

/// Port for destination-scoped catalog lookups.
///
/// Unknown destinations yield empty lists rather than errors.
pub trait Catalog: Send + Sync {
    /// Known destinations in display order.
    fn destinations(&self) -> Vec<String>;

    /// Hotels available at `destination`.
    fn hotels_for(&self, destination: &str) -> Vec<Hotel>;

    /// Lunch and dinner options at `destination`.
    fn meals_for(&self, destination: &str) -> MealOptions;

    /// Board types with display names and descriptions.
    fn board_types(&self) -> Vec<BoardTypeInfo>;

    /// Countries selectable as citizenship.
    fn countries(&self) -> Vec<Country>;

    /// Everything pricing needs for one destination.
    fn slice_for(&self, destination: &str) -> DestinationCatalog {
        DestinationCatalog {
            destination: destination.to_string(),
            hotels: self.hotels_for(destination),
            meals: self.meals_for(destination),
        }
    }
}
