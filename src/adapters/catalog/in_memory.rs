//! In-memory catalog adapter.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::catalog::{
    BoardTypeInfo, CatalogEntry, Country, DestinationCatalog, Hotel, MealOptions,
};
use crate::ports::{Catalog, CatalogError};

/// Catalog held entirely in memory.
///
/// Destinations keep insertion order; the first one is the session default.
/// When no board types are supplied the standard descriptions are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    #[serde(default)]
    destinations: Vec<DestinationCatalog>,
    #[serde(default)]
    board_types: Vec<BoardTypeInfo>,
    #[serde(default)]
    countries: Vec<Country>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the slice for a destination.
    pub fn with_destination(mut self, slice: DestinationCatalog) -> Self {
        match self
            .destinations
            .iter()
            .position(|d| d.destination == slice.destination)
        {
            Some(pos) => self.destinations[pos] = slice,
            None => self.destinations.push(slice),
        }
        self
    }

    pub fn with_country(mut self, id: u32, name: impl Into<String>) -> Self {
        self.countries.push(Country {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_board_types(mut self, board_types: Vec<BoardTypeInfo>) -> Self {
        self.board_types = board_types;
        self
    }

    /// Checks that destination names and per-list ids are unique.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Invalid` naming the first duplicate found
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for slice in &self.destinations {
            if slice.destination.trim().is_empty() {
                return Err(CatalogError::Invalid("destination name is empty".to_string()));
            }
            if !names.insert(slice.destination.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "destination '{}' listed twice",
                    slice.destination
                )));
            }
            ensure_unique_ids(&slice.destination, "hotel", &slice.hotels)?;
            ensure_unique_ids(&slice.destination, "lunch", &slice.meals.lunch)?;
            ensure_unique_ids(&slice.destination, "dinner", &slice.meals.dinner)?;
        }

        let mut country_ids = HashSet::new();
        for country in &self.countries {
            if !country_ids.insert(country.id) {
                return Err(CatalogError::Invalid(format!(
                    "country id {} listed twice",
                    country.id
                )));
            }
        }
        Ok(())
    }

    /// Number of destinations.
    pub fn destinations_len(&self) -> usize {
        self.destinations.len()
    }

    fn slice(&self, destination: &str) -> Option<&DestinationCatalog> {
        self.destinations.iter().find(|d| d.destination == destination)
    }
}

fn ensure_unique_ids<Id>(
    destination: &str,
    kind: &str,
    entries: &[CatalogEntry<Id>],
) -> Result<(), CatalogError>
where
    Id: Copy + Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(CatalogError::Invalid(format!(
                "{} id {} listed twice for '{}'",
                kind, entry.id, destination
            )));
        }
    }
    Ok(())
}

impl Catalog for InMemoryCatalog {
    fn destinations(&self) -> Vec<String> {
        self.destinations.iter().map(|d| d.destination.clone()).collect()
    }

    fn hotels_for(&self, destination: &str) -> Vec<Hotel> {
        self.slice(destination)
            .map(|d| d.hotels.clone())
            .unwrap_or_default()
    }

    fn meals_for(&self, destination: &str) -> MealOptions {
        self.slice(destination)
            .map(|d| d.meals.clone())
            .unwrap_or_default()
    }

    fn board_types(&self) -> Vec<BoardTypeInfo> {
        if self.board_types.is_empty() {
            BoardTypeInfo::standard()
        } else {
            self.board_types.clone()
        }
    }

    fn countries(&self) -> Vec<Country> {
        self.countries.clone()
    }
}
