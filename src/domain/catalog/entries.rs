//! Catalog value types: hotels, meals, board type descriptions, countries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BoardType, HotelId, MealId, Money};

/// A priced, selectable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry<Id> {
    pub id: Id,
    pub name: String,
    pub price: Money,
}

impl<Id> CatalogEntry<Id> {
    pub fn new(id: Id, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// A hotel offered at a destination; `price` is per night.
pub type Hotel = CatalogEntry<HotelId>;

/// A lunch or dinner option offered at a destination.
pub type Meal = CatalogEntry<MealId>;

/// Lunch and dinner options for one destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealOptions {
    #[serde(default)]
    pub lunch: Vec<Meal>,
    #[serde(default)]
    pub dinner: Vec<Meal>,
}

/// Display information for a board type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTypeInfo {
    pub code: BoardType,
    pub name: String,
    pub description: String,
}

impl BoardTypeInfo {
    /// Standard descriptions for every board type.
    pub fn standard() -> Vec<BoardTypeInfo> {
        BoardType::ALL
            .iter()
            .map(|code| BoardTypeInfo {
                code: *code,
                name: code.to_string(),
                description: match code {
                    BoardType::FullBoard => "Lunch and dinner can be selected every day",
                    BoardType::HalfBoard => "Either lunch or dinner can be selected each day",
                    BoardType::NoBoard => "Accommodation only, no meals",
                }
                .to_string(),
            })
            .collect()
    }
}

/// A country a traveler may hold citizenship of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub name: String,
}

/// The catalog slice for one destination, as consumed by pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationCatalog {
    pub destination: String,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub meals: MealOptions,
}

impl DestinationCatalog {
    /// Finds a hotel by id.
    pub fn hotel(&self, id: HotelId) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    /// Finds a lunch option by id.
    pub fn lunch(&self, id: MealId) -> Option<&Meal> {
        self.meals.lunch.iter().find(|m| m.id == id)
    }

    /// Finds a dinner option by id.
    pub fn dinner(&self, id: MealId) -> Option<&Meal> {
        self.meals.dinner.iter().find(|m| m.id == id)
    }
}
