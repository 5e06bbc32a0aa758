//! Built-in catalog used when no catalog file is configured.

use once_cell::sync::Lazy;

use super::InMemoryCatalog;
use crate::domain::catalog::{DestinationCatalog, Hotel, Meal, MealOptions};
use crate::domain::foundation::{HotelId, MealId, Money};

static DEFAULT_CATALOG: Lazy<InMemoryCatalog> = Lazy::new(build_default_catalog);

/// Returns the built-in catalog.
pub fn default_catalog() -> &'static InMemoryCatalog {
    &DEFAULT_CATALOG
}

fn hotel(id: u32, name: &str, price: u32) -> Hotel {
    Hotel::new(HotelId::new(id), name, Money::from_units(price))
}

fn meal(id: u32, name: &str, price: u32) -> Meal {
    Meal::new(MealId::new(id), name, Money::from_units(price))
}

fn build_default_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_country(1, "Turkey")
        .with_country(2, "Germany")
        .with_country(3, "United Kingdom")
        .with_country(4, "United States")
        .with_country(5, "Japan")
        .with_destination(DestinationCatalog {
            destination: "Istanbul".to_string(),
            hotels: vec![
                hotel(1, "Pera Palace", 180),
                hotel(2, "Galata Boutique", 110),
                hotel(3, "Sultanahmet Inn", 70),
            ],
            meals: MealOptions {
                lunch: vec![meal(1, "Meze Platter", 18), meal(2, "Bosphorus Fish Sandwich", 9)],
                dinner: vec![meal(1, "Ottoman Tasting Menu", 55), meal(2, "Kebab House", 22)],
            },
        })
        .with_destination(DestinationCatalog {
            destination: "Cappadocia".to_string(),
            hotels: vec![hotel(1, "Cave Suites", 150), hotel(2, "Fairy Chimney Lodge", 95)],
            meals: MealOptions {
                lunch: vec![meal(1, "Pottery Kebab", 20)],
                dinner: vec![meal(1, "Terrace Dinner", 40), meal(2, "Village Home Cooking", 25)],
            },
        })
        .with_destination(DestinationCatalog {
            destination: "Antalya".to_string(),
            hotels: vec![hotel(1, "Kaleici Marina Hotel", 120), hotel(2, "Lara Beach Resort", 210)],
            meals: MealOptions {
                lunch: vec![meal(1, "Beach Club Lunch", 24)],
                dinner: vec![meal(1, "Harbor Seafood", 48)],
            },
        })
}
