//! Catalog domain types.
//!
//! The catalog itself is an external, read-only collaborator reached through
//! the [`Catalog`](crate::ports::Catalog) port. This module only defines the
//! values it hands out.

mod entries;

pub use entries::{
    BoardTypeInfo, CatalogEntry, Country, DestinationCatalog, Hotel, Meal, MealOptions,
};
