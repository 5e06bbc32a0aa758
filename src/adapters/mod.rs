//! Adapters - Implementations of port interfaces.
//!
//! Each adapter implements one or more ports defined in the `ports` module.

pub mod catalog;

pub use catalog::{default_catalog, InMemoryCatalog, YamlCatalogLoader};
