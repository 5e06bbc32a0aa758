//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Catalog` - Read-only lookup of hotels, meals, board types and countries

mod catalog;

pub use catalog::{Catalog, CatalogError};
