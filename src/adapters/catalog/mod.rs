//! Catalog adapters.
//!
//! - `InMemoryCatalog` - catalog held in memory, built in code or loaded
//! - `YamlCatalogLoader` - reads an `InMemoryCatalog` from YAML
//! - `default_catalog` - built-in seed data

mod in_memory;
mod seed;
mod yaml_file;

pub use in_memory::InMemoryCatalog;
pub use seed::default_catalog;
pub use yaml_file::YamlCatalogLoader;
