//! YAML catalog loader.
//!
//! Reads an [`InMemoryCatalog`] from a YAML document:
//!
//! ```yaml
//! countries:
//!   - { id: 1, name: Germany }
//! destinations:
//!   - destination: Istanbul
//!     hotels:
//!       - { id: 1, name: Pera Palace, price: 100 }
//!     meals:
//!       lunch:
//!         - { id: 1, name: Meze plate, price: 20 }
//!       dinner: []
//! ```
//!
//! Negative prices fail to parse; duplicate ids fail validation.

use std::path::Path;

use super::InMemoryCatalog;
use crate::ports::CatalogError;

/// Loads catalogs from YAML text or files.
pub struct YamlCatalogLoader;

impl YamlCatalogLoader {
    /// Parses and validates a catalog from YAML text.
    pub fn parse(yaml: &str) -> Result<InMemoryCatalog, CatalogError> {
        let catalog: InMemoryCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads, parses and validates a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let catalog = Self::parse(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            destinations = catalog.destinations_len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HotelId, Money};
    use crate::ports::Catalog;
    use std::io::Write;

    const SAMPLE: &str = r#"
countries:
  - { id: 1, name: Germany }
  - { id: 2, name: Japan }
destinations:
  - destination: Istanbul
    hotels:
      - { id: 1, name: Pera Palace, price: 100 }
      - { id: 2, name: Galata Inn, price: 55.5 }
    meals:
      lunch:
        - { id: 1, name: Meze plate, price: 20 }
      dinner:
        - { id: 1, name: Fish dinner, price: 45 }
  - destination: Cappadocia
    hotels: []
    meals: {}
"#;

    #[test]
    fn parses_destinations_and_countries() {
        let catalog = YamlCatalogLoader::parse(SAMPLE).unwrap();

        assert_eq!(catalog.destinations(), ["Istanbul", "Cappadocia"]);
        assert_eq!(catalog.countries().len(), 2);
        let hotels = catalog.hotels_for("Istanbul");
        assert_eq!(hotels[1].id, HotelId::new(2));
        assert_eq!(hotels[1].price, Money::try_new(55.5).unwrap());
        assert!(catalog.meals_for("Cappadocia").lunch.is_empty());
    }

    #[test]
    fn board_types_fall_back_to_standard() {
        let catalog = YamlCatalogLoader::parse(SAMPLE).unwrap();
        assert_eq!(catalog.board_types().len(), 3);
    }

    #[test]
    fn rejects_negative_price() {
        let yaml = r#"
destinations:
  - destination: Izmir
    hotels:
      - { id: 1, name: Cheap, price: -10 }
"#;
        let result = YamlCatalogLoader::parse(yaml);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_destinations() {
        let yaml = r#"
destinations:
  - destination: Izmir
  - destination: Izmir
"#;
        let result = YamlCatalogLoader::parse(yaml);
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = YamlCatalogLoader::from_path(file.path()).unwrap();
        assert_eq!(catalog.hotels_for("Istanbul").len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = YamlCatalogLoader::from_path(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
