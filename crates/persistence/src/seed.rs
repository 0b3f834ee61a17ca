use std::path::Path;

use domain::{Customer, Discount, Product, Store};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedError};

/// Entities to preload into the in-memory repositories.
///
/// Every list is optional in the JSON document:
///
/// ```json
/// {
///   "stores": [{ "id": "…", "is_active": true }],
///   "customers": [{ "id": "…", "is_active": true }],
///   "discounts": [{ "code": "SPRING", "is_active": true }],
///   "products": [{ "id": "…", "price": { "cents": 1000 } }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub discounts: Vec<Discount>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Seed {
    /// Parses a seed document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a seed document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use common::StoreId;

    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let seed = Seed::from_json(r#"{ "discounts": [{ "code": "SPRING", "is_active": false }] }"#)
            .unwrap();

        assert!(seed.stores.is_empty());
        assert!(seed.products.is_empty());
        assert_eq!(seed.discounts, vec![Discount::new("SPRING", false)]);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = Seed::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let store = Store::new(StoreId::new(), true);
        let seed = Seed {
            stores: vec![store],
            ..Seed::default()
        };

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), serde_json::to_string(&seed).unwrap()).unwrap();

        assert_eq!(Seed::from_path(file.path()).unwrap(), seed);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Seed::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
