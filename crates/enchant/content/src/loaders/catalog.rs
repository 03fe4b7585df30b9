//! Enchantment catalog loader.

use std::path::Path;

use enchant_core::EnchantmentDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantmentCatalog {
    pub enchantments: Vec<EnchantmentDefinition>,
}

/// Loader for enchantment catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load enchantment definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an EnchantmentCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of EnchantmentDefinitions.
    pub fn load(path: &Path) -> LoadResult<Vec<EnchantmentDefinition>> {
        let content = read_file(path)?;
        let catalog: EnchantmentCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enchantment catalog RON: {}", e))?;

        Ok(catalog.enchantments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"(
    enchantments: [
        (
            id: 50,
            name: "frost",
            display_name: "Frost",
            curse: false,
            min_level: 1,
            max_level: 2,
            targets: [Weapon],
            conflicts: [],
            backing: Custom,
        ),
    ],
)"#;

    #[test]
    fn loads_a_ron_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let defs = CatalogLoader::load(file.path()).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "frost");
        assert_eq!(defs[0].max_level, 2);
        assert!(defs[0].is_custom());
    }

    #[test]
    fn reports_missing_files() {
        let result = CatalogLoader::load(Path::new("/nonexistent/catalog.ron"));
        assert!(result.is_err());
    }

    #[test]
    fn builtin_catalog_round_trips_through_ron() {
        let catalog = EnchantmentCatalog {
            enchantments: crate::catalog::builtin_enchantments(),
        };
        let text = ron::to_string(&catalog).unwrap();
        let reloaded: EnchantmentCatalog = ron::from_str(&text).unwrap();
        assert_eq!(reloaded.enchantments, catalog.enchantments);
    }
}
