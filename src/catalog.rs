// 📚 Ingredient Catalog - Static lookup tables as data
//
// Four tables, loaded once and never mutated:
// - category definitions (label + default icon)
// - icon catalog (item lists per category)
// - name -> category
// - name -> shelf-life days
//
// The default catalog is embedded at compile time. Alternative catalogs can
// be loaded from a JSON file with the same shape.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::entities::{
    CategoryDefinition, CategoryId, IconCatalog, IconCatalogEntry, FALLBACK_ICON_ID,
};
use crate::error::CatalogError;

// ============================================================================
// FILE FORMAT
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    categories: Vec<CategoryFile>,

    #[serde(default)]
    name_to_category: HashMap<String, CategoryId>,

    #[serde(default)]
    shelf_life_days: HashMap<String, u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryFile {
    value: CategoryId,
    label: String,
    default_icon_id: String,
    #[serde(default)]
    items: Vec<ItemFile>,
}

#[derive(Debug, Deserialize)]
struct ItemFile {
    id: String,
    name: String,
}

// ============================================================================
// BUILT-IN CATALOG
// ============================================================================

static BUILTIN_JSON: &str = include_str!("data/catalog.json");

static BUILTIN: LazyLock<IngredientCatalog> = LazyLock::new(|| {
    IngredientCatalog::from_json(BUILTIN_JSON).expect("embedded catalog.json should be valid")
});

// ============================================================================
// INGREDIENT CATALOG
// ============================================================================

/// Immutable registry of every static table the resolver reads.
///
/// Construct it once at startup (or use [`IngredientCatalog::builtin`]) and
/// share it by reference; nothing in here changes after construction.
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    categories: Vec<CategoryDefinition>,
    icons: IconCatalog,
    name_to_category: HashMap<String, CategoryId>,
    shelf_life_days: HashMap<String, u32>,
}

impl IngredientCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> &'static IngredientCatalog {
        &BUILTIN
    }

    /// Load catalog from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), "loading ingredient catalog");
        Self::from_json(&content)
    }

    /// Parse and validate a catalog document
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_parts(file)
    }

    fn from_parts(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut categories: Vec<CategoryDefinition> = Vec::with_capacity(file.categories.len());
        let mut icons = IconCatalog::new();

        for category in file.categories {
            if !category.value.is_known() {
                return Err(CatalogError::UnknownCategory {
                    category: category.value.to_string(),
                    context: "category table".to_string(),
                });
            }
            if categories.iter().any(|c| c.value == category.value) {
                return Err(CatalogError::DuplicateCategory(category.value.to_string()));
            }

            let items = category
                .items
                .into_iter()
                .map(|item| IconCatalogEntry {
                    id: item.id,
                    display_name: item.name,
                    category: category.value.clone(),
                })
                .collect();
            icons
                .push_group(category.value.clone(), items)
                .map_err(CatalogError::DuplicateIconId)?;

            categories.push(CategoryDefinition::new(
                category.value,
                category.label,
                category.default_icon_id,
            ));
        }

        // Defaults are checked after every list is in, so a category may point
        // at an icon declared further down.
        for definition in &categories {
            if !icons.contains(&definition.default_icon_id) {
                return Err(CatalogError::UnresolvedDefaultIcon {
                    category: definition.value.to_string(),
                    icon_id: definition.default_icon_id.clone(),
                });
            }
        }

        if !icons.contains(FALLBACK_ICON_ID) {
            return Err(CatalogError::MissingFallbackIcon(FALLBACK_ICON_ID.to_string()));
        }

        if let Some((name, category)) = file
            .name_to_category
            .iter()
            .find(|(_, category)| !category.is_known())
        {
            return Err(CatalogError::UnknownCategory {
                category: category.to_string(),
                context: format!("name table entry '{}'", name),
            });
        }

        for (name, days) in &file.shelf_life_days {
            if *days == 0 {
                return Err(CatalogError::InvalidShelfLife { name: name.clone() });
            }
            if let Some(category) = file.name_to_category.get(name) {
                if !category.has_curated_shelf_life() {
                    warn!(name = %name, category = %category, "shelf life listed for a category that is normally left out");
                }
            }
        }

        debug!(
            categories = categories.len(),
            icons = icons.len(),
            names = file.name_to_category.len(),
            shelf_life_entries = file.shelf_life_days.len(),
            "ingredient catalog ready"
        );

        Ok(IngredientCatalog {
            categories,
            icons,
            name_to_category: file.name_to_category,
            shelf_life_days: file.shelf_life_days,
        })
    }

    /// Category definitions in declaration order
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| &c.value == id)
    }

    pub fn icons(&self) -> &IconCatalog {
        &self.icons
    }

    /// Exact entry of the name -> category table
    pub fn category_of(&self, name: &str) -> Option<&CategoryId> {
        self.name_to_category.get(name)
    }

    /// Exact entry of the name -> shelf-life table
    pub fn shelf_life_of(&self, name: &str) -> Option<u32> {
        self.shelf_life_days.get(name).copied()
    }

    pub fn name_count(&self) -> usize {
        self.name_to_category.len()
    }

    pub fn shelf_life_count(&self) -> usize {
        self.shelf_life_days.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = r#"{
        "categories": [
            { "value": "seasoning", "label": "양념", "defaultIconId": "seasoning",
              "items": [ { "id": "seasoning", "name": "양념" }, { "id": "salt", "name": "소금" } ] },
            { "value": "etc", "label": "기타", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "기타" } ] }
        ],
        "nameToCategory": { "소금": "seasoning" },
        "shelfLifeDays": { "소금": 730 }
    }"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = IngredientCatalog::builtin();

        assert_eq!(catalog.categories().len(), 8);
        let order: Vec<CategoryId> = catalog.categories().iter().map(|c| c.value.clone()).collect();
        assert_eq!(order, CategoryId::KNOWN.to_vec());

        assert!(catalog.icons().contains("etc"));
        assert!(catalog.name_count() > 0);
        assert!(catalog.shelf_life_count() > 0);
    }

    #[test]
    fn test_builtin_defaults_resolve() {
        let catalog = IngredientCatalog::builtin();
        for definition in catalog.categories() {
            let entry = catalog.icons().get(&definition.default_icon_id).unwrap();
            assert_eq!(entry.category, definition.value);
        }
    }

    #[test]
    fn test_builtin_shelf_life_skips_etc_and_homemade() {
        let catalog = IngredientCatalog::builtin();
        for name in ["쌀", "생수", "커피", "기타", "김치", "국", "반찬"] {
            assert!(catalog.category_of(name).is_some(), "{} should be categorized", name);
            assert!(catalog.shelf_life_of(name).is_none(), "{} should have no shelf life", name);
        }
    }

    #[test]
    fn test_small_catalog() {
        let catalog = IngredientCatalog::from_json(SMALL).unwrap();

        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.category(&CategoryId::Seasoning).unwrap().label, "양념");
        assert!(catalog.category(&CategoryId::Meat).is_none());
        assert_eq!(catalog.category_of("소금"), Some(&CategoryId::Seasoning));
        assert_eq!(catalog.shelf_life_of("소금"), Some(730));
        assert_eq!(catalog.icons().get("salt").unwrap().category, CategoryId::Seasoning);
    }

    #[test]
    fn test_rejects_duplicate_icon_id() {
        let json = r#"{ "categories": [
            { "value": "etc", "label": "기타", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "기타" } ] },
            { "value": "homemade", "label": "반찬", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "반찬" } ] }
        ] }"#;

        let err = IngredientCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIconId(ref id) if id == "etc"));
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let json = r#"{ "categories": [
            { "value": "etc", "label": "기타", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "기타" } ] },
            { "value": "etc", "label": "기타2", "defaultIconId": "etc", "items": [] }
        ] }"#;

        let err = IngredientCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn test_rejects_unresolved_default_icon() {
        let json = r#"{ "categories": [
            { "value": "etc", "label": "기타", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "기타" } ] },
            { "value": "fruit", "label": "과일", "defaultIconId": "fruit",
              "items": [ { "id": "apple", "name": "사과" } ] }
        ] }"#;

        let err = IngredientCatalog::from_json(json).unwrap_err();
        match err {
            CatalogError::UnresolvedDefaultIcon { category, icon_id } => {
                assert_eq!(category, "fruit");
                assert_eq!(icon_id, "fruit");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rejects_missing_fallback_icon() {
        let json = r#"{ "categories": [
            { "value": "fruit", "label": "과일", "defaultIconId": "apple",
              "items": [ { "id": "apple", "name": "사과" } ] }
        ] }"#;

        let err = IngredientCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::MissingFallbackIcon(_)));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let in_table = r#"{ "categories": [
            { "value": "frozen", "label": "냉동", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "기타" } ] }
        ] }"#;
        assert!(matches!(
            IngredientCatalog::from_json(in_table).unwrap_err(),
            CatalogError::UnknownCategory { .. }
        ));

        let in_names = r#"{ "categories": [
            { "value": "etc", "label": "기타", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "기타" } ] }
        ], "nameToCategory": { "아이스크림": "frozen" } }"#;
        let err = IngredientCatalog::from_json(in_names).unwrap_err();
        assert!(err.to_string().contains("아이스크림"));
    }

    #[test]
    fn test_rejects_zero_shelf_life() {
        let json = r#"{ "categories": [
            { "value": "etc", "label": "기타", "defaultIconId": "etc",
              "items": [ { "id": "etc", "name": "기타" } ] }
        ], "shelfLifeDays": { "우유": 0 } }"#;

        let err = IngredientCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidShelfLife { ref name } if name == "우유"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = IngredientCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let catalog = IngredientCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.shelf_life_of("소금"), Some(730));
    }

    #[test]
    fn test_from_missing_file() {
        let err = IngredientCatalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
