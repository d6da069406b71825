// 🖼️ Icon Catalog - One entry per ingredient icon asset
//
// Entries are grouped by category in declaration order. The order matters:
// display-name lookups without a category hint return the first hit.

use std::collections::HashMap;

use super::category::CategoryId;

/// Icon id returned when nothing better is known
pub const FALLBACK_ICON_ID: &str = "etc";

// ============================================================================
// ICON CATALOG ENTRY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct IconCatalogEntry {
    /// Unique across the whole catalog (e.g., "tofu", "soy_sauce")
    pub id: String,

    /// Name shown to the user (e.g., "두부")
    pub display_name: String,

    /// Category whose item list owns this entry
    pub category: CategoryId,
}

// ============================================================================
// ICON CATALOG
// ============================================================================

/// Item lists per category, plus an id index over all of them.
///
/// Built once by `IngredientCatalog`; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    groups: Vec<(CategoryId, Vec<IconCatalogEntry>)>,

    /// id -> (group index, item index)
    index: HashMap<String, (usize, usize)>,
}

impl IconCatalog {
    pub fn new() -> Self {
        IconCatalog::default()
    }

    /// Append a category's item list. Returns the id of the first entry that
    /// was already present in the catalog, if any; that list is not added.
    pub(crate) fn push_group(
        &mut self,
        category: CategoryId,
        items: Vec<IconCatalogEntry>,
    ) -> Result<(), String> {
        let group_idx = self.groups.len();
        let mut staged: HashMap<String, (usize, usize)> = HashMap::new();

        for (item_idx, item) in items.iter().enumerate() {
            if self.index.contains_key(&item.id) || staged.contains_key(&item.id) {
                return Err(item.id.clone());
            }
            staged.insert(item.id.clone(), (group_idx, item_idx));
        }

        self.index.extend(staged);
        self.groups.push((category, items));
        Ok(())
    }

    /// Look up an entry by icon id
    pub fn get(&self, id: &str) -> Option<&IconCatalogEntry> {
        let &(group, item) = self.index.get(id)?;
        self.groups.get(group).and_then(|(_, items)| items.get(item))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Item list of one category (empty when the category has no list)
    pub fn items_in(&self, category: &CategoryId) -> &[IconCatalogEntry] {
        self.groups
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// All entries, category by category, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &IconCatalogEntry> {
        self.groups.iter().flat_map(|(_, items)| items.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
