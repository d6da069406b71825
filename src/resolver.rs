// 🔎 Ingredient Resolver - Name → category / icon / shelf life
//
// Pure lookups over an immutable `IngredientCatalog`. Nothing here fails:
// absence is `None`, and icon resolution always ends on a catalog icon.
//
// Icon resolution is an ordered chain:
//   1. explicit icon id (if the catalog knows it)
//   2. the category's default icon
//   3. FALLBACK_ICON_ID

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::catalog::IngredientCatalog;
use crate::entities::{CategoryId, IconSubject, Ingredient, FALLBACK_ICON_ID};

/// Remove every whitespace character, so "다진 마늘" looks up as "다진마늘"
pub fn normalize_lookup_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Read-only view over a catalog. Cheap to copy; share freely.
#[derive(Debug, Clone, Copy)]
pub struct IngredientResolver<'a> {
    catalog: &'a IngredientCatalog,
}

impl<'a> IngredientResolver<'a> {
    pub fn new(catalog: &'a IngredientCatalog) -> Self {
        IngredientResolver { catalog }
    }

    pub fn catalog(&self) -> &'a IngredientCatalog {
        self.catalog
    }

    /// Exact, case-sensitive category lookup. `None` means uncategorized.
    pub fn resolve_category(&self, name: &str) -> Option<&'a CategoryId> {
        self.catalog.category_of(name)
    }

    /// Exact shelf-life lookup in days
    pub fn resolve_shelf_life_days(&self, name: &str) -> Option<u32> {
        self.catalog.shelf_life_of(name)
    }

    pub fn category_label(&self, category: &CategoryId) -> Option<&'a str> {
        self.catalog.category(category).map(|c| c.label.as_str())
    }

    // ------------------------------------------------------------------------
    // Icon chain
    // ------------------------------------------------------------------------

    /// Stage 1: an explicitly assigned icon, if the catalog knows it
    pub fn explicit_icon(&self, subject: &impl IconSubject) -> Option<&'a str> {
        let id = subject.icon_id()?;
        self.catalog.icons().get(id).map(|entry| entry.id.as_str())
    }

    /// Stage 2: the default icon of the declared category
    pub fn category_default_icon(&self, subject: &impl IconSubject) -> Option<&'a str> {
        let definition = self.catalog.category(subject.category()?)?;
        self.catalog
            .icons()
            .get(&definition.default_icon_id)
            .map(|entry| entry.id.as_str())
    }

    /// Icon id to render for `subject`. Always an id present in the catalog.
    pub fn resolve_icon_id(&self, subject: &impl IconSubject) -> &'a str {
        self.explicit_icon(subject)
            .or_else(|| self.category_default_icon(subject))
            .unwrap_or_else(|| {
                debug!(
                    icon_id = subject.icon_id().unwrap_or(""),
                    category = subject.category().map(|c| c.as_str()).unwrap_or(""),
                    "no usable icon hint, using fallback"
                );
                self.fallback_icon()
            })
    }

    fn fallback_icon(&self) -> &'a str {
        // Catalog construction guarantees the fallback entry exists
        self.catalog
            .icons()
            .get(FALLBACK_ICON_ID)
            .map(|entry| entry.id.as_str())
            .unwrap_or(FALLBACK_ICON_ID)
    }

    /// Icon id whose display name is exactly `name`.
    ///
    /// Searches the hinted category first, then every category in
    /// declaration order; the first match wins.
    pub fn find_icon_id_by_name(&self, name: &str, category: Option<&CategoryId>) -> Option<&'a str> {
        let icons = self.catalog.icons();

        let scoped = category.and_then(|c| {
            icons
                .items_in(c)
                .iter()
                .find(|entry| entry.display_name == name)
        });

        scoped
            .or_else(|| icons.iter().find(|entry| entry.display_name == name))
            .map(|entry| entry.id.as_str())
    }

    // ------------------------------------------------------------------------
    // Derived suggestions
    // ------------------------------------------------------------------------

    /// `added_on` plus the curated shelf life; `None` when none is known
    pub fn suggest_expiry(&self, name: &str, added_on: NaiveDate) -> Option<NaiveDate> {
        let days = self.resolve_shelf_life_days(name)?;
        added_on.checked_add_days(Days::new(u64::from(days)))
    }

    /// Copy of `ingredient` with missing category, icon and expiry filled in.
    /// Explicit values are never replaced.
    pub fn enrich(&self, ingredient: &Ingredient) -> Ingredient {
        let mut enriched = ingredient.clone();

        if enriched.category.is_none() {
            enriched.category = self.resolve_category(&enriched.name).cloned();
        }

        if self.explicit_icon(&enriched).is_none() {
            if let Some(id) = self.find_icon_id_by_name(&enriched.name, enriched.category.as_ref()) {
                enriched.icon_id = Some(id.to_string());
            }
            let resolved = self.resolve_icon_id(&enriched);
            enriched.icon_id = Some(resolved.to_string());
        }

        if enriched.expires_on.is_none() {
            if let Some(added_at) = enriched.added_at {
                enriched.expires_on = self.suggest_expiry(&enriched.name, added_at);
            }
        }

        enriched
    }
}

impl IngredientResolver<'static> {
    /// Resolver over the built-in catalog
    pub fn builtin() -> Self {
        IngredientResolver::new(IngredientCatalog::builtin())
    }
}

// ============================================================================
// TESTS
// ============================================================================
