// 🥬 Ingredient - The household inventory record
//
// Owned by the screens and the remote API, not by the resolver.
// The resolver only reads name/category/icon_id and hands back suggestions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::CategoryId;

// ============================================================================
// ICON SUBJECT
// ============================================================================

/// Anything the icon resolver can pick an icon for.
///
/// Ingredients, recipe rows and receipt items all carry the same two hints:
/// an explicitly assigned icon id and a declared category.
pub trait IconSubject {
    fn icon_id(&self) -> Option<&str>;

    fn category(&self) -> Option<&CategoryId>;
}

/// Bare pair of hints, for callers that do not hold a full record
#[derive(Debug, Clone, Copy, Default)]
pub struct IconHint<'a> {
    pub icon_id: Option<&'a str>,
    pub category: Option<&'a CategoryId>,
}

impl IconSubject for IconHint<'_> {
    fn icon_id(&self) -> Option<&str> {
        self.icon_id
    }

    fn category(&self) -> Option<&CategoryId> {
        self.category
    }
}

// ============================================================================
// INGREDIENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Stable identity (UUID for locally created records)
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,

    /// Free-text amount as entered or parsed (e.g., "120g(1/3모)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
}

impl Ingredient {
    /// Create a new ingredient with a fresh UUID
    pub fn new(name: impl Into<String>) -> Self {
        Ingredient {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            category: None,
            icon_id: None,
            quantity: None,
            added_at: None,
            expires_on: None,
        }
    }

    /// Builder pattern: add category
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Builder pattern: add explicit icon
    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = Some(icon_id.into());
        self
    }

    /// Builder pattern: add quantity text
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Builder pattern: add purchase/entry date
    pub fn with_added_at(mut self, added_at: NaiveDate) -> Self {
        self.added_at = Some(added_at);
        self
    }

    /// Builder pattern: add expiry date
    pub fn with_expires_on(mut self, expires_on: NaiveDate) -> Self {
        self.expires_on = Some(expires_on);
        self
    }
}

impl IconSubject for Ingredient {
    fn icon_id(&self) -> Option<&str> {
        self.icon_id.as_deref()
    }

    fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }
}

// ============================================================================
// TESTS
// ============================================================================
