// 🏷️ Category Entity - Closed set of ingredient categories
//
// Problem solved:
// - Remote APIs send category tags as free strings ("vegetable", "dairy_processed", ...)
// - Screens need a stable, exhaustive set to group and label ingredients
// - Unrecognized tags are kept verbatim instead of silently widening the type

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY ID
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryId {
    Vegetable,
    Fruit,
    Meat,
    Seafood,
    DairyProcessed,
    Seasoning,
    Etc,
    Homemade,

    /// Tag received from outside that is not part of the closed set
    Unknown(String),
}

impl CategoryId {
    /// Every known category, in catalog declaration order
    pub const KNOWN: [CategoryId; 8] = [
        CategoryId::Vegetable,
        CategoryId::Fruit,
        CategoryId::Meat,
        CategoryId::Seafood,
        CategoryId::DairyProcessed,
        CategoryId::Seasoning,
        CategoryId::Etc,
        CategoryId::Homemade,
    ];

    /// Parse a wire tag. Total: anything unrecognized becomes `Unknown`.
    pub fn parse(tag: &str) -> CategoryId {
        match tag {
            "vegetable" => CategoryId::Vegetable,
            "fruit" => CategoryId::Fruit,
            "meat" => CategoryId::Meat,
            "seafood" => CategoryId::Seafood,
            "dairy_processed" => CategoryId::DairyProcessed,
            "seasoning" => CategoryId::Seasoning,
            "etc" => CategoryId::Etc,
            "homemade" => CategoryId::Homemade,
            other => CategoryId::Unknown(other.to_string()),
        }
    }

    /// Wire tag for this category
    pub fn as_str(&self) -> &str {
        match self {
            CategoryId::Vegetable => "vegetable",
            CategoryId::Fruit => "fruit",
            CategoryId::Meat => "meat",
            CategoryId::Seafood => "seafood",
            CategoryId::DairyProcessed => "dairy_processed",
            CategoryId::Seasoning => "seasoning",
            CategoryId::Etc => "etc",
            CategoryId::Homemade => "homemade",
            CategoryId::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CategoryId::Unknown(_))
    }

    /// Categories deliberately left out of the shelf-life table
    pub fn has_curated_shelf_life(&self) -> bool {
        !matches!(self, CategoryId::Etc | CategoryId::Homemade)
    }
}

impl From<String> for CategoryId {
    fn from(tag: String) -> Self {
        CategoryId::parse(&tag)
    }
}

impl From<CategoryId> for String {
    fn from(category: CategoryId) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CATEGORY DEFINITION
// ============================================================================

/// One row of the category table: display label plus the icon used when an
/// ingredient only carries its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefinition {
    pub value: CategoryId,
    pub label: String,
    pub default_icon_id: String,
}

impl CategoryDefinition {
    pub fn new(value: CategoryId, label: impl Into<String>, default_icon_id: impl Into<String>) -> Self {
        CategoryDefinition {
            value,
            label: label.into(),
            default_icon_id: default_icon_id.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
