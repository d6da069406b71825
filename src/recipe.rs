// 🍲 Recipe Ingredient Mapper
//
// The recipe API returns ingredient lines without icons or categories, often
// as one combined string ("다진 마늘 1큰술"). This maps them into rows the
// recipe-detail screen can render: split amount, strip internal whitespace,
// then backfill category and icon from the catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::{CategoryId, IconHint, IconSubject};
use crate::parser::parse_material_name;
use crate::resolver::{normalize_lookup_name, IngredientResolver};

// ============================================================================
// API SHAPES
// ============================================================================

/// One ingredient line as sent by the recipe API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>) -> Self {
        RecipeIngredient {
            name: name.into(),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }
}

/// Row rendered on the recipe-detail screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientView {
    /// Name as shown (amount removed, original spacing kept)
    pub name: String,

    /// Whitespace-free form used for every lookup
    pub lookup_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,

    pub icon_id: String,

    /// Whether the household already has this ingredient
    pub in_pantry: bool,
}

impl IconSubject for RecipeIngredientView {
    fn icon_id(&self) -> Option<&str> {
        Some(&self.icon_id)
    }

    fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }
}

// ============================================================================
// MAPPER
// ============================================================================

/// Map recipe lines with no pantry information
pub fn map_recipe_ingredients(
    resolver: &IngredientResolver,
    ingredients: &[RecipeIngredient],
) -> Vec<RecipeIngredientView> {
    map_recipe_ingredients_with_pantry(resolver, ingredients, &HashSet::new())
}

/// Map recipe lines, marking those whose lookup name is in `pantry`.
///
/// Pantry names are compared after the same whitespace stripping.
pub fn map_recipe_ingredients_with_pantry(
    resolver: &IngredientResolver,
    ingredients: &[RecipeIngredient],
    pantry: &HashSet<String>,
) -> Vec<RecipeIngredientView> {
    let pantry: HashSet<String> = pantry.iter().map(|n| normalize_lookup_name(n)).collect();

    ingredients
        .iter()
        .map(|ingredient| map_one(resolver, ingredient, &pantry))
        .collect()
}

fn map_one(
    resolver: &IngredientResolver,
    ingredient: &RecipeIngredient,
    pantry: &HashSet<String>,
) -> RecipeIngredientView {
    let amount_given = ingredient
        .amount
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty());

    let (name, amount) = match amount_given {
        Some(amount) => (ingredient.name.trim().to_string(), Some(amount.to_string())),
        None => {
            let split = parse_material_name(&ingredient.name);
            (split.name, split.amount)
        }
    };

    let lookup_name = normalize_lookup_name(&name);
    let category = resolver.resolve_category(&lookup_name).cloned();

    let icon_id = match resolver.find_icon_id_by_name(&lookup_name, category.as_ref()) {
        Some(id) => id,
        None => resolver.resolve_icon_id(&IconHint {
            icon_id: None,
            category: category.as_ref(),
        }),
    };

    RecipeIngredientView {
        in_pantry: pantry.contains(&lookup_name),
        name,
        lookup_name,
        amount,
        category,
        icon_id: icon_id.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
