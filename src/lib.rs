// Pantry Resolver - Core Library
// Ingredient name → category / icon / shelf life, plus name/amount parsing.
// Consumed by the ingredient screens, the receipt flow and the recipe mapper.

pub mod entities;
pub mod error;
pub mod catalog;
pub mod resolver;
pub mod parser;
pub mod recipe;

// Re-export commonly used types
pub use entities::{
    CategoryDefinition, CategoryId,
    IconCatalog, IconCatalogEntry, FALLBACK_ICON_ID,
    IconHint, IconSubject, Ingredient,
};
pub use error::CatalogError;
pub use catalog::IngredientCatalog;
pub use resolver::{IngredientResolver, normalize_lookup_name};
pub use parser::{
    MaterialName, ReceiptItem, UNIT_TOKENS,
    has_quantity, parse_material_name, parse_receipt_lines,
    load_receipt_csv, read_receipt_csv,
};
pub use recipe::{
    RecipeIngredient, RecipeIngredientView,
    map_recipe_ingredients, map_recipe_ingredients_with_pantry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
