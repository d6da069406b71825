//! Error types for catalog loading and validation

use thiserror::Error;

/// Errors that can occur while building an `IngredientCatalog`.
///
/// Resolver lookups never fail; only catalog construction does.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog document could not be read
    #[error("I/O error reading catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog document is not well-formed
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Same icon id declared twice
    #[error("Duplicate icon id '{0}'")]
    DuplicateIconId(String),

    /// Same category declared twice
    #[error("Duplicate category '{0}'")]
    DuplicateCategory(String),

    /// Category points at an icon that is not in the catalog
    #[error("Category '{category}' has default icon '{icon_id}' which is not in the catalog")]
    UnresolvedDefaultIcon { category: String, icon_id: String },

    /// The generic fallback icon is missing
    #[error("Fallback icon '{0}' is not in the catalog")]
    MissingFallbackIcon(String),

    /// Category tag outside the closed set
    #[error("Unknown category '{category}' in {context}")]
    UnknownCategory { category: String, context: String },

    /// Shelf life must be at least one day
    #[error("Shelf life for '{name}' must be at least 1 day")]
    InvalidShelfLife { name: String },
}
