// Entity Models
//
// Each entity is a plain immutable value:
// - Category: closed tag set + display definition
// - Icon: catalog entries grouped per category
// - Ingredient: the inventory record the resolver reads from

pub mod category;
pub mod icon;
pub mod ingredient;

pub use category::{CategoryDefinition, CategoryId};
pub use icon::{IconCatalog, IconCatalogEntry, FALLBACK_ICON_ID};
pub use ingredient::{IconHint, IconSubject, Ingredient};
