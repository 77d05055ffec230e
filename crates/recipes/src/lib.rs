//! Recipes domain module.
//!
//! Recipe model, allergen derivation, recipe queries and the recipe box
//! generator. Everything here is deterministic and works on borrowed catalog
//! snapshots; nothing performs IO.

pub mod allergens;
pub mod pricing;
pub mod query;
pub mod recipe;
pub mod recipe_box;

pub use allergens::{derive_allergens, unresolved_products};
pub use pricing::PriceTable;
pub use query::{RecipeFilters, RecipeQuery};
pub use recipe::{Ingredient, Recipe, RecipeDefinition, dietary};
pub use recipe_box::{DEFAULT_SERVING_ADJUSTMENT, RecipeBox, RecipeBoxGenerator, RecipeBoxItem};
