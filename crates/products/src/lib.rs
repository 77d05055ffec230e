//! Products domain module.
//!
//! This crate contains the bio product model and the read-only product query
//! engine, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod product;
pub mod query;

pub use product::{NutritionalInfo, Product, Unit, allergens, nutrients};
pub use query::{NutritionGoal, ProductFilters, ProductQuery};
