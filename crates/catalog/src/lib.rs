//! Catalog store: the immutable product and recipe collections the service
//! answers every query from.
//!
//! The store is built once. Recipes are finalized (allergens derived) during
//! construction, so a [`Catalog`] never exposes a recipe whose allergen set is
//! incomplete.

pub mod seed;
pub mod store;

pub use store::Catalog;
