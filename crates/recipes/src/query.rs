//! Read-only queries over a recipe collection.

use std::collections::HashSet;

use biobox_core::{ProductId, RecipeId, find_by_id};

use crate::recipe::Recipe;

/// Recipe listing filters. All set fields must hold (AND); unset fields and
/// empty lists are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilters {
    /// Keep recipes tagged with at least one of these categories.
    pub dietary_categories: Vec<String>,
    /// Drop recipes containing at least one of these allergens.
    pub exclude_allergens: Vec<String>,
    /// Inclusive upper bound on cooking time, minutes.
    pub max_cooking_time: Option<u32>,
    /// Minimum base yield.
    pub servings: Option<u32>,
}

impl RecipeFilters {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.dietary_categories.is_empty()
            && !self
                .dietary_categories
                .iter()
                .any(|c| recipe.has_dietary_category(c))
        {
            return false;
        }

        if self.exclude_allergens.iter().any(|a| recipe.has_allergen(a)) {
            return false;
        }

        if let Some(max) = self.max_cooking_time {
            if recipe.cooking_time() > max {
                return false;
            }
        }

        if let Some(min) = self.servings {
            if recipe.servings() < min {
                return false;
            }
        }

        true
    }
}

/// Recipe query engine borrowing a finalized recipe collection.
#[derive(Debug, Clone, Copy)]
pub struct RecipeQuery<'a> {
    recipes: &'a [Recipe],
}

impl<'a> RecipeQuery<'a> {
    pub fn new(recipes: &'a [Recipe]) -> Self {
        Self { recipes }
    }

    pub fn all(&self) -> &'a [Recipe] {
        self.recipes
    }

    pub fn by_id(&self, id: RecipeId) -> Option<&'a Recipe> {
        find_by_id(self.recipes, &id)
    }

    /// Recipes matching `filters`, catalog order.
    pub fn filter(&self, filters: &RecipeFilters) -> Vec<&'a Recipe> {
        self.recipes.iter().filter(|r| filters.matches(r)).collect()
    }

    /// Distinct dietary categories across recipes, first-seen order.
    pub fn dietary_categories(&self) -> Vec<String> {
        distinct(self.recipes.iter().flat_map(|r| r.dietary_categories()))
    }

    /// Distinct allergen tags across recipes, first-seen order.
    pub fn allergens(&self) -> Vec<String> {
        distinct(self.recipes.iter().flat_map(|r| r.allergens()))
    }

    /// Recipes that can be cooked entirely from `available` products.
    pub fn suggestions(&self, available: &[ProductId]) -> Vec<&'a Recipe> {
        let available: HashSet<ProductId> = available.iter().copied().collect();
        self.recipes
            .iter()
            .filter(|r| r.ingredients().iter().all(|i| available.contains(&i.product_id)))
            .collect()
    }
}

fn distinct<'s>(tags: impl Iterator<Item = &'s String>) -> Vec<String> {
    let mut seen: HashSet<&'s str> = HashSet::new();
    let mut out = Vec::new();
    for tag in tags {
        if seen.insert(tag.as_str()) {
            out.push(tag.clone());
        }
    }
    out
}
