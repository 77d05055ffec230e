//! Read-only queries over a product catalog snapshot.

use std::collections::BTreeSet;

use tracing::debug;

use biobox_core::{ProductId, find_by_id};

use crate::product::Product;

/// Protein threshold (per 100 units) for the `high-protein` goal, exclusive.
pub const HIGH_PROTEIN_MIN: f64 = 15.0;

/// Carbohydrate threshold (per 100 units) for the `low-carb` goal, exclusive.
pub const LOW_CARB_MAX: f64 = 20.0;

/// Nutrition goals the recommendation filter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionGoal {
    HighProtein,
    LowCarb,
}

impl NutritionGoal {
    /// Evaluation order. The first goal present in a request wins.
    pub const PRIORITY: [NutritionGoal; 2] = [NutritionGoal::HighProtein, NutritionGoal::LowCarb];

    pub fn as_str(self) -> &'static str {
        match self {
            NutritionGoal::HighProtein => "high-protein",
            NutritionGoal::LowCarb => "low-carb",
        }
    }

    fn admits(self, product: &Product) -> bool {
        let info = product.nutritional_info();
        match self {
            NutritionGoal::HighProtein => info.protein().is_some_and(|p| p > HIGH_PROTEIN_MIN),
            NutritionGoal::LowCarb => info.carbs().is_some_and(|c| c < LOW_CARB_MAX),
        }
    }
}

/// Conjunctive product filter used by catalog listings.
///
/// Each field is optional; an unset field (or an empty exclusion list)
/// matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub category: Option<String>,
    pub search: Option<String>,
    pub exclude_allergens: Vec<String>,
}

impl ProductFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none() && self.exclude_allergens.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !category_matches(product, &category.to_lowercase()) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            if !name_contains(product, &term.to_lowercase()) {
                return false;
            }
        }
        !has_any_allergen(product, &self.exclude_allergens)
    }
}

/// Product query engine borrowing a catalog snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ProductQuery<'a> {
    products: &'a [Product],
}

impl<'a> ProductQuery<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    /// All products, catalog order.
    pub fn all(&self) -> &'a [Product] {
        self.products
    }

    pub fn by_id(&self, id: ProductId) -> Option<&'a Product> {
        find_by_id(self.products, &id)
    }

    /// Products whose category equals `category`, ignoring case.
    pub fn by_category(&self, category: &str) -> Vec<&'a Product> {
        let wanted = category.to_lowercase();
        self.products
            .iter()
            .filter(|p| category_matches(p, &wanted))
            .collect()
    }

    /// Products whose name contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&'a Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| name_contains(p, &term))
            .collect()
    }

    /// Products carrying none of the excluded allergen tags.
    pub fn without_allergens<S: AsRef<str>>(&self, exclude: &[S]) -> Vec<&'a Product> {
        self.products
            .iter()
            .filter(|p| !has_any_allergen(p, exclude))
            .collect()
    }

    pub fn filter(&self, filters: &ProductFilters) -> Vec<&'a Product> {
        self.products.iter().filter(|p| filters.matches(p)).collect()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct allergen tags over all products, sorted.
    pub fn allergens(&self) -> Vec<String> {
        self.products
            .iter()
            .flat_map(|p| p.allergens().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Goal-driven recommendations.
    ///
    /// Only the highest-priority recognized goal is applied; goals are never
    /// intersected. Without a recognized goal the whole catalog is returned.
    pub fn recommendations<S: AsRef<str>>(&self, goals: &[S]) -> Vec<&'a Product> {
        let goal = NutritionGoal::PRIORITY
            .into_iter()
            .find(|g| goals.iter().any(|requested| requested.as_ref() == g.as_str()));

        match goal {
            Some(goal) => {
                debug!(goal = goal.as_str(), "applying recommendation filter");
                self.products.iter().filter(|p| goal.admits(p)).collect()
            }
            None => self.products.iter().collect(),
        }
    }
}

fn category_matches(product: &Product, wanted_lower: &str) -> bool {
    product.category().to_lowercase() == wanted_lower
}

fn name_contains(product: &Product, term_lower: &str) -> bool {
    product.name().to_lowercase().contains(term_lower)
}

fn has_any_allergen<S: AsRef<str>>(product: &Product, exclude: &[S]) -> bool {
    exclude.iter().any(|tag| product.has_allergen(tag.as_ref()))
}
