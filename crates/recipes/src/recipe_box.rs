//! Recipe box generation: a scaled, priced shopping list for one recipe.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use biobox_core::{DomainError, DomainResult, RecipeId, find_by_id};
use biobox_products::{Product, Unit};

use crate::pricing::{PriceTable, round_to_cents};
use crate::recipe::Recipe;

/// Scale factor used when the caller does not ask for one.
pub const DEFAULT_SERVING_ADJUSTMENT: f64 = 1.0;

/// One resolved, scaled line of a recipe box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeBoxItem {
    pub product: Product,
    pub quantity: f64,
    pub unit: Unit,
    pub original_quantity: f64,
}

/// Generated shopping-list artifact. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeBox {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub products: Vec<RecipeBoxItem>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Builds recipe boxes from a finalized catalog snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RecipeBoxGenerator<'a> {
    recipes: &'a [Recipe],
    products: &'a [Product],
    prices: &'a PriceTable,
}

impl<'a> RecipeBoxGenerator<'a> {
    pub fn new(recipes: &'a [Recipe], products: &'a [Product], prices: &'a PriceTable) -> Self {
        Self {
            recipes,
            products,
            prices,
        }
    }

    /// Generate the box for `recipe_id`, scaling every quantity by
    /// `serving_adjustment`.
    ///
    /// Fails with [`DomainError::RecipeNotFound`] for an unknown recipe and
    /// with [`DomainError::MissingProduct`] if any ingredient does not
    /// resolve; no partial box is ever returned.
    pub fn generate(
        &self,
        recipe_id: RecipeId,
        serving_adjustment: f64,
        created_at: DateTime<Utc>,
    ) -> DomainResult<RecipeBox> {
        let recipe = find_by_id(self.recipes, &recipe_id)
            .ok_or(DomainError::RecipeNotFound(recipe_id))?;

        let products = recipe
            .ingredients()
            .iter()
            .map(|ingredient| {
                let product = find_by_id(self.products, &ingredient.product_id).ok_or(
                    DomainError::MissingProduct {
                        recipe_id,
                        product_id: ingredient.product_id,
                    },
                )?;

                Ok(RecipeBoxItem {
                    product: product.clone(),
                    quantity: ingredient.quantity * serving_adjustment,
                    unit: ingredient.unit.unwrap_or(product.unit()),
                    original_quantity: ingredient.quantity,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let total_price = self.estimate_price(&products);
        debug!(
            recipe_id = %recipe_id,
            serving_adjustment,
            items = products.len(),
            total_price,
            "generated recipe box"
        );

        Ok(RecipeBox {
            recipe_id,
            recipe_name: recipe.name().to_string(),
            products,
            total_price,
            created_at,
        })
    }

    /// Rounded sum of the per-category price of every item.
    pub fn estimate_price(&self, items: &[RecipeBoxItem]) -> f64 {
        let total: f64 = items
            .iter()
            .map(|item| self.prices.item_price(item.product.category(), item.quantity))
            .sum();
        round_to_cents(total)
    }
}
