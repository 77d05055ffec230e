use serde::Serialize;

use biobox_core::{Entity, ProductId, RecipeId};
use biobox_products::{Product, Unit};

use crate::allergens::derive_allergens;

/// Dietary category tags used by the reference recipes.
pub mod dietary {
    pub const VEGETARIAN: &str = "vegetarisch";
    pub const VEGAN: &str = "vegan";
    pub const GLUTEN_FREE: &str = "glutenfrei";
    pub const LACTOSE_FREE: &str = "laktosefrei";
    pub const LOW_CARB: &str = "kohlenhydratarm";
    pub const KETO: &str = "ketogen";
    pub const PALEO: &str = "paleo";
}

/// One line of a recipe: how much of which product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub product_id: ProductId,
    pub quantity: f64,
    /// Unit as written in the recipe; the product's own unit applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl Ingredient {
    pub fn new(product_id: u32, quantity: f64, unit: Unit) -> Self {
        Self {
            product_id: ProductId::new(product_id),
            quantity,
            unit: Some(unit),
        }
    }

    pub fn unitless(product_id: u32, quantity: f64) -> Self {
        Self {
            product_id: ProductId::new(product_id),
            quantity,
            unit: None,
        }
    }
}

/// A recipe as authored, before its allergens are known.
///
/// Only [`RecipeDefinition::finalize`] turns this into a [`Recipe`], so no
/// reader can observe a recipe with an incomplete allergen set.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDefinition {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub servings: u32,
    pub dietary_categories: Vec<String>,
    pub cooking_time: u32,
}

impl RecipeDefinition {
    /// Derive allergens against `products` and freeze the recipe.
    pub fn finalize(self, products: &[Product]) -> Recipe {
        let allergens = derive_allergens(&self.ingredients, products);
        Recipe {
            id: self.id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            servings: self.servings,
            dietary_categories: self.dietary_categories,
            cooking_time: self.cooking_time,
            allergens,
        }
    }
}

/// A finalized, immutable recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    id: RecipeId,
    name: String,
    description: String,
    ingredients: Vec<Ingredient>,
    instructions: Vec<String>,
    servings: u32,
    dietary_categories: Vec<String>,
    cooking_time: u32,
    allergens: Vec<String>,
}

impl Recipe {
    pub fn id_typed(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Base yield the ingredient quantities are written for.
    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn dietary_categories(&self) -> &[String] {
        &self.dietary_categories
    }

    /// Cooking time in minutes.
    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn allergens(&self) -> &[String] {
        &self.allergens
    }

    pub fn has_allergen(&self, tag: &str) -> bool {
        self.allergens.iter().any(|a| a == tag)
    }

    pub fn has_dietary_category(&self, tag: &str) -> bool {
        self.dietary_categories.iter().any(|c| c == tag)
    }
}

impl Entity for Recipe {
    type Id = RecipeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use biobox_products::allergens;

    pub(crate) fn quinoa() -> Product {
        Product::new(ProductId::new(13), "Bio-Quinoa", "Getreide", Unit::Gram)
    }

    pub(crate) fn oats() -> Product {
        Product::new(ProductId::new(14), "Bio-Haferflocken", "Getreide", Unit::Gram)
            .with_allergens([allergens::GLUTEN])
    }

    pub(crate) fn definition(id: u32, ingredients: Vec<Ingredient>) -> RecipeDefinition {
        RecipeDefinition {
            id: RecipeId::new(id),
            name: format!("Rezept {id}"),
            description: String::new(),
            ingredients,
            instructions: vec!["Alles mischen".to_string()],
            servings: 2,
            dietary_categories: vec![dietary::VEGETARIAN.to_string()],
            cooking_time: 15,
        }
    }

    #[test]
    fn finalize_derives_allergens_from_ingredients() {
        let products = vec![quinoa(), oats()];
        let recipe = definition(
            1,
            vec![Ingredient::new(13, 200.0, Unit::Gram), Ingredient::new(14, 50.0, Unit::Gram)],
        )
        .finalize(&products);

        assert_eq!(recipe.allergens(), &["Gluten".to_string()]);
        assert!(recipe.has_allergen("Gluten"));
        assert!(recipe.has_dietary_category(dietary::VEGETARIAN));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let products = vec![quinoa()];
        let recipe = definition(
            7,
            vec![Ingredient::new(13, 0.5, Unit::Gram), Ingredient::unitless(13, 1.0)],
        )
        .finalize(&products);

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["cookingTime"], 15);
        assert_eq!(json["dietaryCategories"][0], "vegetarisch");
        assert_eq!(json["ingredients"][0]["productId"], 13);
        assert_eq!(json["ingredients"][0]["unit"], "g");
        assert!(json["ingredients"][1].get("unit").is_none());
        assert_eq!(json["allergens"], serde_json::json!([]));
    }
}
