use std::collections::HashSet;

use tracing::{info, warn};

use biobox_core::{DomainError, DomainResult, ProductId, RecipeId};
use biobox_products::{Product, ProductQuery};
use biobox_recipes::{
    PriceTable, Recipe, RecipeBoxGenerator, RecipeDefinition, RecipeQuery, unresolved_products,
};

use crate::seed;

/// Immutable catalog of products and finalized recipes.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    recipes: Vec<Recipe>,
    prices: PriceTable,
}

impl Catalog {
    /// Build a catalog from products and raw recipe definitions.
    ///
    /// Products are validated first, then every recipe is finalized against
    /// them. Ingredients referencing unknown products are accepted here (they
    /// contribute no allergens) and logged; generating a box for such a recipe
    /// fails later.
    pub fn new(products: Vec<Product>, definitions: Vec<RecipeDefinition>) -> DomainResult<Self> {
        validate_products(&products)?;
        validate_definitions(&definitions)?;

        let recipes: Vec<Recipe> = definitions
            .into_iter()
            .map(|definition| {
                for product_id in unresolved_products(&definition.ingredients, &products) {
                    warn!(
                        recipe_id = %definition.id,
                        product_id = %product_id,
                        "recipe references unknown product; skipped for allergen derivation"
                    );
                }
                definition.finalize(&products)
            })
            .collect();

        info!(
            products = products.len(),
            recipes = recipes.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            recipes,
            prices: PriceTable::default(),
        })
    }

    /// The embedded reference catalog.
    pub fn seeded() -> DomainResult<Self> {
        Self::new(seed::products(), seed::recipes())
    }

    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_query().by_id(id)
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipe_query().by_id(id)
    }

    /// Look a product up by loosely-typed id text; unparsable input is absent.
    pub fn find_product_by_id(&self, raw: &str) -> Option<&Product> {
        ProductId::coerce(raw).and_then(|id| self.product(id))
    }

    /// Look a recipe up by loosely-typed id text; unparsable input is absent.
    pub fn find_recipe_by_id(&self, raw: &str) -> Option<&Recipe> {
        RecipeId::coerce(raw).and_then(|id| self.recipe(id))
    }

    pub fn product_query(&self) -> ProductQuery<'_> {
        ProductQuery::new(&self.products)
    }

    pub fn recipe_query(&self) -> RecipeQuery<'_> {
        RecipeQuery::new(&self.recipes)
    }

    pub fn box_generator(&self) -> RecipeBoxGenerator<'_> {
        RecipeBoxGenerator::new(&self.recipes, &self.products, &self.prices)
    }
}

fn validate_products(products: &[Product]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for product in products {
        let id = product.id_typed();
        if id.get() == 0 {
            return Err(DomainError::invalid_id("product id must be positive"));
        }
        if !seen.insert(id) {
            return Err(DomainError::invariant(format!("duplicate product id {id}")));
        }
        if product.name().trim().is_empty() {
            return Err(DomainError::validation(format!("product {id} has an empty name")));
        }
    }
    Ok(())
}

fn validate_definitions(definitions: &[RecipeDefinition]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for definition in definitions {
        let id = definition.id;
        if id.get() == 0 {
            return Err(DomainError::invalid_id("recipe id must be positive"));
        }
        if !seen.insert(id) {
            return Err(DomainError::invariant(format!("duplicate recipe id {id}")));
        }
        if definition.servings == 0 {
            return Err(DomainError::validation(format!("recipe {id} must serve at least one")));
        }
        if let Some(bad) = definition
            .ingredients
            .iter()
            .find(|i| !(i.quantity.is_finite() && i.quantity > 0.0))
        {
            return Err(DomainError::validation(format!(
                "recipe {id}: quantity of product {} must be positive",
                bad.product_id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biobox_products::Unit;
    use biobox_recipes::Ingredient;

    fn definition(id: u32, ingredients: Vec<Ingredient>) -> RecipeDefinition {
        RecipeDefinition {
            id: RecipeId::new(id),
            name: format!("Rezept {id}"),
            description: String::new(),
            ingredients,
            instructions: Vec::new(),
            servings: 1,
            dietary_categories: Vec::new(),
            cooking_time: 0,
        }
    }

    #[test]
    fn seeded_catalog_loads() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.products().len(), 40);
        assert_eq!(catalog.recipes().len(), 6);
    }

    #[test]
    fn every_seeded_ingredient_resolves() {
        let catalog = Catalog::seeded().unwrap();
        for recipe in catalog.recipes() {
            assert!(
                unresolved_products(recipe.ingredients(), catalog.products()).is_empty(),
                "recipe {} has dangling ingredients",
                recipe.id_typed()
            );
        }
    }

    #[test]
    fn seeded_recipe_allergens_are_derived() {
        let catalog = Catalog::seeded().unwrap();
        let allergens = |id: u32| catalog.recipe(RecipeId::new(id)).unwrap().allergens().to_vec();

        assert_eq!(allergens(1), vec!["Nüsse"]);
        assert!(allergens(2).is_empty());
        assert_eq!(allergens(3), vec!["Laktose", "Sesam"]);
        assert_eq!(allergens(6), vec!["Nüsse", "Gluten"]);
    }

    #[test]
    fn textual_lookup_coerces_ids() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.find_product_by_id("13").map(Product::name), Some("Bio-Quinoa"));
        assert_eq!(catalog.find_product_by_id(" 14 ").map(Product::name), Some("Bio-Haferflocken"));
        assert_eq!(catalog.find_recipe_by_id("2").map(Recipe::name), Some("Rote Linsen-Curry"));
        assert!(catalog.find_product_by_id("quinoa").is_none());
        assert!(catalog.find_recipe_by_id("").is_none());
        assert!(catalog.find_recipe_by_id("999").is_none());
    }

    #[test]
    fn rejects_duplicate_product_ids() {
        let products = vec![
            Product::new(ProductId::new(1), "A", "Obst", Unit::Gram),
            Product::new(ProductId::new(1), "B", "Obst", Unit::Gram),
        ];
        let err = Catalog::new(products, vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn rejects_duplicate_recipe_ids_and_bad_quantities() {
        let products = vec![Product::new(ProductId::new(1), "A", "Obst", Unit::Gram)];

        let err = Catalog::new(products.clone(), vec![definition(1, vec![]), definition(1, vec![])])
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));

        let err = Catalog::new(products, vec![definition(2, vec![Ingredient::new(1, 0.0, Unit::Gram)])])
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn dangling_references_are_tolerated_at_load() {
        let products = vec![Product::new(ProductId::new(1), "A", "Obst", Unit::Gram)
            .with_allergens(["Sesam"])];
        let catalog = Catalog::new(
            products,
            vec![definition(
                5,
                vec![Ingredient::new(1, 10.0, Unit::Gram), Ingredient::new(2, 10.0, Unit::Gram)],
            )],
        )
        .unwrap();

        assert_eq!(catalog.recipe(RecipeId::new(5)).unwrap().allergens(), &["Sesam".to_string()]);
        let err = catalog
            .box_generator()
            .generate(RecipeId::new(5), 1.0, chrono::Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingProduct { .. }));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every recipe's allergens equal the union of its
            /// products' allergens, whatever subset of the catalog it uses.
            #[test]
            fn recipe_allergens_are_union_of_products(
                picks in prop::collection::vec(1u32..=40, 0..12),
            ) {
                let products = seed::products();
                let ingredients: Vec<Ingredient> = picks
                    .iter()
                    .map(|id| Ingredient::new(*id, 10.0, Unit::Gram))
                    .collect();
                let catalog = Catalog::new(products, vec![definition(1, ingredients)]).unwrap();
                let recipe = catalog.recipe(RecipeId::new(1)).unwrap();

                let mut expected: Vec<String> = picks
                    .iter()
                    .flat_map(|id| catalog.product(ProductId::new(*id)).unwrap().allergens().to_vec())
                    .collect();
                expected.sort();
                expected.dedup();

                let mut got = recipe.allergens().to_vec();
                got.sort();
                prop_assert_eq!(got, expected);
            }
        }
    }
}
