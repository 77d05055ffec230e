//! Allergen derivation for recipes.
//!
//! A recipe's allergens are the union of the allergens of every product its
//! ingredients reference. Unresolvable references are skipped here so that a
//! single bad line never makes a recipe unusable; the recipe box generator is
//! the place that refuses them.

use biobox_core::{ProductId, find_by_id};
use biobox_products::Product;

use crate::recipe::Ingredient;

/// Union of allergen tags over all resolvable ingredients, first-seen order.
pub fn derive_allergens(ingredients: &[Ingredient], products: &[Product]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for ingredient in ingredients {
        let Some(product) = find_by_id(products, &ingredient.product_id) else {
            continue;
        };
        for tag in product.allergens() {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Ingredient product ids that do not resolve against `products`.
pub fn unresolved_products(ingredients: &[Ingredient], products: &[Product]) -> Vec<ProductId> {
    ingredients
        .iter()
        .map(|i| i.product_id)
        .filter(|id| find_by_id(products, id).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::tests::{oats, quinoa};
    use biobox_products::{Unit, allergens};

    #[test]
    fn quinoa_and_oats_yield_gluten() {
        let products = vec![quinoa(), oats()];
        let ingredients = vec![
            Ingredient::new(13, 200.0, Unit::Gram),
            Ingredient::new(14, 50.0, Unit::Gram),
        ];
        assert_eq!(derive_allergens(&ingredients, &products), vec!["Gluten"]);
    }

    #[test]
    fn shared_tags_are_reported_once() {
        let products = vec![
            oats(),
            Product::new(ProductId::new(36), "Bio-Sojasauce", "Sauce", Unit::Milliliter)
                .with_allergens([allergens::SOY, allergens::GLUTEN]),
        ];
        let ingredients = vec![
            Ingredient::new(14, 50.0, Unit::Gram),
            Ingredient::new(36, 20.0, Unit::Milliliter),
        ];
        assert_eq!(derive_allergens(&ingredients, &products), vec!["Gluten", "Soja"]);
    }

    #[test]
    fn missing_products_are_skipped() {
        let products = vec![oats()];
        let ingredients = vec![
            Ingredient::new(99, 10.0, Unit::Gram),
            Ingredient::new(14, 50.0, Unit::Gram),
        ];
        assert_eq!(derive_allergens(&ingredients, &products), vec!["Gluten"]);
        assert_eq!(unresolved_products(&ingredients, &products), vec![ProductId::new(99)]);
    }

    #[test]
    fn no_ingredients_no_allergens() {
        assert!(derive_allergens(&[], &[oats()]).is_empty());
    }
}
