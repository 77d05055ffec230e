//! Embedded reference dataset: the bio product portfolio and its recipes.

use biobox_core::{ProductId, RecipeId};
use biobox_products::{NutritionalInfo, Product, Unit, allergens, nutrients};
use biobox_recipes::{Ingredient, RecipeDefinition, dietary};

use biobox_products::Unit::{Gram as G, Milliliter as Ml, Piece};

fn product(id: u32, name: &str, category: &str, unit: Unit) -> Product {
    Product::new(ProductId::new(id), name, category, unit)
}

fn protein(amount: f64) -> NutritionalInfo {
    NutritionalInfo::new().with(nutrients::PROTEIN, amount)
}

/// The reference product portfolio, in catalog order.
pub fn products() -> Vec<Product> {
    vec![
        // Gemüse
        product(1, "Bio-Karotten", "Gemüse", G),
        product(2, "Bio-Zwiebeln", "Gemüse", G),
        product(3, "Bio-Tomaten", "Gemüse", G),
        product(4, "Bio-Paprika", "Gemüse", G),
        product(5, "Bio-Zucchini", "Gemüse", G),
        product(6, "Bio-Brokkoli", "Gemüse", G),
        product(7, "Bio-Spinat", "Gemüse", G),
        product(8, "Bio-Kartoffeln", "Gemüse", G),
        // Obst
        product(9, "Bio-Äpfel", "Obst", G),
        product(10, "Bio-Bananen", "Obst", G),
        product(11, "Bio-Zitronen", "Obst", Piece),
        product(12, "Bio-Avocado", "Obst", Piece),
        // Getreide & Hülsenfrüchte
        product(13, "Bio-Quinoa", "Getreide", G).with_nutrition(
            NutritionalInfo::new()
                .with(nutrients::PROTEIN, 14.1)
                .with(nutrients::CARBS, 58.5),
        ),
        product(14, "Bio-Haferflocken", "Getreide", G).with_allergens([allergens::GLUTEN]),
        product(15, "Bio-Vollkornreis", "Getreide", G),
        product(16, "Bio-Linsen rot", "Hülsenfrüchte", G).with_nutrition(protein(23.5)),
        product(17, "Bio-Kichererbsen", "Hülsenfrüchte", G).with_nutrition(protein(19.3)),
        product(18, "Bio-Kidneybohnen", "Hülsenfrüchte", G).with_nutrition(protein(22.5)),
        // Nüsse & Samen
        product(19, "Bio-Mandeln", "Nüsse", G).with_allergens([allergens::NUTS]),
        product(20, "Bio-Walnüsse", "Nüsse", G).with_allergens([allergens::NUTS]),
        product(21, "Bio-Sesam", "Samen", G).with_allergens([allergens::SESAME]),
        product(22, "Bio-Leinsamen", "Samen", G),
        // Öle, Kräuter & Gewürze
        product(23, "Bio-Olivenöl", "Öl", Ml),
        product(24, "Bio-Kokosnussöl", "Öl", Ml),
        product(25, "Bio-Basilikum", "Kräuter", G),
        product(26, "Bio-Petersilie", "Kräuter", G),
        product(27, "Bio-Knoblauch", "Gewürze", G),
        product(28, "Bio-Ingwer", "Gewürze", G),
        product(29, "Bio-Kurkuma", "Gewürze", G),
        product(30, "Bio-Kreuzkümmel", "Gewürze", G),
        // Milchprodukte
        product(31, "Bio-Mozzarella", "Milchprodukte", G).with_allergens([allergens::LACTOSE]),
        product(32, "Bio-Parmesan", "Milchprodukte", G).with_allergens([allergens::LACTOSE]),
        product(33, "Bio-Sahne", "Milchprodukte", Ml).with_allergens([allergens::LACTOSE]),
        // Weitere
        product(34, "Bio-Kokosmilch", "Milchalternativen", Ml),
        product(35, "Bio-Mandelmilch", "Milchalternativen", Ml).with_allergens([allergens::NUTS]),
        product(36, "Bio-Sojasauce", "Sauce", Ml)
            .with_allergens([allergens::SOY, allergens::GLUTEN]),
        product(37, "Bio-Balsamico", "Essig", Ml),
        product(38, "Bio-Honig", "Süßungsmittel", Ml),
        product(39, "Bio-Agavendicksaft", "Süßungsmittel", Ml),
        product(40, "Bio-Gemüsebrühe", "Brühe", Ml),
    ]
}

struct Draft {
    id: u32,
    name: &'static str,
    description: &'static str,
    ingredients: &'static [(u32, f64, Unit)],
    instructions: &'static [&'static str],
    servings: u32,
    dietary_categories: &'static [&'static str],
    cooking_time: u32,
}

impl From<&Draft> for RecipeDefinition {
    fn from(d: &Draft) -> Self {
        RecipeDefinition {
            id: RecipeId::new(d.id),
            name: d.name.to_string(),
            description: d.description.to_string(),
            ingredients: d
                .ingredients
                .iter()
                .map(|&(product_id, quantity, unit)| Ingredient::new(product_id, quantity, unit))
                .collect(),
            instructions: d.instructions.iter().map(|s| s.to_string()).collect(),
            servings: d.servings,
            dietary_categories: d.dietary_categories.iter().map(|s| s.to_string()).collect(),
            cooking_time: d.cooking_time,
        }
    }
}

const VEGAN_GLUTEN_FREE: &[&str] = &[dietary::VEGETARIAN, dietary::VEGAN, dietary::GLUTEN_FREE];
const VEGETARIAN_GLUTEN_FREE: &[&str] = &[dietary::VEGETARIAN, dietary::GLUTEN_FREE];

const RECIPES: &[Draft] = &[
    Draft {
        id: 1,
        name: "Quinoa-Gemüse-Bowl",
        description: "Eine nährstoffreiche Bowl mit buntem Gemüse und Quinoa",
        ingredients: &[
            (13, 200.0, G),
            (1, 150.0, G),
            (6, 200.0, G),
            (12, 1.0, Piece),
            (23, 30.0, Ml),
            (11, 0.5, Piece),
            (19, 50.0, G),
        ],
        instructions: &[
            "Quinoa nach Packungsanweisung kochen",
            "Karotten und Brokkoli dämpfen",
            "Avocado in Würfel schneiden",
            "Mandeln rösten",
            "Alles in einer Bowl anrichten",
            "Mit Olivenöl und Zitrone beträufeln",
        ],
        servings: 2,
        dietary_categories: VEGAN_GLUTEN_FREE,
        cooking_time: 25,
    },
    Draft {
        id: 2,
        name: "Rote Linsen-Curry",
        description: "Würziges Curry mit roten Linsen und Kokosmilch",
        ingredients: &[
            (16, 250.0, G),
            (34, 400.0, Ml),
            (2, 100.0, G),
            (3, 300.0, G),
            (27, 15.0, G),
            (28, 20.0, G),
            (29, 5.0, G),
            (30, 5.0, G),
            (23, 25.0, Ml),
            (7, 100.0, G),
        ],
        instructions: &[
            "Zwiebeln, Knoblauch und Ingwer fein hacken",
            "In Olivenöl anschwitzen",
            "Gewürze hinzufügen und kurz rösten",
            "Tomaten und Linsen dazugeben",
            "Mit Kokosmilch ablöschen",
            "20 Minuten köcheln lassen",
            "Spinat unterrühren",
        ],
        servings: 4,
        dietary_categories: VEGAN_GLUTEN_FREE,
        cooking_time: 30,
    },
    Draft {
        id: 3,
        name: "Mediterraner Quinoa-Salat",
        description: "Frischer Salat mit Quinoa, Gemüse und Mozzarella",
        ingredients: &[
            (13, 150.0, G),
            (3, 200.0, G),
            (4, 150.0, G),
            (5, 200.0, G),
            (31, 150.0, G),
            (25, 20.0, G),
            (23, 40.0, Ml),
            (37, 20.0, Ml),
            (21, 15.0, G),
        ],
        instructions: &[
            "Quinoa kochen und abkühlen lassen",
            "Gemüse in kleine Würfel schneiden",
            "Mozzarella zerteilen",
            "Basilikum hacken",
            "Dressing aus Olivenöl und Balsamico mischen",
            "Alle Zutaten vermengen",
            "Mit Sesam bestreuen",
        ],
        servings: 3,
        dietary_categories: VEGETARIAN_GLUTEN_FREE,
        cooking_time: 20,
    },
    Draft {
        id: 4,
        name: "Vegane Buddha Bowl",
        description: "Ausgewogene Bowl mit Hülsenfrüchten und geröstetem Gemüse",
        ingredients: &[
            (17, 200.0, G),
            (8, 300.0, G),
            (1, 200.0, G),
            (6, 250.0, G),
            (12, 1.0, Piece),
            (20, 40.0, G),
            (23, 35.0, Ml),
            (29, 8.0, G),
            (26, 15.0, G),
        ],
        instructions: &[
            "Kichererbsen über Nacht einweichen und kochen",
            "Kartoffeln und Karotten würfeln",
            "Gemüse mit Olivenöl und Kurkuma marinieren",
            "Im Ofen bei 200°C 25 Min rösten",
            "Brokkoli separat dämpfen",
            "Avocado schneiden, Walnüsse hacken",
            "Alles in Bowls anrichten",
            "Mit Petersilie garnieren",
        ],
        servings: 2,
        dietary_categories: VEGAN_GLUTEN_FREE,
        cooking_time: 45,
    },
    Draft {
        id: 5,
        name: "Geröstetes Gemüse mit Quinoa",
        description: "Buntes Ofengemüse auf Quinoa-Bett",
        ingredients: &[
            (13, 180.0, G),
            (4, 200.0, G),
            (5, 250.0, G),
            (2, 150.0, G),
            (32, 50.0, G),
            (23, 30.0, Ml),
            (25, 10.0, G),
            (27, 10.0, G),
        ],
        instructions: &[
            "Quinoa nach Anweisung zubereiten",
            "Gemüse in große Stücke schneiden",
            "Mit Olivenöl, Knoblauch und Gewürzen marinieren",
            "Bei 220°C 20-25 Min rösten",
            "Quinoa als Basis in Teller geben",
            "Geröstetes Gemüse darauf anrichten",
            "Mit Parmesan und Basilikum garnieren",
        ],
        servings: 3,
        dietary_categories: VEGETARIAN_GLUTEN_FREE,
        cooking_time: 35,
    },
    Draft {
        id: 6,
        name: "Grüner Smoothie-Bowl",
        description: "Nährstoffreiche Bowl mit grünem Gemüse und Früchten",
        ingredients: &[
            (7, 100.0, G),
            (10, 2.0, Piece),
            (12, 0.5, Piece),
            (35, 200.0, Ml),
            (14, 50.0, G),
            (22, 15.0, G),
            (19, 30.0, G),
            (39, 15.0, Ml),
        ],
        instructions: &[
            "Spinat, Banane, Avocado und Mandelmilch mixen",
            "Agavendicksaft nach Geschmack hinzufügen",
            "In Bowl füllen",
            "Mit Haferflocken bestreuen",
            "Mandeln grob hacken und darüber geben",
            "Mit Leinsamen garnieren",
        ],
        servings: 1,
        dietary_categories: &[dietary::VEGETARIAN, dietary::VEGAN],
        cooking_time: 10,
    },
];

/// The reference recipes as raw definitions, in catalog order.
pub fn recipes() -> Vec<RecipeDefinition> {
    RECIPES.iter().map(RecipeDefinition::from).collect()
}
