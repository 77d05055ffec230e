use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use biobox_core::{Entity, ProductId};

/// Allergen tags used by the reference catalog.
///
/// The vocabulary is open: products may carry tags that are not listed here.
pub mod allergens {
    pub const GLUTEN: &str = "Gluten";
    pub const LACTOSE: &str = "Laktose";
    pub const NUTS: &str = "Nüsse";
    pub const SOY: &str = "Soja";
    pub const EGGS: &str = "Eier";
    pub const FISH: &str = "Fisch";
    pub const SHELLFISH: &str = "Schalentiere";
    pub const SESAME: &str = "Sesam";
}

/// Nutrient keys understood by the recommendation filters.
pub mod nutrients {
    pub const PROTEIN: &str = "protein";
    pub const CARBS: &str = "carbs";
}

/// Measurement unit a product is sold and measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "Stück")]
    Piece,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Milliliter => "ml",
            Unit::Piece => "Stück",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrient amounts per 100 units of the product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutritionalInfo(BTreeMap<String, f64>);

impl NutritionalInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, nutrient: impl Into<String>, amount: f64) -> Self {
        self.0.insert(nutrient.into(), amount);
        self
    }

    pub fn get(&self, nutrient: &str) -> Option<f64> {
        self.0.get(nutrient).copied()
    }

    pub fn protein(&self) -> Option<f64> {
        self.get(nutrients::PROTEIN)
    }

    pub fn carbs(&self) -> Option<f64> {
        self.get(nutrients::CARBS)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A certified-organic catalog product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    unit: Unit,
    allergens: Vec<String>,
    nutritional_info: NutritionalInfo,
    is_bio: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        unit: Unit,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit,
            allergens: Vec::new(),
            nutritional_info: NutritionalInfo::default(),
            is_bio: true,
        }
    }

    /// Attach allergen tags. Duplicates are dropped, first occurrence wins.
    pub fn with_allergens<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.allergens.contains(&tag) {
                self.allergens.push(tag);
            }
        }
        self
    }

    pub fn with_nutrition(mut self, info: NutritionalInfo) -> Self {
        self.nutritional_info = info;
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn allergens(&self) -> &[String] {
        &self.allergens
    }

    pub fn nutritional_info(&self) -> &NutritionalInfo {
        &self.nutritional_info
    }

    pub fn is_bio(&self) -> bool {
        self.is_bio
    }

    pub fn has_allergen(&self, tag: &str) -> bool {
        self.allergens.iter().any(|a| a == tag)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
