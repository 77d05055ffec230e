//! Placeholder price estimation for recipe boxes.
//!
//! Prices are per 100 units of a product (100 g, 100 ml or 100 pieces) and
//! keyed by product category. This is an estimate, not a pricing feed.

use std::collections::BTreeMap;

/// Base price for categories missing from the table.
pub const DEFAULT_BASE_PRICE: f64 = 5.00;

/// Reference per-category base prices (EUR per 100 units).
const REFERENCE_PRICES: [(&str, f64); 15] = [
    ("Gemüse", 2.50),
    ("Obst", 3.00),
    ("Getreide", 4.00),
    ("Hülsenfrüchte", 5.00),
    ("Nüsse", 8.00),
    ("Samen", 6.00),
    ("Öl", 12.00),
    ("Kräuter", 15.00),
    ("Gewürze", 20.00),
    ("Milchprodukte", 6.00),
    ("Milchalternativen", 3.50),
    ("Sauce", 4.50),
    ("Essig", 5.00),
    ("Süßungsmittel", 7.00),
    ("Brühe", 3.00),
];

/// Category-keyed base price table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    prices: BTreeMap<String, f64>,
    fallback: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(
            REFERENCE_PRICES
                .iter()
                .map(|(category, price)| (category.to_string(), *price)),
            DEFAULT_BASE_PRICE,
        )
    }
}

impl PriceTable {
    pub fn new(prices: impl IntoIterator<Item = (String, f64)>, fallback: f64) -> Self {
        Self {
            prices: prices.into_iter().collect(),
            fallback,
        }
    }

    /// Base price per 100 units for `category` (exact, case-sensitive match).
    pub fn base_price(&self, category: &str) -> f64 {
        self.prices.get(category).copied().unwrap_or(self.fallback)
    }

    /// Unrounded price of `quantity` units of a product in `category`.
    pub fn item_price(&self, category: &str, quantity: f64) -> f64 {
        self.base_price(category) * (quantity / 100.0)
    }
}

/// Round to cents, halves away from zero (half-up for prices).
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
