//! Strongly-typed identifiers used across the catalog.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of a recipe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u32);

macro_rules! impl_numeric_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub fn get(self) -> u32 {
                self.0
            }

            /// Coerce loosely-typed textual input into an identifier.
            ///
            /// Accepts what a query string or path segment usually carries:
            /// surrounding whitespace, an optional sign and trailing garbage
            /// after the leading digits (`"12abc"` is `12`). Anything that
            /// does not yield a positive integer is `None`.
            pub fn coerce(raw: &str) -> Option<Self> {
                leading_int(raw)
                    .filter(|v| *v > 0)
                    .and_then(|v| u32::try_from(v).ok())
                    .map(Self)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .parse::<u32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                if value == 0 {
                    return Err(DomainError::invalid_id(format!("{}: must be positive", $name)));
                }
                Ok(Self(value))
            }
        }
    };
}

impl_numeric_newtype!(ProductId, "ProductId");
impl_numeric_newtype!(RecipeId, "RecipeId");

/// Leading signed integer of `raw`, ignoring surrounding whitespace and any
/// trailing non-digit characters.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_accepts_plain_and_padded_numbers() {
        assert_eq!(ProductId::coerce("13"), Some(ProductId::new(13)));
        assert_eq!(ProductId::coerce("  7"), Some(ProductId::new(7)));
        assert_eq!(RecipeId::coerce("+4"), Some(RecipeId::new(4)));
    }

    #[test]
    fn coerce_keeps_leading_digits() {
        assert_eq!(ProductId::coerce("12abc"), Some(ProductId::new(12)));
        assert_eq!(RecipeId::coerce("3.9"), Some(RecipeId::new(3)));
    }

    #[test]
    fn coerce_rejects_non_numeric_and_non_positive() {
        assert_eq!(ProductId::coerce("abc"), None);
        assert_eq!(ProductId::coerce(""), None);
        assert_eq!(ProductId::coerce("-"), None);
        assert_eq!(ProductId::coerce("0"), None);
        assert_eq!(ProductId::coerce("-5"), None);
        assert_eq!(ProductId::coerce("99999999999999999999"), None);
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("14".parse::<ProductId>(), Ok(ProductId::new(14)));
        assert!("14g".parse::<ProductId>().is_err());
        assert!("0".parse::<RecipeId>().is_err());
    }

    #[test]
    fn ids_serialize_as_numbers() {
        let json = serde_json::to_string(&RecipeId::new(6)).unwrap();
        assert_eq!(json, "6");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every positive id round-trips through its textual form.
            #[test]
            fn coerce_inverts_display(value in 1u32..) {
                let id = ProductId::new(value);
                prop_assert_eq!(ProductId::coerce(&id.to_string()), Some(id));
            }

            /// Property: coercion never panics on arbitrary input.
            #[test]
            fn coerce_is_total(raw in ".*") {
                let _ = RecipeId::coerce(&raw);
            }
        }
    }
}
