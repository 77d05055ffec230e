//! Domain error model.

use thiserror::Error;

use crate::id::{ProductId, RecipeId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic catalog failures (validation, data
/// integrity, unknown ids). Input coercion belongs to the transport layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a non-positive quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A catalog invariant was violated (e.g. a reused identifier).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,

    /// A recipe box was requested for an unknown recipe.
    #[error("recipe {0} not found")]
    RecipeNotFound(RecipeId),

    /// A recipe references a product that is not in the catalog.
    #[error("recipe {recipe_id} references missing product {product_id}")]
    MissingProduct {
        recipe_id: RecipeId,
        product_id: ProductId,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether the failure is an absence rather than a malfunction.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound | Self::RecipeNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_product_message_names_both_ids() {
        let err = DomainError::MissingProduct {
            recipe_id: RecipeId::new(3),
            product_id: ProductId::new(99),
        };
        assert_eq!(err.to_string(), "recipe 3 references missing product 99");
    }

    #[test]
    fn not_found_classification() {
        assert!(DomainError::not_found().is_not_found());
        assert!(DomainError::RecipeNotFound(RecipeId::new(1)).is_not_found());
        assert!(!DomainError::validation("x").is_not_found());
    }
}
