//! Response envelope and query-string coercion helpers.

use axum::Json;
use axum::extract::Query;
use serde::Serialize;

use biobox_core::ProductId;

use crate::app::errors::ApiError;

// -------------------------
// Response envelope
// -------------------------

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        count: None,
        data,
    })
}

pub fn ok_list<T: Serialize>(data: Vec<T>) -> Json<Envelope<Vec<T>>> {
    Json(Envelope {
        success: true,
        count: Some(data.len()),
        data,
    })
}

// -------------------------
// Query parameters
// -------------------------

/// Raw query pairs in request order; keys may repeat.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl From<Query<Vec<(String, String)>>> for QueryParams {
    fn from(Query(pairs): Query<Vec<(String, String)>>) -> Self {
        Self(pairs)
    }
}

impl QueryParams {
    /// First non-empty value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Every non-empty value for `key`; a single value becomes a one-element list.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn u32(&self, key: &str) -> Result<Option<u32>, ApiError> {
        self.first(key)
            .map(|raw| {
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| ApiError::bad_input(format!("{key} must be a non-negative integer")))
            })
            .transpose()
    }

    pub fn positive_f64(&self, key: &str) -> Result<Option<f64>, ApiError> {
        self.first(key)
            .map(|raw| match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
                _ => Err(ApiError::bad_input(format!("{key} must be a positive number"))),
            })
            .transpose()
    }

    /// Comma-separated product ids; entries that do not coerce are dropped.
    pub fn product_ids(&self, key: &str) -> Vec<ProductId> {
        self.all(key)
            .iter()
            .flat_map(|list| list.split(','))
            .filter_map(ProductId::coerce)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn repeated_keys_collect_in_order() {
        let q = params(&[("goals", "low-carb"), ("x", "1"), ("goals", "high-protein")]);
        assert_eq!(q.all("goals"), vec!["low-carb", "high-protein"]);
        assert_eq!(q.first("goals"), Some("low-carb"));
        assert!(q.all("missing").is_empty());
    }

    #[test]
    fn empty_values_count_as_absent() {
        let q = params(&[("category", ""), ("maxCookingTime", "")]);
        assert_eq!(q.first("category"), None);
        assert_eq!(q.u32("maxCookingTime").unwrap(), None);
    }

    #[test]
    fn integer_params_are_strict() {
        assert_eq!(params(&[("servings", "3")]).u32("servings").unwrap(), Some(3));
        assert!(params(&[("servings", "abc")]).u32("servings").is_err());
        assert!(params(&[("servings", "-1")]).u32("servings").is_err());
        assert!(params(&[("servings", "2.5")]).u32("servings").is_err());
    }

    #[test]
    fn positive_numbers_only() {
        assert_eq!(params(&[("servings", "1.5")]).positive_f64("servings").unwrap(), Some(1.5));
        for bad in ["0", "-2", "abc", "inf", "NaN"] {
            assert!(
                params(&[("servings", bad)]).positive_f64("servings").is_err(),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn product_id_lists_drop_garbage() {
        let q = params(&[("products", "1, 2,x,,7abc"), ("products", "40")]);
        let ids: Vec<u32> = q.product_ids("products").iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![1, 2, 7, 40]);
    }
}
