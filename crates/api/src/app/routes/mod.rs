use axum::Router;

pub mod products;
pub mod recipes;
pub mod system;

/// Router for the catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/api/products", products::router())
        .nest("/api/recipes", recipes::router())
}
