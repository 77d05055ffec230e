use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Path, Query},
    response::{IntoResponse, Response},
    routing::get,
};

use biobox_products::ProductFilters;

use crate::app::dto::{self, QueryParams};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
        .route("/meta/categories", get(list_categories))
        .route("/meta/allergens", get(list_allergens))
        .route("/meta/recommendations", get(recommendations))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Query<Vec<(String, String)>>,
) -> Response {
    let params = QueryParams::from(query);
    let filters = ProductFilters {
        category: params.first("category").map(str::to_string),
        search: params.first("search").map(str::to_string),
        exclude_allergens: params.all("excludeAllergens"),
    };

    dto::ok_list(services.catalog.product_query().filter(&filters)).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let product = services
        .catalog
        .find_product_by_id(&id)
        .ok_or(ApiError::NotFound("product"))?;
    Ok(dto::ok(product).into_response())
}

pub async fn list_categories(Extension(services): Extension<Arc<AppServices>>) -> Response {
    dto::ok(services.catalog.product_query().categories()).into_response()
}

pub async fn list_allergens(Extension(services): Extension<Arc<AppServices>>) -> Response {
    dto::ok(services.catalog.product_query().allergens()).into_response()
}

pub async fn recommendations(
    Extension(services): Extension<Arc<AppServices>>,
    query: Query<Vec<(String, String)>>,
) -> Response {
    let goals = QueryParams::from(query).all("goals");
    dto::ok(services.catalog.product_query().recommendations(&goals)).into_response()
}
