use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Path, Query},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;

use biobox_core::RecipeId;
use biobox_recipes::{DEFAULT_SERVING_ADJUSTMENT, RecipeFilters};

use crate::app::dto::{self, QueryParams};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_recipes))
        .route("/:id", get(get_recipe))
        .route("/:id/box", get(generate_box))
        .route("/meta/dietary-categories", get(list_dietary_categories))
        .route("/meta/allergens", get(list_allergens))
        .route("/meta/suggestions", get(suggestions))
}

pub async fn list_recipes(
    Extension(services): Extension<Arc<AppServices>>,
    query: Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = QueryParams::from(query);
    let filters = RecipeFilters {
        dietary_categories: params.all("dietaryCategories"),
        exclude_allergens: params.all("excludeAllergens"),
        max_cooking_time: params.u32("maxCookingTime")?,
        servings: params.u32("servings")?,
    };

    Ok(dto::ok_list(services.catalog.recipe_query().filter(&filters)).into_response())
}

pub async fn get_recipe(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let recipe = services
        .catalog
        .find_recipe_by_id(&id)
        .ok_or(ApiError::NotFound("recipe"))?;
    Ok(dto::ok(recipe).into_response())
}

pub async fn generate_box(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    query: Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let servings = QueryParams::from(query)
        .positive_f64("servings")?
        .unwrap_or(DEFAULT_SERVING_ADJUSTMENT);
    let recipe_id = RecipeId::coerce(&id)
        .ok_or_else(|| ApiError::bad_input(format!("invalid recipe id {id:?}")))?;

    let recipe_box = services
        .catalog
        .box_generator()
        .generate(recipe_id, servings, Utc::now())?;
    Ok(dto::ok(recipe_box).into_response())
}

pub async fn list_dietary_categories(Extension(services): Extension<Arc<AppServices>>) -> Response {
    dto::ok(services.catalog.recipe_query().dietary_categories()).into_response()
}

pub async fn list_allergens(Extension(services): Extension<Arc<AppServices>>) -> Response {
    dto::ok(services.catalog.recipe_query().allergens()).into_response()
}

pub async fn suggestions(
    Extension(services): Extension<Arc<AppServices>>,
    query: Query<Vec<(String, String)>>,
) -> Response {
    let available = QueryParams::from(query).product_ids("products");
    dto::ok(services.catalog.recipe_query().suggestions(&available)).into_response()
}
