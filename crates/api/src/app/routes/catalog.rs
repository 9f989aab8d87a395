use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use blueforge_catalog::evaluate;
use blueforge_core::ProductId;

use crate::app::errors;
use crate::app::dto::CatalogQueryParams;
use crate::app::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(query_catalog))
        .route("/categories", get(list_categories))
        .route("/:id", get(get_product))
}

pub async fn query_catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> axum::response::Response {
    let query = params.into_query();
    let page = evaluate(&state.catalog, &query);
    (StatusCode::OK, Json(page)).into_response()
}

pub async fn list_categories(State(state): State<AppState>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({ "categories": state.catalog.categories() })),
    )
        .into_response()
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match state.catalog.get(&product_id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}
