use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use blueforge_core::ProductId;
use blueforge_integrations::DeployRequest;

use crate::app::dto::DeploymentRequest;
use crate::app::errors;
use crate::app::state::AppState;

pub async fn create_deployment(
    State(state): State<AppState>,
    Json(body): Json<DeploymentRequest>,
) -> axum::response::Response {
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let Some(product) = state.catalog.get(&product_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };

    let request = DeployRequest {
        product_id,
        site_name: body.site_name.unwrap_or_else(|| product.name.clone()),
    };

    match state.deployments.deploy(&request).await {
        Ok(ticket) => (StatusCode::CREATED, Json(ticket)).into_response(),
        Err(e) => errors::integration_error_to_response(e),
    }
}
