use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use blueforge_auth::{visible_menu, Role};

use crate::app::dto::MenuParams;

pub async fn get_menu(Query(params): Query<MenuParams>) -> axum::response::Response {
    // Unknown role strings degrade to customer, the least-privileged view.
    let role = params.role.as_deref().map(Role::parse).unwrap_or_default();

    (
        StatusCode::OK,
        Json(json!({
            "role": role,
            "items": visible_menu(role),
        })),
    )
        .into_response()
}
