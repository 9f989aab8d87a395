use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use blueforge_cart::Cart;
use blueforge_core::{CartId, ProductId, UserId};
use blueforge_integrations::ChargeRequest;

use crate::app::dto::{self, AddItemRequest, CheckoutRequest, CreateCartRequest};
use crate::app::errors;
use crate::app::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/:id", get(get_cart))
        .route("/:id/items", post(add_item))
        .route("/:id/items/:product_id", delete(remove_item))
        .route("/:id/checkout", post(checkout))
}

fn parse_cart_id(id: &str) -> Result<CartId, axum::response::Response> {
    id.parse::<CartId>().map_err(errors::domain_error_to_response)
}

pub async fn create_cart(
    State(state): State<AppState>,
    Json(body): Json<CreateCartRequest>,
) -> axum::response::Response {
    let cart_id = CartId::new();
    let user_id = body.user_id.map(UserId::from_uuid).unwrap_or_default();

    state
        .carts
        .write()
        .unwrap()
        .insert(cart_id, Cart::new(cart_id, user_id));

    tracing::info!(cart_id = %cart_id, "cart created");

    (
        StatusCode::CREATED,
        Json(json!({ "id": cart_id.to_string(), "user_id": user_id })),
    )
        .into_response()
}

pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let cart_id = match parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let carts = state.carts.read().unwrap();
    match carts.get(&cart_id) {
        Some(cart) => (StatusCode::OK, Json(dto::cart_to_view(&cart_id, cart))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "cart not found"),
    }
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AddItemRequest>,
) -> axum::response::Response {
    let cart_id = match parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let Some(product) = state.catalog.get(&product_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };

    let mut carts = state.carts.write().unwrap();
    let Some(cart) = carts.get_mut(&cart_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "cart not found");
    };

    if let Err(e) = cart.add_item(product, body.quantity) {
        return errors::domain_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::cart_to_view(&cart_id, cart))).into_response()
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let cart_id = match parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let product_id: ProductId = match product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut carts = state.carts.write().unwrap();
    let Some(cart) = carts.get_mut(&cart_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "cart not found");
    };

    if let Err(e) = cart.remove_item(&product_id) {
        return errors::domain_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::cart_to_view(&cart_id, cart))).into_response()
}

pub async fn checkout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CheckoutRequest>,
) -> axum::response::Response {
    let cart_id = match parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    // Validate and price the cart without holding the lock across the charge.
    let total = {
        let carts = state.carts.read().unwrap();
        let Some(cart) = carts.get(&cart_id) else {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "cart not found");
        };
        match cart.checkout_total() {
            Ok(total) => total,
            Err(e) => return errors::domain_error_to_response(e),
        }
    };

    let request = ChargeRequest {
        amount_cents: total,
        reference: cart_id.to_string(),
        card_token: body.card_token,
    };

    let receipt = match state.payments.charge(&request).await {
        Ok(receipt) => receipt,
        Err(e) => return errors::integration_error_to_response(e),
    };

    // Two concurrent checkouts can both charge; the loser surfaces as a
    // conflict here. Acceptable for a mock gateway with no real funds.
    let mut carts = state.carts.write().unwrap();
    let Some(cart) = carts.get_mut(&cart_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "cart not found");
    };
    if let Err(e) = cart.confirm_checkout(receipt.charged_at) {
        return errors::domain_error_to_response(e);
    }

    tracing::info!(cart_id = %cart_id, amount_cents = total, "cart checked out");

    (
        StatusCode::OK,
        Json(json!({
            "cart": dto::cart_to_view(&cart_id, cart),
            "receipt": receipt,
        })),
    )
        .into_response()
}
