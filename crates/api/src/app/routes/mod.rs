use axum::{
    routing::{get, post},
    Router,
};

use crate::app::state::AppState;

pub mod carts;
pub mod catalog;
pub mod deployments;
pub mod ideas;
pub mod menu;
pub mod system;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/carts", carts::router())
        .route("/ideas", post(ideas::generate_idea))
        .route("/deployments", post(deployments::create_deployment))
        .route("/menu", get(menu::get_menu))
}
