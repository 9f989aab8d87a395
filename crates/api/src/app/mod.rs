//! HTTP API application wiring (Axum router + state wiring).
//!
//! Layout:
//! - `state.rs`: the explicit application-state struct handlers receive
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

use self::state::AppState;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .with_state(state)
        .layer(ServiceBuilder::new())
}
