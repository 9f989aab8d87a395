use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use blueforge_core::DomainError;
use blueforge_integrations::IntegrationError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn integration_error_to_response(err: IntegrationError) -> axum::response::Response {
    match err {
        IntegrationError::Rejected(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "rejected", msg)
        }
        IntegrationError::Failed(msg) => json_error(StatusCode::BAD_GATEWAY, "provider_failure", msg),
        IntegrationError::Internal(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
