use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use blueforge_integrations::IdeaPrompt;

use crate::app::dto::IdeaRequest;
use crate::app::errors;
use crate::app::state::AppState;

pub async fn generate_idea(
    State(state): State<AppState>,
    Json(body): Json<IdeaRequest>,
) -> axum::response::Response {
    let prompt = IdeaPrompt { text: body.prompt };

    match state.ideas.generate(&prompt).await {
        Ok(idea) => (StatusCode::OK, Json(idea)).into_response(),
        Err(e) => errors::integration_error_to_response(e),
    }
}
