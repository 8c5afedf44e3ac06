use super::types::{AskRequest, AskResponse, ErrorResponse};
use crate::engine::Engine;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let question = request.question.trim();

    if question.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No question provided.".to_string(),
            }),
        ));
    }

    info!("Received question: {}", question);

    match state.engine.answer(question) {
        Ok(response) => Ok(Json(AskResponse { response })),
        Err(e) => {
            error!("Failed to answer question: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Processing error: {}", e),
                }),
            ))
        }
    }
}
