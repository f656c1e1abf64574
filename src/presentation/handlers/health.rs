use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub speech_client_initialized: bool,
    pub storage_client_initialized: bool,
    pub speech_provider: String,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.transcription_service;
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            speech_client_initialized: service.is_recognizer_configured(),
            storage_client_initialized: service.is_staging_configured(),
            speech_provider: state.speech_provider.to_string(),
        }),
    )
}
