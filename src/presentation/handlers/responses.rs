use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::TranscriptionError;

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub transcript: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FailureResponse {
    pub error: String,
    pub success: bool,
}

/// Client input errors carry no `success` flag.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(super) fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

pub(super) fn failure(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse {
            error: message,
            success: false,
        }),
    )
        .into_response()
}

pub(super) fn transcription_outcome(outcome: Result<String, TranscriptionError>) -> Response {
    match outcome {
        Ok(transcript) => (
            StatusCode::OK,
            Json(TranscriptResponse {
                transcript,
                success: true,
            }),
        )
            .into_response(),
        Err(e) => failure(e.to_string()),
    }
}

/// Blank language fields fall back to the configured default.
pub(super) fn resolve_language(requested: Option<String>, default_language: &str) -> String {
    requested
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| default_language.to_string())
}
