use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Response;
use serde::Deserialize;

use crate::domain::RemoteUri;
use crate::presentation::state::AppState;

use super::responses::{failure, resolve_language, transcription_outcome};

#[derive(Debug, Default, Deserialize)]
pub struct TestSampleForm {
    pub language: Option<String>,
}

/// Runs the pipeline against the configured sample object. A missing or
/// unreadable form body is the same as an empty one.
#[tracing::instrument(skip(state, form))]
pub async fn test_sample_handler(
    State(state): State<AppState>,
    form: Result<Form<TestSampleForm>, FormRejection>,
) -> Response {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let language = resolve_language(form.language, &state.default_language);

    let uri = match RemoteUri::parse(&state.sample_uri) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(error = %e, sample_uri = %state.sample_uri, "Invalid sample URI");
            return failure(e.to_string());
        }
    };

    let outcome = state
        .transcription_service
        .transcribe_remote(&uri, &language)
        .await;
    transcription_outcome(outcome)
}
