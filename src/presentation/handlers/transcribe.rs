use std::path::Path;

use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};

use crate::presentation::state::AppState;

use super::responses::{
    ErrorResponse, bad_request, failure, resolve_language, transcription_outcome,
};

struct Upload {
    filename: String,
    data: Bytes,
}

#[derive(Default)]
struct TranscribeForm {
    upload: Option<Upload>,
    unnamed_upload: bool,
    language: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<TranscribeForm, MultipartError> {
    let mut form = TranscribeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio_file" => match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let data = field.bytes().await?;
                    form.upload = Some(Upload { filename, data });
                }
                None => form.unnamed_upload = true,
            },
            "language" => form.language = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(multipart) = multipart else {
        tracing::warn!("Transcribe request without multipart body");
        return bad_request("No audio file provided");
    };

    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (e.status(), Json(ErrorResponse { error: e.body_text() })).into_response();
        }
    };

    let upload = match form.upload {
        Some(upload) if upload.filename.is_empty() => return bad_request("No file selected"),
        Some(upload) => upload,
        None if form.unnamed_upload => return bad_request("No file selected"),
        None => return bad_request("No audio file provided"),
    };

    let language = resolve_language(form.language, &state.default_language);
    tracing::info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        language = %language,
        "Audio upload received"
    );

    // Format detection goes by extension.
    let suffix = Path::new(&upload.filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let temp = match tempfile::Builder::new()
        .prefix("upload-")
        .suffix(&suffix)
        .tempfile()
    {
        Ok(temp) => temp,
        Err(e) => return failure(e.to_string()),
    };
    if let Err(e) = tokio::fs::write(temp.path(), &upload.data).await {
        return failure(e.to_string());
    }

    let outcome = state
        .transcription_service
        .transcribe_file(temp.path(), &language)
        .await;

    drop(temp);
    transcription_outcome(outcome)
}
