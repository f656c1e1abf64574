use std::sync::Arc;

use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub default_language: String,
    pub sample_uri: String,
    pub speech_provider: &'static str,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(transcription_service: Arc<TranscriptionService>, settings: &Settings) -> Self {
        Self {
            transcription_service,
            default_language: settings.transcription.default_language.clone(),
            sample_uri: settings.transcription.sample_uri.clone(),
            speech_provider: settings.speech.provider.as_str(),
            max_upload_bytes: settings.server.max_upload_mb * 1024 * 1024,
        }
    }
}
