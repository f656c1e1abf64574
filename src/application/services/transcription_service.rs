use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    AudioCodec, RecognitionError, SpeechRecognizer, StagingStore, StagingStoreError,
};
use crate::domain::{
    AudioProfile, RecognitionRequest, RemoteUri, StrategyPolicy, TranscriptionStrategy,
    assemble_transcript,
};

use super::audio_inspector::AudioInspector;
use super::format_fallback::{FallbackError, FormatFallback, PrimaryVerdict, judge_primary_attempt};
use super::staging_gateway::StagingGateway;

pub const DEFAULT_STAGING_BUCKET: &str = "stt-audio-files-demo";
pub const DEFAULT_LONG_RUNNING_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    pub bucket: String,
    pub policy: StrategyPolicy,
    pub long_running_timeout: Duration,
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_STAGING_BUCKET.to_string(),
            policy: StrategyPolicy::default(),
            long_running_timeout: DEFAULT_LONG_RUNNING_TIMEOUT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("{0} not initialized")]
    NotConfigured(&'static str),
    #[error("Failed to stage audio: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("{0}")]
    Provider(#[from] RecognitionError),
    #[error("WAV fallback failed: {0}")]
    FallbackExhausted(#[from] FallbackError),
    #[error("{0}")]
    Unexpected(String),
}

/// The whole request pipeline: profile, pick a strategy, call the provider,
/// fall back once if needed, assemble the text.
///
/// Provider and store handles are optional; a missing one is reported as
/// [`TranscriptionError::NotConfigured`] when a request needs it.
pub struct TranscriptionService {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    staging: Option<StagingGateway>,
    inspector: AudioInspector,
    fallback: FormatFallback,
    options: TranscriptionOptions,
}

impl TranscriptionService {
    pub fn new(
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
        staging_store: Option<Arc<dyn StagingStore>>,
        codec: Arc<dyn AudioCodec>,
        options: TranscriptionOptions,
    ) -> Self {
        Self {
            recognizer,
            staging: staging_store.map(StagingGateway::new),
            inspector: AudioInspector::new(Arc::clone(&codec)),
            fallback: FormatFallback::new(codec),
            options,
        }
    }

    pub fn is_recognizer_configured(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_staging_configured(&self) -> bool {
        self.staging.is_some()
    }

    fn recognizer(&self) -> Result<&dyn SpeechRecognizer, TranscriptionError> {
        self.recognizer
            .as_deref()
            .ok_or(TranscriptionError::NotConfigured("Speech client"))
    }

    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn transcribe_file(
        &self,
        path: &Path,
        language_code: &str,
    ) -> Result<String, TranscriptionError> {
        let recognizer = self.recognizer()?;

        let profile = self
            .inspector
            .inspect(path)
            .await
            .map_err(|e| TranscriptionError::Unexpected(e.to_string()))?;

        let strategy = TranscriptionStrategy::select(&profile, &self.options.policy);
        tracing::info!(strategy = strategy.as_str(), "Transcription strategy selected");

        let result = match strategy {
            TranscriptionStrategy::LongRunning => {
                self.transcribe_long_running(recognizer, &profile, language_code)
                    .await
            }
            TranscriptionStrategy::Synchronous => {
                self.transcribe_synchronous(recognizer, &profile, language_code)
                    .await
            }
        };

        if let Err(e) = &result {
            tracing::error!(error = %e, "Error transcribing audio");
        }
        result
    }

    /// Inline recognition of a provider-readable object. No staging and no
    /// fallback.
    #[tracing::instrument(skip(self, uri), fields(uri = %uri))]
    pub async fn transcribe_remote(
        &self,
        uri: &RemoteUri,
        language_code: &str,
    ) -> Result<String, TranscriptionError> {
        let recognizer = self.recognizer()?;
        let request = RecognitionRequest::remote(uri.clone(), language_code);

        let response = recognizer.recognize(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Error transcribing remote audio");
            TranscriptionError::Provider(e)
        })?;

        Ok(assemble_transcript(&response.results))
    }

    async fn transcribe_long_running(
        &self,
        recognizer: &dyn SpeechRecognizer,
        profile: &AudioProfile,
        language_code: &str,
    ) -> Result<String, TranscriptionError> {
        let staging = self
            .staging
            .as_ref()
            .ok_or(TranscriptionError::NotConfigured("Storage client"))?;

        let staged = staging.stage(&profile.path, &self.options.bucket).await?;
        let request = RecognitionRequest::remote(staged.uri.clone(), language_code);
        let cleanup = staging.cleanup_on_exit(staged);

        tracing::info!(
            timeout_secs = self.options.long_running_timeout.as_secs(),
            "Waiting for long running operation to complete"
        );
        let outcome = recognizer
            .long_running_recognize(&request, self.options.long_running_timeout)
            .await;

        cleanup.finish().await;

        let response = outcome?;
        Ok(assemble_transcript(&response.results))
    }

    async fn transcribe_synchronous(
        &self,
        recognizer: &dyn SpeechRecognizer,
        profile: &AudioProfile,
        language_code: &str,
    ) -> Result<String, TranscriptionError> {
        let content = tokio::fs::read(&profile.path)
            .await
            .map_err(|e| TranscriptionError::Unexpected(e.to_string()))?;

        let request = RecognitionRequest::inline(
            content,
            profile.encoding(),
            profile.sample_rate_hertz,
            language_code,
        );

        let response = match judge_primary_attempt(recognizer.recognize(&request).await) {
            PrimaryVerdict::Accept(response) => response,
            PrimaryVerdict::Fail(e) => return Err(TranscriptionError::Provider(e)),
            PrimaryVerdict::Retry(trigger) => {
                self.fallback
                    .retry(recognizer, &profile.path, language_code, trigger)
                    .await?
            }
        };

        Ok(assemble_transcript(&response.results))
    }
}
