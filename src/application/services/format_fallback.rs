use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::application::ports::{AudioCodec, AudioCodecError, RecognitionError, SpeechRecognizer};
use crate::domain::{AudioEncoding, CANONICAL_SAMPLE_RATE, RecognitionRequest, RecognitionResponse};

/// What to do with the outcome of the first inline recognition attempt.
#[derive(Debug)]
pub enum PrimaryVerdict {
    Accept(RecognitionResponse),
    Retry(FallbackTrigger),
    Fail(RecognitionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTrigger {
    UnsupportedMp3,
    EmptyResults,
}

impl FallbackTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedMp3 => "unsupported_mp3",
            Self::EmptyResults => "empty_results",
        }
    }
}

pub fn judge_primary_attempt(
    attempt: Result<RecognitionResponse, RecognitionError>,
) -> PrimaryVerdict {
    match attempt {
        Ok(response) if response.is_empty() => PrimaryVerdict::Retry(FallbackTrigger::EmptyResults),
        Ok(response) => PrimaryVerdict::Accept(response),
        Err(e) if e.is_unsupported_mp3() => PrimaryVerdict::Retry(FallbackTrigger::UnsupportedMp3),
        Err(e) => PrimaryVerdict::Fail(e),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("{0}")]
    Reencode(#[from] AudioCodecError),
    #[error("{0}")]
    Recognition(#[from] RecognitionError),
    #[error("temporary file: {0}")]
    Io(#[from] std::io::Error),
}

/// A 16 kHz mono WAV copy of the original audio. The backing file is removed
/// when this is dropped.
pub struct ReencodedAudio {
    file: NamedTempFile,
    pub content: Vec<u8>,
}

impl ReencodedAudio {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Single retry with a canonical re-encoding of the audio.
#[derive(Clone)]
pub struct FormatFallback {
    codec: Arc<dyn AudioCodec>,
}

impl FormatFallback {
    pub fn new(codec: Arc<dyn AudioCodec>) -> Self {
        Self { codec }
    }

    pub async fn reencode(&self, source: &Path) -> Result<ReencodedAudio, FallbackError> {
        let file = tempfile::Builder::new()
            .prefix("fallback-")
            .suffix(".converted.wav")
            .tempfile()?;

        let codec = Arc::clone(&self.codec);
        let source = source.to_path_buf();
        let target = file.path().to_path_buf();
        tokio::task::spawn_blocking(move || {
            codec.transcode_to_wav(&source, &target, CANONICAL_SAMPLE_RATE)
        })
        .await
        .map_err(std::io::Error::other)??;

        let content = tokio::fs::read(file.path()).await?;
        Ok(ReencodedAudio { file, content })
    }

    /// Re-encodes `source` and issues exactly one more inline request. The
    /// temporary WAV is gone by the time this returns.
    #[tracing::instrument(skip(self, recognizer, source, trigger), fields(trigger = trigger.as_str()))]
    pub async fn retry(
        &self,
        recognizer: &dyn SpeechRecognizer,
        source: &Path,
        language_code: &str,
        trigger: FallbackTrigger,
    ) -> Result<RecognitionResponse, FallbackError> {
        tracing::warn!("Primary recognition unusable, converting to WAV and retrying");

        let reencoded = self.reencode(source).await?;
        tracing::debug!(
            path = %reencoded.path().display(),
            bytes = reencoded.content.len(),
            "Audio re-encoded"
        );

        let request = RecognitionRequest::inline(
            reencoded.content.clone(),
            AudioEncoding::Linear16,
            CANONICAL_SAMPLE_RATE,
            language_code,
        );
        let outcome = recognizer.recognize(&request).await;
        drop(reencoded);

        outcome.map_err(|e| {
            tracing::error!(error = %e, "WAV fallback also failed");
            FallbackError::Recognition(e)
        })
    }
}
