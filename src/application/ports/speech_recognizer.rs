use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{RecognitionRequest, RecognitionResponse};

/// A speech-recognition backend.
///
/// Both calls return the provider's segments untouched; an empty result list
/// is a legitimate answer at this level.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<RecognitionResponse, RecognitionError>;

    /// Starts an asynchronous operation and waits for it to finish, giving up
    /// after `timeout`.
    async fn long_running_recognize(
        &self,
        request: &RecognitionRequest,
        timeout: Duration,
    ) -> Result<RecognitionResponse, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("{0}")]
    Rejected(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
    #[error("operation did not complete within {0:?}")]
    Timeout(Duration),
    #[error("recognizer not configured: {0}")]
    Configuration(String),
}

const MP3_REJECTION_MARKER: &str = "MP3";

impl RecognitionError {
    /// The provider reports MP3 rejections only in free text, so this sniffs
    /// the message.
    pub fn is_unsupported_mp3(&self) -> bool {
        match self {
            Self::Rejected(message)
            | Self::ApiRequestFailed(message)
            | Self::OperationFailed(message) => message.contains(MP3_REJECTION_MARKER),
            Self::Timeout(_) | Self::Configuration(_) => false,
        }
    }
}
