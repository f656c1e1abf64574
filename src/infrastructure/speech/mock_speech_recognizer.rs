use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::{AudioSource, RecognitionRequest, RecognitionResponse, SpeechSegment};

pub const MOCK_SEGMENTS: [&str; 2] = [
    "This is a mock transcription of your audio file.",
    "The speech recognition service is working correctly.",
];

const MOCK_CONFIDENCE: f32 = 0.95;

/// Offline stand-in for a real provider. Always returns [`MOCK_SEGMENTS`].
pub struct MockSpeechRecognizer {
    delay: Duration,
}

impl MockSpeechRecognizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn response() -> RecognitionResponse {
        RecognitionResponse {
            results: MOCK_SEGMENTS
                .iter()
                .map(|text| SpeechSegment::single(*text, Some(MOCK_CONFIDENCE)))
                .collect(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<RecognitionResponse, RecognitionError> {
        match &request.source {
            AudioSource::Inline(content) => {
                tracing::info!(bytes = content.len(), language = %request.language_code, "Mock transcribing inline audio");
            }
            AudioSource::Remote(uri) => {
                tracing::info!(uri = %uri, language = %request.language_code, "Mock transcribing remote audio");
            }
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(Self::response())
    }

    async fn long_running_recognize(
        &self,
        request: &RecognitionRequest,
        timeout: Duration,
    ) -> Result<RecognitionResponse, RecognitionError> {
        tokio::time::timeout(timeout, self.recognize(request))
            .await
            .map_err(|_| RecognitionError::Timeout(timeout))?
    }
}
