use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::presentation::config::{SpeechProviderSetting, SpeechSettings};

use super::google_speech_recognizer::{GoogleAuth, GoogleSpeechRecognizer};
use super::mock_speech_recognizer::MockSpeechRecognizer;

pub struct SpeechRecognizerFactory;

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl SpeechRecognizerFactory {
    pub fn create(
        settings: &SpeechSettings,
    ) -> Result<Arc<dyn SpeechRecognizer>, RecognitionError> {
        match settings.provider {
            SpeechProviderSetting::Mock => Ok(Arc::new(MockSpeechRecognizer::new(
                Duration::from_millis(settings.mock_response_delay_ms),
            ))),
            SpeechProviderSetting::Google => {
                let auth = match (non_empty(&settings.api_key), non_empty(&settings.access_token)) {
                    (Some(key), _) => GoogleAuth::ApiKey(key),
                    (None, Some(token)) => GoogleAuth::BearerToken(token),
                    (None, None) => {
                        return Err(RecognitionError::Configuration(
                            "api_key or access_token required for Google Speech".to_string(),
                        ));
                    }
                };
                Ok(Arc::new(GoogleSpeechRecognizer::new(
                    &settings.base_url,
                    auth,
                    Duration::from_millis(settings.poll_interval_ms),
                )))
            }
        }
    }
}
