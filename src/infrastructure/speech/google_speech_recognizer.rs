use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::{
    AudioSource, RecognitionRequest, RecognitionResponse, SpeechAlternative, SpeechSegment,
};
use crate::infrastructure::observability::redact_secrets;

pub const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com";

#[derive(Debug, Clone)]
pub enum GoogleAuth {
    /// Sent as the `key` query parameter.
    ApiKey(String),
    BearerToken(String),
}

/// Google Cloud Speech-to-Text v1 over REST.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    base_url: String,
    auth: GoogleAuth,
    poll_interval: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'a str,
    sample_rate_hertz: u32,
    language_code: &'a str,
    enable_automatic_punctuation: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

#[derive(Serialize)]
struct RecognizeBody<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Deserialize, Default)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<WireResult>,
}

#[derive(Deserialize)]
struct WireResult {
    #[serde(default)]
    alternatives: Vec<WireAlternative>,
}

#[derive(Deserialize)]
struct WireAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

#[derive(Deserialize, Default)]
struct Operation {
    #[serde(default)]
    name: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    response: Option<RecognizeResponse>,
    #[serde(default)]
    error: Option<Status>,
}

#[derive(Deserialize)]
struct Status {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Status,
}

impl From<RecognizeResponse> for RecognitionResponse {
    fn from(wire: RecognizeResponse) -> Self {
        Self {
            results: wire
                .results
                .into_iter()
                .map(|result| SpeechSegment {
                    alternatives: result
                        .alternatives
                        .into_iter()
                        .map(|alt| SpeechAlternative {
                            transcript: alt.transcript,
                            confidence: alt.confidence,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl GoogleSpeechRecognizer {
    pub fn new(base_url: &str, auth: GoogleAuth, poll_interval: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            poll_interval,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            GoogleAuth::ApiKey(key) => builder.query(&[("key", key)]),
            GoogleAuth::BearerToken(token) => builder.bearer_auth(token),
        }
    }

    fn build_body<'a>(request: &'a RecognitionRequest) -> RecognizeBody<'a> {
        let audio = match &request.source {
            AudioSource::Inline(content) => RecognitionAudio {
                content: Some(base64::engine::general_purpose::STANDARD.encode(content)),
                uri: None,
            },
            AudioSource::Remote(uri) => RecognitionAudio {
                content: None,
                uri: Some(uri.to_string()),
            },
        };

        RecognizeBody {
            config: RecognitionConfig {
                encoding: request.encoding.as_str(),
                sample_rate_hertz: request.sample_rate_hertz,
                language_code: &request.language_code,
                enable_automatic_punctuation: request.enable_automatic_punctuation,
            },
            audio,
        }
    }

    async fn send<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, RecognitionError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| transport_error("request", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error("body", e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or(body);

            tracing::error!(status = %status, error = %message, "Google Speech API error");

            return Err(if status.is_client_error() {
                RecognitionError::Rejected(message)
            } else {
                RecognitionError::ApiRequestFailed(format!("status {}: {}", status, message))
            });
        }

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(T::default());
        }

        serde_json::from_str(trimmed)
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("parse response: {}", e)))
    }

    async fn start_and_wait(
        &self,
        url: &str,
        body: &RecognizeBody<'_>,
    ) -> Result<RecognitionResponse, RecognitionError> {
        let operation: Operation = self.send(self.client.post(url).json(body)).await?;
        if operation.name.is_empty() && !operation.done {
            return Err(RecognitionError::OperationFailed(
                "provider returned no operation name".to_string(),
            ));
        }
        self.poll_until_done(operation).await
    }

    async fn poll_until_done(
        &self,
        mut operation: Operation,
    ) -> Result<RecognitionResponse, RecognitionError> {
        let url = self.endpoint(&format!("/v1/operations/{}", operation.name));

        while !operation.done {
            tokio::time::sleep(self.poll_interval).await;
            tracing::debug!(operation = %operation.name, "Polling long running operation");
            operation = self.send(self.client.get(&url)).await?;
        }

        if let Some(status) = operation.error {
            return Err(RecognitionError::OperationFailed(format!(
                "code {}: {}",
                status.code.unwrap_or_default(),
                status.message.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        Ok(operation.response.unwrap_or_default().into())
    }
}

/// Drops the request URL, which carries the API key for `GoogleAuth::ApiKey`.
fn transport_error(stage: &str, e: reqwest::Error) -> RecognitionError {
    let message = redact_secrets(&e.without_url().to_string());
    RecognitionError::ApiRequestFailed(format!("{}: {}", stage, message))
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<RecognitionResponse, RecognitionError> {
        let url = self.endpoint("/v1/speech:recognize");
        let body = Self::build_body(request);

        tracing::debug!(
            url = %redact_secrets(&url),
            encoding = request.encoding.as_str(),
            sample_rate_hertz = request.sample_rate_hertz,
            language = %request.language_code,
            "Sending recognize request to Google Speech API"
        );

        let response: RecognizeResponse = self.send(self.client.post(&url).json(&body)).await?;
        let response: RecognitionResponse = response.into();

        tracing::info!(segments = response.results.len(), "Google recognition completed");
        Ok(response)
    }

    async fn long_running_recognize(
        &self,
        request: &RecognitionRequest,
        timeout: Duration,
    ) -> Result<RecognitionResponse, RecognitionError> {
        let url = self.endpoint("/v1/speech:longrunningrecognize");
        let body = Self::build_body(request);

        tracing::debug!(
            url = %redact_secrets(&url),
            language = %request.language_code,
            "Starting long running recognition"
        );

        let response = tokio::time::timeout(timeout, self.start_and_wait(&url, &body))
            .await
            .map_err(|_| RecognitionError::Timeout(timeout))??;

        tracing::info!(
            segments = response.results.len(),
            "Long running recognition completed"
        );
        Ok(response)
    }
}
