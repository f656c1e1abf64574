use super::audio_profile::{AudioEncoding, CANONICAL_SAMPLE_RATE};
use super::remote_uri::RemoteUri;

#[derive(Debug, Clone, PartialEq)]
pub enum AudioSource {
    Inline(Vec<u8>),
    Remote(RemoteUri),
}

/// A single call to the provider. Built fresh for every attempt, retries
/// included.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionRequest {
    pub source: AudioSource,
    pub encoding: AudioEncoding,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub enable_automatic_punctuation: bool,
}

impl RecognitionRequest {
    pub fn inline(
        content: Vec<u8>,
        encoding: AudioEncoding,
        sample_rate_hertz: u32,
        language_code: &str,
    ) -> Self {
        Self {
            source: AudioSource::Inline(content),
            encoding,
            sample_rate_hertz,
            language_code: language_code.to_string(),
            enable_automatic_punctuation: true,
        }
    }

    /// Remote audio is always read as 16 kHz LINEAR16, whatever it was
    /// uploaded as.
    pub fn remote(uri: RemoteUri, language_code: &str) -> Self {
        Self {
            source: AudioSource::Remote(uri),
            encoding: AudioEncoding::Linear16,
            sample_rate_hertz: CANONICAL_SAMPLE_RATE,
            language_code: language_code.to_string(),
            enable_automatic_punctuation: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionResponse {
    pub results: Vec<SpeechSegment>,
}

impl RecognitionResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One consecutive portion of audio, with alternatives ordered best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechSegment {
    pub alternatives: Vec<SpeechAlternative>,
}

impl SpeechSegment {
    pub fn single(transcript: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            alternatives: vec![SpeechAlternative {
                transcript: transcript.into(),
                confidence,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechAlternative {
    pub transcript: String,
    pub confidence: Option<f32>,
}
