use std::path::Path;

/// Local decoding and re-encoding of audio files.
///
/// Everything here is blocking and CPU-bound; callers run it off the async
/// executor.
pub trait AudioCodec: Send + Sync {
    /// Sample rate declared in a WAV header.
    fn wav_sample_rate(&self, source: &Path) -> Result<u32, AudioCodecError>;

    fn duration_secs(&self, source: &Path) -> Result<f64, AudioCodecError>;

    /// Decodes `source`, downmixes to mono, resamples to `sample_rate` and
    /// writes 16-bit PCM WAV to `target`.
    fn transcode_to_wav(
        &self,
        source: &Path,
        target: &Path,
        sample_rate: u32,
    ) -> Result<(), AudioCodecError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioCodecError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
