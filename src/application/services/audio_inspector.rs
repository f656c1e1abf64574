use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::AudioCodec;
use crate::domain::{AudioProfile, ContainerFormat};

/// Builds an [`AudioProfile`] for a local file.
pub struct AudioInspector {
    codec: Arc<dyn AudioCodec>,
}

impl AudioInspector {
    pub fn new(codec: Arc<dyn AudioCodec>) -> Self {
        Self { codec }
    }

    /// Only a missing or unreadable file is an error. Header and duration
    /// problems degrade to the fallback rate and an unknown duration.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn inspect(&self, path: &Path) -> Result<AudioProfile, io::Error> {
        let size_bytes = tokio::fs::metadata(path).await?.len();
        let container = ContainerFormat::from_path(path);

        let codec = Arc::clone(&self.codec);
        let source = path.to_path_buf();
        let (sample_rate_hertz, duration_secs) = tokio::task::spawn_blocking(move || {
            let sample_rate = match container {
                ContainerFormat::Wav => codec.wav_sample_rate(&source).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Unreadable WAV header, using fallback sample rate");
                    container.default_sample_rate()
                }),
                other => other.default_sample_rate(),
            };

            let duration = match codec.duration_secs(&source) {
                Ok(secs) => Some(secs),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not determine audio duration");
                    None
                }
            };

            (sample_rate, duration)
        })
        .await
        .map_err(io::Error::other)?;

        tracing::info!(
            container = ?container,
            sample_rate_hertz,
            duration_secs = ?duration_secs,
            size_mb = size_bytes as f64 / (1024.0 * 1024.0),
            "Audio profiled"
        );

        Ok(AudioProfile {
            path: path.to_path_buf(),
            container,
            sample_rate_hertz,
            duration_secs,
            size_bytes,
        })
    }
}
