use std::path::Path;

use crate::application::ports::{AudioCodec, AudioCodecError};
use crate::domain::ContainerFormat;

use super::audio_decoder::{decode_audio_to_pcm, probe_duration_secs};
use super::wav::{read_wav_sample_rate, write_pcm16_wav};

/// Pure-Rust codec: symphonia decodes, rubato resamples, hound writes WAV.
pub struct SymphoniaAudioCodec;

/// Only a hint; symphonia still sniffs the content.
fn format_hint(path: &Path) -> Option<&'static str> {
    ContainerFormat::from_path(path).extension()
}

impl AudioCodec for SymphoniaAudioCodec {
    fn wav_sample_rate(&self, source: &Path) -> Result<u32, AudioCodecError> {
        read_wav_sample_rate(source)
    }

    fn duration_secs(&self, source: &Path) -> Result<f64, AudioCodecError> {
        let data = std::fs::read(source)?;
        probe_duration_secs(&data, format_hint(source))
    }

    fn transcode_to_wav(
        &self,
        source: &Path,
        target: &Path,
        sample_rate: u32,
    ) -> Result<(), AudioCodecError> {
        let data = std::fs::read(source)?;
        let pcm = decode_audio_to_pcm(&data, format_hint(source), sample_rate)?;
        write_pcm16_wav(target, &pcm, sample_rate)?;

        tracing::debug!(
            source = %source.display(),
            target = %target.display(),
            samples = pcm.len(),
            "Audio transcoded to WAV"
        );
        Ok(())
    }
}
