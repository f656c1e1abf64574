use std::path::Path;

use crate::application::ports::AudioCodecError;

pub fn read_wav_sample_rate(path: &Path) -> Result<u32, AudioCodecError> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| AudioCodecError::DecodingFailed(format!("wav header: {}", e)))?;
    Ok(reader.spec().sample_rate)
}

/// Writes mono 16-bit PCM. Samples outside [-1.0, 1.0] are clipped.
pub fn write_pcm16_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), AudioCodecError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| AudioCodecError::EncodingFailed(format!("create: {}", e)))?;

    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(value)
            .map_err(|e| AudioCodecError::EncodingFailed(format!("write: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| AudioCodecError::EncodingFailed(format!("finalize: {}", e)))
}
