use std::io::Cursor;

use symphonia::core::audio::{AudioBufferRef, SampleBuffer};
use symphonia::core::codecs::{CodecParameters, Decoder, DecoderOptions};
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::AudioCodecError;

struct OpenedTrack {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    params: CodecParameters,
}

fn open_default_track(data: &[u8], extension: Option<&str>) -> Result<OpenedTrack, AudioCodecError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioCodecError::UnsupportedFormat(format!("probe: {}", e)))?;

    let format = probed.format;
    let track = format
        .default_track()
        .ok_or_else(|| AudioCodecError::DecodingFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let params = track.codec_params.clone();

    let decoder = symphonia::default::get_codecs()
        .make(&params, &DecoderOptions::default())
        .map_err(|e| AudioCodecError::UnsupportedFormat(format!("codec: {}", e)))?;

    Ok(OpenedTrack {
        format,
        decoder,
        track_id,
        params,
    })
}

fn for_each_buffer<F>(track: &mut OpenedTrack, mut on_buffer: F) -> Result<(), AudioCodecError>
where
    F: FnMut(AudioBufferRef<'_>),
{
    loop {
        let packet = match track.format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(AudioCodecError::DecodingFailed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track.track_id {
            continue;
        }

        match track.decoder.decode(&packet) {
            Ok(decoded) => on_buffer(decoded),
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
            }
            Err(e) => {
                return Err(AudioCodecError::DecodingFailed(format!("decode: {}", e)));
            }
        }
    }

    Ok(())
}

/// Length in seconds, from the container's frame count when it has one and
/// by decoding every packet otherwise.
pub fn probe_duration_secs(data: &[u8], extension: Option<&str>) -> Result<f64, AudioCodecError> {
    let mut track = open_default_track(data, extension)?;
    let sample_rate = track
        .params
        .sample_rate
        .ok_or_else(|| AudioCodecError::DecodingFailed("unknown sample rate".to_string()))?;

    if let Some(frames) = track.params.n_frames {
        return Ok(frames as f64 / sample_rate as f64);
    }

    let mut frames: u64 = 0;
    for_each_buffer(&mut track, |decoded| frames += decoded.frames() as u64)?;

    if frames == 0 {
        return Err(AudioCodecError::DecodingFailed(
            "no audio frames decoded".to_string(),
        ));
    }

    Ok(frames as f64 / sample_rate as f64)
}

/// Decodes any supported container to mono `f32` PCM at `target_rate`.
pub fn decode_audio_to_pcm(
    data: &[u8],
    extension: Option<&str>,
    target_rate: u32,
) -> Result<Vec<f32>, AudioCodecError> {
    let mut track = open_default_track(data, extension)?;
    let source_rate = track
        .params
        .sample_rate
        .ok_or_else(|| AudioCodecError::DecodingFailed("unknown sample rate".to_string()))?;

    let mut all_samples: Vec<f32> = Vec::new();

    for_each_buffer(&mut track, |decoded| {
        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            return;
        }

        let channels = spec.channels.count().max(1);
        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let samples = sample_buf.samples();

        if channels > 1 {
            for frame in samples.chunks(channels) {
                let mono: f32 = frame.iter().sum::<f32>() / channels as f32;
                all_samples.push(mono);
            }
        } else {
            all_samples.extend_from_slice(samples);
        }
    })?;

    if all_samples.is_empty() {
        return Err(AudioCodecError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    if source_rate != target_rate {
        all_samples = resample(&all_samples, source_rate, target_rate)?;
    }

    tracing::debug!(
        samples = all_samples.len(),
        duration_secs = all_samples.len() as f32 / target_rate as f32,
        source_rate,
        target_rate,
        "Audio decoded to mono PCM"
    );

    Ok(all_samples)
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, AudioCodecError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let chunk_size = 1024;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, chunk_size, 1)
        .map_err(|e| AudioCodecError::DecodingFailed(format!("resampler init: {}", e)))?;

    let mut output = Vec::with_capacity((samples.len() as f64 * ratio) as usize + chunk_size);

    for chunk in samples.chunks(chunk_size) {
        let input = if chunk.len() < chunk_size {
            let mut padded = chunk.to_vec();
            padded.resize(chunk_size, 0.0);
            padded
        } else {
            chunk.to_vec()
        };

        let result = resampler
            .process(&[input], None)
            .map_err(|e| AudioCodecError::DecodingFailed(format!("resample: {}", e)))?;

        if let Some(channel) = result.first() {
            output.extend_from_slice(channel);
        }
    }

    // Padding of the last chunk adds a tail.
    let expected_len = (samples.len() as f64 * ratio) as usize;
    output.truncate(expected_len);

    Ok(output)
}
