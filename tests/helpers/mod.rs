use std::collections::{HashSet, VecDeque};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tempfile::NamedTempFile;

use speech_relay::application::ports::{
    AudioCodec, AudioCodecError, RecognitionError, SpeechRecognizer, StagingStore,
    StagingStoreError,
};
use speech_relay::domain::{RecognitionRequest, RecognitionResponse, SpeechSegment, StoragePath};

pub fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

/// A short 440 Hz tone.
pub fn tone(sample_rate: u32, frames: usize) -> Vec<i16> {
    (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            ((t * 440.0 * std::f32::consts::TAU).sin() * 8000.0) as i16
        })
        .collect()
}

pub fn write_temp_audio(bytes: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("test-audio-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

pub fn segments(texts: &[&str]) -> RecognitionResponse {
    RecognitionResponse {
        results: texts
            .iter()
            .map(|text| SpeechSegment::single(*text, Some(0.9)))
            .collect(),
    }
}

/// Replays queued outcomes in order and records every request. Once the
/// queue is drained it answers with empty results.
#[derive(Default)]
pub struct ScriptedRecognizer {
    outcomes: Mutex<VecDeque<Result<RecognitionResponse, RecognitionError>>>,
    pub requests: Mutex<Vec<RecognitionRequest>>,
    pub long_running_calls: AtomicUsize,
    long_running_stall: Option<Duration>,
}

impl ScriptedRecognizer {
    pub fn new(outcomes: Vec<Result<RecognitionResponse, RecognitionError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            ..Default::default()
        }
    }

    /// Long-running calls sleep this long before answering.
    pub fn stalling(mut self, stall: Duration) -> Self {
        self.long_running_stall = Some(stall);
        self
    }

    pub fn recorded(&self) -> Vec<RecognitionRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, request: &RecognitionRequest) -> Result<RecognitionResponse, RecognitionError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RecognitionResponse::default()))
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<RecognitionResponse, RecognitionError> {
        self.next(request)
    }

    async fn long_running_recognize(
        &self,
        request: &RecognitionRequest,
        _timeout: Duration,
    ) -> Result<RecognitionResponse, RecognitionError> {
        self.long_running_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(stall) = self.long_running_stall {
            tokio::time::sleep(stall).await;
        }
        self.next(request)
    }
}

/// In-memory store that only knows the buckets it was given.
pub struct RecordingStagingStore {
    buckets: HashSet<String>,
    pub uploads: AtomicUsize,
    pub deleted: Mutex<Vec<String>>,
    fail_deletes: bool,
}

impl RecordingStagingStore {
    pub fn with_buckets(buckets: &[&str]) -> Self {
        Self {
            buckets: buckets.iter().map(|b| b.to_string()).collect(),
            uploads: AtomicUsize::new(0),
            deleted: Mutex::new(Vec::new()),
            fail_deletes: false,
        }
    }

    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl StagingStore for RecordingStagingStore {
    fn scheme(&self) -> &'static str {
        "mem"
    }

    async fn check_bucket(&self, bucket: &str) -> Result<(), StagingStoreError> {
        if self.buckets.contains(bucket) {
            Ok(())
        } else {
            Err(StagingStoreError::BucketUnavailable {
                bucket: bucket.to_string(),
                reason: "404 Not Found".to_string(),
            })
        }
    }

    async fn store(
        &self,
        _bucket: &str,
        _path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        let mut total = 0u64;
        while let Some(chunk) = stream.next().await {
            total += chunk?.len() as u64;
        }
        Ok(total)
    }

    async fn delete(&self, _bucket: &str, path: &StoragePath) -> Result<(), StagingStoreError> {
        self.deleted.lock().unwrap().push(path.as_str().to_string());
        if self.fail_deletes {
            return Err(StagingStoreError::DeleteFailed("permission denied".to_string()));
        }
        Ok(())
    }
}

/// Codec with canned answers, for driving strategy and fallback decisions.
pub struct StubCodec {
    pub sample_rate: Option<u32>,
    pub duration_secs: Option<f64>,
    pub transcode_fails: bool,
    pub transcodes: AtomicUsize,
}

impl StubCodec {
    pub fn with_duration(duration_secs: Option<f64>) -> Self {
        Self {
            sample_rate: Some(16_000),
            duration_secs,
            transcode_fails: false,
            transcodes: AtomicUsize::new(0),
        }
    }

    pub fn failing_transcode(mut self) -> Self {
        self.transcode_fails = true;
        self
    }
}

impl AudioCodec for StubCodec {
    fn wav_sample_rate(&self, _source: &Path) -> Result<u32, AudioCodecError> {
        self.sample_rate
            .ok_or_else(|| AudioCodecError::DecodingFailed("bad header".to_string()))
    }

    fn duration_secs(&self, _source: &Path) -> Result<f64, AudioCodecError> {
        self.duration_secs
            .ok_or_else(|| AudioCodecError::DecodingFailed("no duration".to_string()))
    }

    fn transcode_to_wav(
        &self,
        _source: &Path,
        target: &Path,
        sample_rate: u32,
    ) -> Result<(), AudioCodecError> {
        self.transcodes.fetch_add(1, Ordering::SeqCst);
        if self.transcode_fails {
            return Err(AudioCodecError::DecodingFailed("corrupt stream".to_string()));
        }
        std::fs::write(target, build_wav(sample_rate, &tone(sample_rate, 160)))?;
        Ok(())
    }
}
