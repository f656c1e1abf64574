use std::sync::Arc;
use std::sync::atomic::Ordering;

use speech_relay::application::ports::RecognitionError;
use speech_relay::application::services::{
    FallbackError, FallbackTrigger, FormatFallback, PrimaryVerdict, judge_primary_attempt,
};
use speech_relay::domain::{AudioEncoding, AudioSource, RecognitionResponse};

use crate::helpers::{ScriptedRecognizer, StubCodec, segments, write_temp_audio};

#[test]
fn given_empty_results_when_judging_then_retries() {
    let verdict = judge_primary_attempt(Ok(RecognitionResponse::default()));
    assert!(matches!(
        verdict,
        PrimaryVerdict::Retry(FallbackTrigger::EmptyResults)
    ));
}

#[test]
fn given_mp3_rejection_when_judging_then_retries() {
    let verdict = judge_primary_attempt(Err(RecognitionError::Rejected(
        "Invalid recognition 'config': MP3 encoding is not supported".to_string(),
    )));
    assert!(matches!(
        verdict,
        PrimaryVerdict::Retry(FallbackTrigger::UnsupportedMp3)
    ));
}

#[test]
fn given_other_error_when_judging_then_fails_with_original() {
    let verdict = judge_primary_attempt(Err(RecognitionError::Rejected(
        "Invalid language code".to_string(),
    )));
    match verdict {
        PrimaryVerdict::Fail(e) => assert_eq!(e.to_string(), "Invalid language code"),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn given_transcript_when_judging_then_accepts() {
    let verdict = judge_primary_attempt(Ok(segments(&["hello"])));
    assert!(matches!(verdict, PrimaryVerdict::Accept(_)));
}

#[test]
fn given_timeout_when_judging_then_does_not_retry() {
    let verdict = judge_primary_attempt(Err(RecognitionError::Timeout(
        std::time::Duration::from_secs(1),
    )));
    assert!(matches!(verdict, PrimaryVerdict::Fail(_)));
}

#[tokio::test]
async fn given_source_when_retrying_then_sends_one_linear16_16k_request() {
    let codec = Arc::new(StubCodec::with_duration(Some(1.0)));
    let fallback = FormatFallback::new(codec.clone());
    let recognizer = ScriptedRecognizer::new(vec![Ok(segments(&["retried"]))]);
    let source = write_temp_audio(b"ID3 not really mp3", ".mp3");

    let response = fallback
        .retry(&recognizer, source.path(), "en-GB", FallbackTrigger::UnsupportedMp3)
        .await
        .unwrap();

    assert_eq!(response, segments(&["retried"]));
    assert_eq!(codec.transcodes.load(Ordering::SeqCst), 1);

    let requests = recognizer.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].encoding, AudioEncoding::Linear16);
    assert_eq!(requests[0].sample_rate_hertz, 16_000);
    assert_eq!(requests[0].language_code, "en-GB");
    match &requests[0].source {
        AudioSource::Inline(content) => assert!(content.starts_with(b"RIFF")),
        other => panic!("expected inline audio, got {:?}", other),
    }
}

#[tokio::test]
async fn given_reencoded_audio_when_dropped_then_temp_file_is_removed() {
    let fallback = FormatFallback::new(Arc::new(StubCodec::with_duration(None)));
    let source = write_temp_audio(b"anything", ".mp3");

    let reencoded = fallback.reencode(source.path()).await.unwrap();
    let path = reencoded.path().to_path_buf();
    assert!(path.exists());
    assert!(path.to_string_lossy().ends_with(".converted.wav"));

    drop(reencoded);

    assert!(!path.exists());
}

#[tokio::test]
async fn given_transcode_failure_when_retrying_then_returns_reencode_error() {
    let fallback = FormatFallback::new(Arc::new(StubCodec::with_duration(None).failing_transcode()));
    let recognizer = ScriptedRecognizer::default();
    let source = write_temp_audio(b"garbage", ".mp3");

    let result = fallback
        .retry(&recognizer, source.path(), "en-US", FallbackTrigger::EmptyResults)
        .await;

    assert!(matches!(result, Err(FallbackError::Reencode(_))));
    assert!(recognizer.recorded().is_empty());
}
