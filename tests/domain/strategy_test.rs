use std::path::PathBuf;

use speech_relay::domain::{AudioProfile, ContainerFormat, StrategyPolicy, TranscriptionStrategy};

const MIB: u64 = 1024 * 1024;

fn profile(duration_secs: Option<f64>, size_bytes: u64) -> AudioProfile {
    AudioProfile {
        path: PathBuf::from("clip.wav"),
        container: ContainerFormat::Wav,
        sample_rate_hertz: 16_000,
        duration_secs,
        size_bytes,
    }
}

fn select(duration_secs: Option<f64>, size_bytes: u64) -> TranscriptionStrategy {
    TranscriptionStrategy::select(&profile(duration_secs, size_bytes), &StrategyPolicy::default())
}

#[test]
fn given_duration_over_sixty_seconds_when_selecting_then_long_running() {
    assert_eq!(select(Some(61.0), 1024), TranscriptionStrategy::LongRunning);
}

#[test]
fn given_duration_under_sixty_seconds_when_selecting_then_synchronous() {
    assert_eq!(select(Some(59.0), 1024), TranscriptionStrategy::Synchronous);
}

#[test]
fn given_duration_exactly_sixty_seconds_when_selecting_then_synchronous() {
    assert_eq!(select(Some(60.0), 1024), TranscriptionStrategy::Synchronous);
}

#[test]
fn given_unknown_duration_and_two_mib_when_selecting_then_long_running() {
    assert_eq!(select(None, 2 * MIB), TranscriptionStrategy::LongRunning);
}

#[test]
fn given_unknown_duration_and_half_mib_when_selecting_then_synchronous() {
    assert_eq!(select(None, MIB / 2), TranscriptionStrategy::Synchronous);
}

#[test]
fn given_unknown_duration_and_exactly_one_mib_when_selecting_then_synchronous() {
    assert_eq!(select(None, MIB), TranscriptionStrategy::Synchronous);
}

#[test]
fn given_short_duration_and_large_file_when_selecting_then_size_is_ignored() {
    assert_eq!(select(Some(10.0), 50 * MIB), TranscriptionStrategy::Synchronous);
}

#[test]
fn given_custom_policy_when_selecting_then_thresholds_are_respected() {
    let policy = StrategyPolicy {
        max_sync_duration_secs: 30.0,
        max_unknown_duration_bytes: 1024,
    };

    assert_eq!(
        TranscriptionStrategy::select(&profile(Some(31.0), 10), &policy),
        TranscriptionStrategy::LongRunning
    );
    assert_eq!(
        TranscriptionStrategy::select(&profile(None, 1025), &policy),
        TranscriptionStrategy::LongRunning
    );
}
