use super::audio_profile::AudioProfile;

pub const DEFAULT_MAX_SYNC_DURATION_SECS: f64 = 60.0;
pub const DEFAULT_MAX_UNKNOWN_DURATION_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionStrategy {
    Synchronous,
    LongRunning,
}

/// Limits past which inline recognition is not attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyPolicy {
    pub max_sync_duration_secs: f64,
    /// Only consulted when the duration could not be determined.
    pub max_unknown_duration_bytes: u64,
}

impl Default for StrategyPolicy {
    fn default() -> Self {
        Self {
            max_sync_duration_secs: DEFAULT_MAX_SYNC_DURATION_SECS,
            max_unknown_duration_bytes: DEFAULT_MAX_UNKNOWN_DURATION_BYTES,
        }
    }
}

impl TranscriptionStrategy {
    pub fn select(profile: &AudioProfile, policy: &StrategyPolicy) -> Self {
        match profile.duration_secs {
            Some(duration) if duration > policy.max_sync_duration_secs => Self::LongRunning,
            None if profile.size_bytes > policy.max_unknown_duration_bytes => Self::LongRunning,
            _ => Self::Synchronous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synchronous => "synchronous",
            Self::LongRunning => "long_running",
        }
    }
}
