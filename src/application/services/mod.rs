mod audio_inspector;
mod format_fallback;
mod staging_gateway;
mod transcription_service;

pub use audio_inspector::AudioInspector;
pub use format_fallback::{
    FallbackError, FallbackTrigger, FormatFallback, PrimaryVerdict, ReencodedAudio,
    judge_primary_attempt,
};
pub use staging_gateway::{StagedCleanup, StagingGateway};
pub use transcription_service::{
    DEFAULT_LONG_RUNNING_TIMEOUT, DEFAULT_STAGING_BUCKET, TranscriptionError,
    TranscriptionOptions, TranscriptionService,
};
