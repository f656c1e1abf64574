mod audio_profile;
mod recognition;
mod remote_uri;
mod staged_upload;
mod storage_path;
mod strategy;
mod transcript;

pub use audio_profile::{
    AudioEncoding, AudioProfile, CANONICAL_SAMPLE_RATE, ContainerFormat, FALLBACK_SAMPLE_RATE,
};
pub use recognition::{
    AudioSource, RecognitionRequest, RecognitionResponse, SpeechAlternative, SpeechSegment,
};
pub use remote_uri::{RemoteUri, RemoteUriError};
pub use staged_upload::StagedUpload;
pub use storage_path::StoragePath;
pub use strategy::{
    DEFAULT_MAX_SYNC_DURATION_SECS, DEFAULT_MAX_UNKNOWN_DURATION_BYTES, StrategyPolicy,
    TranscriptionStrategy,
};
pub use transcript::assemble_transcript;
