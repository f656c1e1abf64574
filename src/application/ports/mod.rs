mod audio_codec;
mod speech_recognizer;
mod staging_store;

pub use audio_codec::{AudioCodec, AudioCodecError};
pub use speech_recognizer::{RecognitionError, SpeechRecognizer};
pub use staging_store::{StagingStore, StagingStoreError};
