mod google_speech_recognizer;
mod mock_speech_recognizer;
mod speech_recognizer_factory;

pub use google_speech_recognizer::{DEFAULT_BASE_URL, GoogleAuth, GoogleSpeechRecognizer};
pub use mock_speech_recognizer::{MOCK_SEGMENTS, MockSpeechRecognizer};
pub use speech_recognizer_factory::SpeechRecognizerFactory;
