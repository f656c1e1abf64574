use speech_relay::application::ports::RecognitionError;
use speech_relay::infrastructure::speech::SpeechRecognizerFactory;
use speech_relay::presentation::config::{Settings, SpeechProviderSetting};

#[test]
fn given_mock_provider_when_creating_then_succeeds() {
    let settings = Settings::defaults().unwrap();
    assert_eq!(settings.speech.provider, SpeechProviderSetting::Mock);

    assert!(SpeechRecognizerFactory::create(&settings.speech).is_ok());
}

#[test]
fn given_google_without_credentials_when_creating_then_configuration_error() {
    let mut speech = Settings::defaults().unwrap().speech;
    speech.provider = SpeechProviderSetting::Google;
    speech.api_key = Some("   ".to_string());
    speech.access_token = None;

    let result = SpeechRecognizerFactory::create(&speech);

    assert!(matches!(result, Err(RecognitionError::Configuration(_))));
}

#[test]
fn given_google_with_api_key_when_creating_then_succeeds() {
    let mut speech = Settings::defaults().unwrap().speech;
    speech.provider = SpeechProviderSetting::Google;
    speech.api_key = Some("AIza-test".to_string());

    assert!(SpeechRecognizerFactory::create(&speech).is_ok());
}
