use speech_relay::domain::{RemoteUri, RemoteUriError, StoragePath};

#[test]
fn given_gs_uri_when_parsing_then_splits_scheme_bucket_and_key() {
    let uri = RemoteUri::parse("gs://cloud-samples-data/speech/brooklyn_bridge.raw").unwrap();

    assert_eq!(uri.scheme(), "gs");
    assert_eq!(uri.bucket(), "cloud-samples-data");
    assert_eq!(uri.key().as_str(), "speech/brooklyn_bridge.raw");
}

#[test]
fn given_parsed_uri_when_displaying_then_round_trips_to_original() {
    let raw = "gs://bucket/audio/abc_clip.wav";
    assert_eq!(RemoteUri::parse(raw).unwrap().to_string(), raw);
}

#[test]
fn given_storage_path_when_building_uri_then_formats_fully_qualified() {
    let key = StoragePath::from_raw("audio/123_clip.mp3");
    let uri = RemoteUri::new("gs", "stt-audio-files-demo", &key);

    assert_eq!(uri.to_string(), "gs://stt-audio-files-demo/audio/123_clip.mp3");
}

#[test]
fn given_uri_without_scheme_when_parsing_then_returns_missing_scheme() {
    let result = RemoteUri::parse("bucket/key");
    assert_eq!(
        result,
        Err(RemoteUriError::MissingScheme("bucket/key".to_string()))
    );
}

#[test]
fn given_uri_without_bucket_when_parsing_then_returns_missing_bucket() {
    assert!(matches!(
        RemoteUri::parse("gs:///key"),
        Err(RemoteUriError::MissingBucket(_))
    ));
}

#[test]
fn given_uri_without_key_when_parsing_then_returns_missing_key() {
    assert!(matches!(
        RemoteUri::parse("gs://bucket"),
        Err(RemoteUriError::MissingKey(_))
    ));
    assert!(matches!(
        RemoteUri::parse("gs://bucket/"),
        Err(RemoteUriError::MissingKey(_))
    ));
}

#[test]
fn given_valid_uri_when_using_from_str_then_parses() {
    let uri: RemoteUri = "local://staging/audio/x.wav".parse().unwrap();
    assert_eq!(uri.scheme(), "local");
}
