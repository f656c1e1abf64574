use speech_relay::application::ports::StagingStore;
use speech_relay::infrastructure::storage::StagingStoreFactory;
use speech_relay::presentation::config::{Settings, StorageProviderSetting};

#[tokio::test]
async fn given_local_provider_when_creating_then_configured_bucket_exists() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut storage = Settings::defaults().unwrap().storage;
    storage.provider = StorageProviderSetting::Local;
    storage.local_path = dir.path().to_string_lossy().to_string();
    storage.bucket = "configured-bucket".to_string();

    let store = StagingStoreFactory::create(&storage).unwrap();

    assert_eq!(store.scheme(), "local");
    assert!(store.check_bucket("configured-bucket").await.is_ok());
    assert!(dir.path().join("configured-bucket").is_dir());
}

#[test]
fn given_gcs_provider_when_creating_then_scheme_is_gs() {
    let mut storage = Settings::defaults().unwrap().storage;
    storage.provider = StorageProviderSetting::Gcs;

    let store = StagingStoreFactory::create(&storage).unwrap();

    assert_eq!(store.scheme(), "gs");
}
