use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::gcs_store::GcsStagingStore;
use super::local_store::LocalStagingStore;

pub struct StagingStoreFactory;

impl StagingStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn StagingStore>, StagingStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = LocalStagingStore::new(PathBuf::from(&settings.local_path))?;
                store.ensure_bucket(&settings.bucket)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Gcs => {
                let store = GcsStagingStore::new(settings.service_account_path.clone());
                Ok(Arc::new(store))
            }
        }
    }
}
