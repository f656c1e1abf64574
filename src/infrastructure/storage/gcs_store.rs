use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::ObjectStore;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::path::Path as StorePath;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

use super::object_upload::upload_stream;

/// Google Cloud Storage. Credentials come from the environment
/// (`GOOGLE_APPLICATION_CREDENTIALS` and friends) unless a service account
/// file is given explicitly.
pub struct GcsStagingStore {
    service_account_path: Option<String>,
}

impl GcsStagingStore {
    pub fn new(service_account_path: Option<String>) -> Self {
        Self {
            service_account_path,
        }
    }

    fn bucket_store(&self, bucket: &str) -> Result<Arc<dyn ObjectStore>, StagingStoreError> {
        let mut builder = GoogleCloudStorageBuilder::from_env().with_bucket_name(bucket);
        if let Some(path) = &self.service_account_path {
            builder = builder.with_service_account_path(path);
        }

        let store = builder
            .build()
            .map_err(|e| StagingStoreError::Configuration(e.to_string()))?;
        Ok(Arc::new(store))
    }
}

#[async_trait::async_trait]
impl StagingStore for GcsStagingStore {
    fn scheme(&self) -> &'static str {
        "gs"
    }

    async fn check_bucket(&self, bucket: &str) -> Result<(), StagingStoreError> {
        let unavailable = |reason: String| StagingStoreError::BucketUnavailable {
            bucket: bucket.to_string(),
            reason,
        };

        let store = self.bucket_store(bucket).map_err(|e| unavailable(e.to_string()))?;
        store
            .list_with_delimiter(None)
            .await
            .map(|_| ())
            .map_err(|e| unavailable(e.to_string()))
    }

    async fn store(
        &self,
        bucket: &str,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        let store = self.bucket_store(bucket)?;
        upload_stream(store.as_ref(), &StorePath::from(path.as_str()), stream).await
    }

    async fn delete(&self, bucket: &str, path: &StoragePath) -> Result<(), StagingStoreError> {
        let store = self.bucket_store(bucket)?;
        store
            .delete(&StorePath::from(path.as_str()))
            .await
            .map_err(|e| StagingStoreError::DeleteFailed(e.to_string()))
    }
}
