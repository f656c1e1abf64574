use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use futures::stream::BoxStream;
use object_store::ObjectStore;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

use super::object_upload::upload_stream;

/// Filesystem-backed store for offline use. Each bucket is a directory under
/// `base_path`.
pub struct LocalStagingStore {
    base_path: PathBuf,
}

impl LocalStagingStore {
    pub fn new(base_path: PathBuf) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&base_path).map_err(StagingStoreError::Io)?;
        Ok(Self { base_path })
    }

    /// Creates the bucket directory if missing.
    pub fn ensure_bucket(&self, bucket: &str) -> Result<(), StagingStoreError> {
        let dir = self.bucket_dir(bucket)?;
        std::fs::create_dir_all(dir).map_err(StagingStoreError::Io)
    }

    fn bucket_dir(&self, bucket: &str) -> Result<PathBuf, StagingStoreError> {
        let valid = !bucket.is_empty()
            && bucket != "."
            && bucket != ".."
            && !bucket.contains(['/', '\\']);
        if !valid {
            return Err(StagingStoreError::BucketUnavailable {
                bucket: bucket.to_string(),
                reason: "invalid bucket name".to_string(),
            });
        }
        Ok(self.base_path.join(bucket))
    }

    fn bucket_store(&self, bucket: &str) -> Result<LocalFileSystem, StagingStoreError> {
        let dir = self.bucket_dir(bucket)?;
        LocalFileSystem::new_with_prefix(dir)
            .map_err(|e| StagingStoreError::Configuration(e.to_string()))
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    fn scheme(&self) -> &'static str {
        "local"
    }

    async fn check_bucket(&self, bucket: &str) -> Result<(), StagingStoreError> {
        let dir = self.bucket_dir(bucket)?;
        match tokio::fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(StagingStoreError::BucketUnavailable {
                bucket: bucket.to_string(),
                reason: "not a directory".to_string(),
            }),
            Err(e) => Err(StagingStoreError::BucketUnavailable {
                bucket: bucket.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn store(
        &self,
        bucket: &str,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        let store = self.bucket_store(bucket)?;
        upload_stream(&store, &StorePath::from(path.as_str()), stream).await
    }

    async fn delete(&self, bucket: &str, path: &StoragePath) -> Result<(), StagingStoreError> {
        let store = self.bucket_store(bucket)?;
        store
            .delete(&StorePath::from(path.as_str()))
            .await
            .map_err(|e| StagingStoreError::DeleteFailed(e.to_string()))
    }
}
