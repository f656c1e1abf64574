use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StoragePath;

/// Object storage that can hold audio for a provider to read by reference.
/// One store serves any number of buckets.
#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    /// URI scheme the provider uses to address objects in this store.
    fn scheme(&self) -> &'static str;

    /// Fails with [`StagingStoreError::BucketUnavailable`] when the bucket is
    /// missing or cannot be reached. Never creates it.
    async fn check_bucket(&self, bucket: &str) -> Result<(), StagingStoreError>;

    async fn store(
        &self,
        bucket: &str,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError>;

    async fn delete(&self, bucket: &str, path: &StoragePath) -> Result<(), StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("Bucket '{bucket}' does not exist or is not accessible: {reason}")]
    BucketUnavailable { bucket: String, reason: String },
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("store configuration failed: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
