use super::remote_uri::RemoteUri;
use super::storage_path::StoragePath;

/// An audio file temporarily copied to object storage so a provider can read
/// it by reference. Lives only for the duration of one long-running call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedUpload {
    pub uri: RemoteUri,
    pub bucket: String,
    pub key: StoragePath,
}

impl StagedUpload {
    pub fn new(scheme: &str, bucket: &str, key: StoragePath) -> Self {
        Self {
            uri: RemoteUri::new(scheme, bucket, &key),
            bucket: bucket.to_string(),
            key,
        }
    }
}
