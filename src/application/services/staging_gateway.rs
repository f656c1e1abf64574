use std::path::Path;
use std::sync::Arc;

use futures::StreamExt;
use tokio_util::io::ReaderStream;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{StagedUpload, StoragePath};

const FALLBACK_FILENAME: &str = "audio";

/// Copies local files into a staging bucket and removes them again.
#[derive(Clone)]
pub struct StagingGateway {
    store: Arc<dyn StagingStore>,
}

impl StagingGateway {
    pub fn new(store: Arc<dyn StagingStore>) -> Self {
        Self { store }
    }

    /// The bucket is checked before anything is uploaded.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn stage(&self, path: &Path, bucket: &str) -> Result<StagedUpload, StagingStoreError> {
        self.store.check_bucket(bucket).await?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(FALLBACK_FILENAME);
        let key = StoragePath::staged_audio(filename);

        let file = tokio::fs::File::open(path).await?;
        let content_length = file.metadata().await?.len();
        let stream = ReaderStream::new(file).boxed();

        let written = self
            .store
            .store(bucket, &key, stream, Some(content_length))
            .await?;

        let staged = StagedUpload::new(self.store.scheme(), bucket, key);
        tracing::info!(uri = %staged.uri, bytes = written, "Audio staged");
        Ok(staged)
    }

    /// Best effort. Failures are logged and swallowed.
    pub async fn unstage(&self, staged: &StagedUpload) {
        if let Err(e) = self.store.delete(&staged.bucket, &staged.key).await {
            tracing::warn!(uri = %staged.uri, error = %e, "Failed to clean up staged audio");
        } else {
            tracing::debug!(uri = %staged.uri, "Staged audio removed");
        }
    }

    /// Ties the lifetime of `staged` to the returned guard.
    pub fn cleanup_on_exit(&self, staged: StagedUpload) -> StagedCleanup {
        StagedCleanup {
            gateway: self.clone(),
            staged: Some(staged),
        }
    }
}

/// Removes a staged object once the call that needed it is over.
///
/// Call [`StagedCleanup::finish`] on the normal path. If the guard is dropped
/// first, for example because the request future was cancelled, removal is
/// spawned onto the current runtime instead.
pub struct StagedCleanup {
    gateway: StagingGateway,
    staged: Option<StagedUpload>,
}

impl StagedCleanup {
    pub async fn finish(mut self) {
        if let Some(staged) = self.staged.take() {
            self.gateway.unstage(&staged).await;
        }
    }
}

impl Drop for StagedCleanup {
    fn drop(&mut self) {
        let Some(staged) = self.staged.take() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                tracing::warn!(uri = %staged.uri, "Transcription abandoned, removing staged audio");
                let gateway = self.gateway.clone();
                handle.spawn(async move {
                    gateway.unstage(&staged).await;
                });
            }
            Err(_) => {
                tracing::error!(uri = %staged.uri, "No runtime to remove staged audio");
            }
        }
    }
}
