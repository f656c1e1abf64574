use std::io;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::StagingStoreError;

/// Streams `stream` into `path` as a multipart upload, aborting the upload on
/// any error. Returns the number of bytes written.
pub(super) async fn upload_stream(
    store: &dyn ObjectStore,
    path: &StorePath,
    mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
) -> Result<u64, StagingStoreError> {
    let mut upload = store
        .put_multipart(path)
        .await
        .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

    let mut total_bytes: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(b) => b,
            Err(e) => {
                let _ = upload.abort().await;
                return Err(StagingStoreError::Io(e));
            }
        };
        total_bytes += bytes.len() as u64;
        if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
            let _ = upload.abort().await;
            return Err(StagingStoreError::UploadFailed(e.to_string()));
        }
    }

    upload
        .complete()
        .await
        .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

    Ok(total_bytes)
}
