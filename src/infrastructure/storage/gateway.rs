use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use super::{ObjectMetadata, ObjectStore};
use crate::common::error::PipelineError;

/// Moves bytes between the object store and the local staging area.
#[derive(Clone)]
pub struct StorageGateway {
    store: Arc<dyn ObjectStore>,
}

impl StorageGateway {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Downloads `bucket/key` into `dest`. Single attempt.
    pub async fn fetch(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64, PipelineError> {
        info!(bucket, key, "⬇️ Downloading object");

        let data = self.store.get_object(bucket, key).await.map_err(|e| {
            error!(bucket, key, "Download failed: {}", e);
            PipelineError::from(e)
        })?;

        tokio::fs::write(dest, &data).await?;

        info!(bucket, key, size_bytes = data.len(), path = %dest.display(), "⬇️ Downloaded");
        Ok(data.len() as u64)
    }

    /// Uploads `local` to `bucket/key`, then checks the write is visible.
    ///
    /// A failed head query is fatal. A key missing from the post-upload
    /// listing is only logged; callers confirm existence themselves.
    pub async fn store(
        &self,
        local: &Path,
        bucket: &str,
        key: &str,
        content_type: &str,
    ) -> Result<(), PipelineError> {
        let metadata = match tokio::fs::metadata(local).await {
            Ok(m) if m.is_file() => m,
            Ok(_) | Err(_) => {
                return Err(PipelineError::NotFound(format!(
                    "local file not found: {}",
                    local.display()
                )));
            }
        };
        info!(path = %local.display(), size_bytes = metadata.len(), "Pre-upload check passed");

        let existing = self.list(bucket, Some(key)).await;
        if existing.iter().any(|k| k == key) {
            debug!(bucket, key, "Destination already exists, overwriting");
        }

        let body = tokio::fs::read(local).await?;
        info!(bucket, key, content_type, "⬆️ Uploading");
        self.store
            .put_object(bucket, key, body.into(), content_type)
            .await
            .map_err(|e| {
                error!(bucket, key, "Upload failed: {}", e);
                PipelineError::from(e)
            })?;

        let head = self
            .store
            .head_object(bucket, key)
            .await
            .map_err(|e| PipelineError::Verification(format!("head {}/{}: {}", bucket, key, e)))?;
        info!(bucket, key, size_bytes = head.size, "Upload verified by head");

        let listed = self.list(bucket, Some(key)).await;
        if listed.iter().any(|k| k == key) {
            info!(bucket, key, "Upload visible in listing");
        } else {
            error!(bucket, key, "Upload missing from post-upload listing");
        }

        Ok(())
    }

    /// Lists keys under `prefix`. Any listing error yields an empty list.
    pub async fn list(&self, bucket: &str, prefix: Option<&str>) -> Vec<String> {
        match self.store.list_keys(bucket, prefix).await {
            Ok(keys) => keys,
            Err(e) => {
                error!(bucket, prefix = prefix.unwrap_or(""), "Listing failed: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn head(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, PipelineError> {
        Ok(self.store.head_object(bucket, key).await?)
    }
}
