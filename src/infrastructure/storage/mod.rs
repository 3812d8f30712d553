use async_trait::async_trait;
use bytes::Bytes;

pub mod gateway;
pub mod memory;
pub mod s3;

pub use gateway::StorageGateway;
pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub content_type: Option<String>,
    pub size: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("transfer failed: {0}")]
    Transfer(String),
}

/// Raw object-store capability. Policy (verification, swallowing) lives in
/// [`StorageGateway`].
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError>;

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, StorageError>;

    async fn list_keys(&self, bucket: &str, prefix: Option<&str>)
    -> Result<Vec<String>, StorageError>;
}
