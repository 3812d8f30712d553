use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use bytes::Bytes;

use super::{ObjectMetadata, ObjectStore, StorageError};

#[derive(Clone)]
struct StoredObject {
    body: Bytes,
    content_type: String,
}

/// Bucket-and-key map held in process. Buckets spring into existence on first put.
#[derive(Clone, Default)]
pub struct MemoryObjectStore {
    objects: Arc<Mutex<BTreeMap<(String, String), StoredObject>>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, key: &str, body: impl Into<Bytes>, content_type: &str) {
        self.lock().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.into(),
                content_type: content_type.to_string(),
            },
        );
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.lock()
            .contains_key(&(bucket.to_string(), key.to_string()))
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<(String, String), StoredObject>> {
        // a poisoned map is still a consistent map
        self.objects.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn lookup(&self, bucket: &str, key: &str) -> Result<StoredObject, StorageError> {
        self.lock()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("{}/{}", bucket, key)))
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        Ok(self.lookup(bucket, key)?.body)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.insert(bucket, key, body, content_type);
        Ok(())
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, StorageError> {
        let object = self.lookup(bucket, key)?;
        Ok(ObjectMetadata {
            content_type: Some(object.content_type),
            size: object.body.len() as u64,
        })
    }

    async fn list_keys(
        &self,
        bucket: &str,
        prefix: Option<&str>,
    ) -> Result<Vec<String>, StorageError> {
        let prefix = prefix.unwrap_or("");
        Ok(self
            .lock()
            .keys()
            .filter(|(b, k)| b == bucket && k.starts_with(prefix))
            .map(|(_, k)| k.clone())
            .collect())
    }
}
