//! In-process bucket backed by `object_store::memory::InMemory`.
//!
//! Presigned URLs are deterministic and unsigned:
//! `{base_url}/{bucket}/{key}?X-Amz-Expires={seconds}`.

use super::{
    s3_backend::{list_prefix, object_path, open_stream},
    storage_service::{ObjectBackend, ObjectReader, StorageError, StorageResult},
};
use crate::models::object::{Listing, encode_key};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::{ObjectStoreExt, PutPayload, memory::InMemory};
use std::time::Duration;

pub struct MemoryBackend {
    store: InMemory,
    bucket: String,
    base_url: String,
}

impl MemoryBackend {
    pub fn new(bucket: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            store: InMemory::new(),
            bucket: bucket.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Store `data` under `key`, replacing any previous object.
    pub async fn put(&self, key: &str, data: impl Into<Bytes>) -> StorageResult<()> {
        let location = object_path(key)?;
        self.store
            .put(&location, PutPayload::from(data.into()))
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ObjectBackend for MemoryBackend {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn list(&self, prefix: &str) -> StorageResult<Listing> {
        list_prefix(&self.store, prefix).await
    }

    async fn get(&self, key: &str) -> StorageResult<ObjectReader> {
        open_stream(&self.store, key).await
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        Ok(format!(
            "{}/{}/{}?X-Amz-Expires={}",
            self.base_url,
            self.bucket,
            encode_key(key),
            expires_in.as_secs()
        ))
    }
}
