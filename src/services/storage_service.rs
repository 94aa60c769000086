//! src/services/storage_service.rs
//!
//! StorageService — the three store operations the browser needs (list one
//! directory level, read one object, presign one download) plus the episode
//! lookup built on top of listing. The store itself sits behind
//! `ObjectBackend` so the S3 client can be swapped for an in-memory store.

use crate::models::{
    episode::EpisodeSequence,
    object::{Listing, series_prefix},
};
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::{io, pin::Pin, sync::Arc, time::Duration, time::Instant};
use thiserror::Error;
use tracing::{debug, error};

/// Lifetime of every presigned download link.
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(600);

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object `{0}` not found")]
    NotFound(String),
    #[error("invalid object key `{key}`: {reason}")]
    InvalidKey { key: String, reason: String },
    #[error("storage configuration error: {0}")]
    Config(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Object payload as a stream of byte chunks of backend-defined size.
pub type ObjectBody = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// An object opened for reading.
pub struct ObjectReader {
    pub key: String,
    pub size: u64,
    pub body: ObjectBody,
}

/// The store contract consumed by the browser. One backend serves exactly
/// one bucket.
#[async_trait]
pub trait ObjectBackend: Send + Sync {
    /// Name of the bucket this backend is bound to.
    fn bucket(&self) -> &str;

    /// List one directory level below `prefix` using `/` as the delimiter.
    async fn list(&self, prefix: &str) -> StorageResult<Listing>;

    /// Open an object for streaming. Returns `NotFound` for missing keys.
    async fn get(&self, key: &str) -> StorageResult<ObjectReader>;

    /// Mint a presigned GET URL. Does not check that the key exists.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> StorageResult<String>;
}

/// Shared request-handler state: read-only after startup.
#[derive(Clone)]
pub struct StorageService {
    backend: Arc<dyn ObjectBackend>,
}

impl StorageService {
    pub fn new(backend: Arc<dyn ObjectBackend>) -> Self {
        Self { backend }
    }

    pub fn bucket(&self) -> &str {
        self.backend.bucket()
    }

    /// List the directory level named by `prefix` (empty for the root).
    pub async fn list_directory(&self, prefix: &str) -> StorageResult<Listing> {
        let start = Instant::now();
        let listing = self.backend.list(prefix).await.inspect_err(|e| {
            error!(
                error = %e,
                bucket = %self.bucket(),
                prefix = %prefix,
                "listing failed"
            );
        })?;

        debug!(
            bucket = %self.bucket(),
            prefix = %prefix,
            directories = listing.directories.len(),
            objects = listing.objects.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "listed prefix"
        );
        Ok(listing)
    }

    /// Open `key` for reading.
    pub async fn open_object(&self, key: &str) -> StorageResult<ObjectReader> {
        match self.backend.get(key).await {
            Ok(reader) => {
                debug!(bucket = %self.bucket(), key = %key, size_bytes = reader.size, "opened object");
                Ok(reader)
            }
            Err(StorageError::NotFound(key)) => {
                debug!(bucket = %self.bucket(), key = %key, "object not found");
                Err(StorageError::NotFound(key))
            }
            Err(e) => {
                error!(error = %e, bucket = %self.bucket(), key = %key, "get failed");
                Err(e)
            }
        }
    }

    /// Mint a fresh presigned download URL valid for `PRESIGN_EXPIRY`.
    pub async fn presigned_url(&self, key: &str) -> StorageResult<String> {
        self.backend
            .presign_get(key, PRESIGN_EXPIRY)
            .await
            .inspect_err(|e| {
                error!(error = %e, bucket = %self.bucket(), key = %key, "presign failed");
            })
    }

    /// Re-list the series containing `key` to get its ordered episodes.
    pub async fn episode_sequence(&self, key: &str) -> StorageResult<EpisodeSequence> {
        let listing = self.list_directory(series_prefix(key)).await?;
        Ok(EpisodeSequence::from_listing(listing))
    }
}
