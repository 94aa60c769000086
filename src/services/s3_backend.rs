//! `ObjectBackend` implementations on top of the `object_store` crate.
//!
//! `S3Backend` talks to AWS S3 or any S3-compatible endpoint; the listing and
//! read paths are shared with `MemoryBackend` through the generic helpers
//! below.

use super::storage_service::{ObjectBackend, ObjectReader, StorageError, StorageResult};
use crate::models::object::{DELIMITER, Listing, ObjectEntry};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use http::Method;
use object_store::{
    Error as ObjectStoreError, ListResult, ObjectStore, ObjectStoreExt,
    aws::{AmazonS3, AmazonS3Builder},
    path::Path,
    signer::Signer,
};
use std::{io, time::Duration};

/// Convert a bucket key into an `object_store` path without re-encoding it.
pub(crate) fn object_path(key: &str) -> StorageResult<Path> {
    let trimmed = key.trim_end_matches(DELIMITER);
    Path::parse(trimmed).map_err(|e| StorageError::InvalidKey {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// One delimiter-scoped listing of `prefix`.
pub(crate) async fn list_prefix<S: ObjectStore>(store: &S, prefix: &str) -> StorageResult<Listing> {
    let location = if prefix.trim_end_matches(DELIMITER).is_empty() {
        None
    } else {
        Some(object_path(prefix)?)
    };

    let result = store
        .list_with_delimiter(location.as_ref())
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?;

    Ok(listing_from(prefix, location.as_ref(), result))
}

/// Shape a raw `ListResult` into a `Listing`.
///
/// Folder markers (zero-byte `prefix/` keys created by S3 consoles) come back
/// with the trailing delimiter stripped, i.e. equal to `location`; they are
/// not objects of the directory.
fn listing_from(prefix: &str, location: Option<&Path>, result: ListResult) -> Listing {
    let directories = result
        .common_prefixes
        .iter()
        .map(|p| format!("{}{}", p, DELIMITER))
        .collect();

    let objects = result
        .objects
        .into_iter()
        .filter(|meta| location != Some(&meta.location))
        .map(|meta| ObjectEntry {
            key: meta.location.to_string(),
            size: meta.size,
            last_modified: meta.last_modified,
        })
        .collect();

    Listing {
        prefix: prefix.to_string(),
        directories,
        objects,
    }
}

/// Open `key` as a byte stream, mapping a missing object to `NotFound`.
pub(crate) async fn open_stream<S: ObjectStore>(store: &S, key: &str) -> StorageResult<ObjectReader> {
    let location = object_path(key)?;
    let result = store.get(&location).await.map_err(|e| match e {
        ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
        other => StorageError::Backend(other.to_string()),
    })?;

    let size = result.meta.size;
    let body = result
        .into_stream()
        .map_err(io::Error::other)
        .boxed();

    Ok(ObjectReader {
        key: key.to_string(),
        size,
        body,
    })
}

/// S3 (or S3-compatible) bucket accessed through `object_store`.
#[derive(Clone)]
pub struct S3Backend {
    store: AmazonS3,
    bucket: String,
}

impl S3Backend {
    /// Build a client from the `AWS_*` environment plus explicit settings.
    ///
    /// `endpoint` selects an S3-compatible provider such as MinIO
    /// (e.g. "http://localhost:9000"); plain http is only allowed then.
    pub fn new(
        bucket: String,
        region: Option<String>,
        endpoint: Option<String>,
    ) -> StorageResult<Self> {
        Self::with_builder(AmazonS3Builder::from_env(), bucket, region, endpoint)
    }

    /// Same as `new`, starting from an explicit builder instead of the environment.
    pub fn with_builder(
        builder: AmazonS3Builder,
        bucket: String,
        region: Option<String>,
        endpoint: Option<String>,
    ) -> StorageResult<Self> {
        let mut builder = builder.with_bucket_name(bucket.clone());

        if let Some(region) = region {
            builder = builder.with_region(region);
        }

        if let Some(endpoint) = endpoint {
            let allow_http = endpoint.starts_with("http://");
            builder = builder.with_endpoint(endpoint).with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::Config(e.to_string()))?;

        Ok(Self { store, bucket })
    }
}

#[async_trait]
impl ObjectBackend for S3Backend {
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
        let location = object_path(key)?;
        let url = self
            .store
            .signed_url(Method::GET, &location, expires_in)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(url.to_string())
    }
}
