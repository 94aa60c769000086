//! HTTP handlers for browsing the bucket.
//! Object bodies are streamed in bounded chunks rather than buffered, and
//! every store call goes through `StorageService`.

use crate::{
    errors::AppError,
    models::object::DELIMITER,
    render::{render_listing, render_player},
    services::storage_service::{ObjectBody, StorageService},
};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use futures::Stream;
use std::io;
use tokio_util::io::{ReaderStream, StreamReader};
use tracing::info;

/// Upper bound on the size of each body frame sent to the client.
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// `GET /` — list the bucket root.
pub async fn list_root(State(service): State<StorageService>) -> Result<Html<String>, AppError> {
    list_prefix(&service, "").await
}

/// `GET /{*key}` — list when `key` ends with `/`, otherwise stream the object.
pub async fn view_object(
    State(service): State<StorageService>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    if key.ends_with(DELIMITER) {
        return Ok(list_prefix(&service, &key).await?.into_response());
    }

    let reader = service.open_object(&key).await?;
    info!(key = %reader.key, size_bytes = reader.size, "streaming object");

    let mut response = Response::new(Body::from_stream(rechunk(reader.body)));
    *response.status_mut() = StatusCode::OK;
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(reader.size));

    Ok(response)
}

/// `GET /_redirect/{*key}` — 302 to a freshly presigned download URL.
pub async fn redirect_object(
    State(service): State<StorageService>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    let url = service.presigned_url(&key).await?;
    info!(key = %key, "redirecting to presigned url");
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}

/// `GET /_watch/{*key}` — episode player for `key` and its siblings.
pub async fn watch_episode(
    State(service): State<StorageService>,
    Path(key): Path<String>,
) -> Result<Html<String>, AppError> {
    render_episode(&service, &key).await
}

/// `GET /_watch/` — player over the objects at the bucket root.
pub async fn watch_root(State(service): State<StorageService>) -> Result<Html<String>, AppError> {
    render_episode(&service, "").await
}

async fn list_prefix(service: &StorageService, prefix: &str) -> Result<Html<String>, AppError> {
    let listing = service.list_directory(prefix).await?;
    Ok(Html(render_listing(service.bucket(), &listing)))
}

async fn render_episode(service: &StorageService, key: &str) -> Result<Html<String>, AppError> {
    let sequence = service.episode_sequence(key).await?;
    let nav = sequence.navigation(key);
    info!(
        series = %sequence.series,
        current = %nav.current,
        episodes = sequence.episodes.len(),
        "rendering player"
    );
    Ok(Html(render_player(&sequence, &nav)))
}

/// Re-frame an object body into chunks of at most `STREAM_CHUNK_SIZE` bytes.
pub fn rechunk(body: ObjectBody) -> impl Stream<Item = io::Result<Bytes>> + Send + 'static {
    ReaderStream::with_capacity(StreamReader::new(body), STREAM_CHUNK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{StreamExt, TryStreamExt, stream};

    #[tokio::test]
    async fn rechunk_bounds_frames_and_preserves_bytes() {
        let parts: Vec<io::Result<Bytes>> = vec![
            Ok(Bytes::from(vec![1u8; 100_000])),
            Ok(Bytes::from(vec![2u8; 10])),
            Ok(Bytes::from(vec![3u8; 70_000])),
        ];
        let body: ObjectBody = stream::iter(parts).boxed();

        let frames: Vec<Bytes> = rechunk(body).try_collect().await.unwrap();
        assert!(frames.iter().all(|f| !f.is_empty() && f.len() <= STREAM_CHUNK_SIZE));

        let joined = frames.concat();
        assert_eq!(joined.len(), 170_010);
        assert!(joined[..100_000].iter().all(|b| *b == 1));
        assert!(joined[100_000..100_010].iter().all(|b| *b == 2));
        assert!(joined[100_010..].iter().all(|b| *b == 3));
    }

    #[tokio::test]
    async fn rechunk_passes_errors_through() {
        let parts: Vec<io::Result<Bytes>> = vec![
            Ok(Bytes::from_static(b"abc")),
            Err(io::Error::other("connection reset")),
        ];
        let body: ObjectBody = stream::iter(parts).boxed();

        let result: io::Result<Vec<Bytes>> = rechunk(body).try_collect().await;
        assert!(result.is_err());
    }
}
