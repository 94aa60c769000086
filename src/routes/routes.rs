//! Defines routes for browsing one bucket.
//!
//! ## Structure
//! - `GET /`                  — root listing
//! - `GET /{*key}`            — nested listing when `key` ends in `/`, else the object body
//! - `GET /_redirect/{*key}`  — 302 to a presigned download URL
//! - `GET /_watch/{*key}`     — episode player for `key`
//!
//! The wildcard `*key` allows nested keys like `shows/season-1/ep01.mp4`.
//! Static `_redirect`/`_watch` segments take precedence over the wildcard.

use crate::{
    handlers::object_handlers::{
        list_root, redirect_object, view_object, watch_episode, watch_root,
    },
    services::storage_service::StorageService,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the router carrying `StorageService` as shared state.
pub fn routes() -> Router<StorageService> {
    Router::new()
        .route("/", get(list_root))
        .route("/_redirect/{*key}", get(redirect_object))
        .route("/_watch/", get(watch_root))
        .route("/_watch/{*key}", get(watch_episode))
        .route("/{*key}", get(view_object))
        .layer(TraceLayer::new_for_http())
}

/// Router with state applied, ready to serve.
pub fn app(storage: StorageService) -> Router {
    routes().with_state(storage)
}
